//! ターミナル向けテキスト描画

use pizza_co_common::storefront::{
    FooterState, MenuState, CLEAR_BUTTON, MENU_HEADING, MENU_INTRO, NO_ORDERS, NO_RESULTS,
    ORDERS_HEADING, SHOP_NAME,
};
use pizza_co_common::PizzaRecord;

pub fn header_text() -> String {
    format!("🍕 {}\n", SHOP_NAME)
}

/// メニュー1行: 名前・価格・具材・画像
pub fn pizza_line(pizza: &PizzaRecord, base_path: &str) -> String {
    format!(
        "  {:<12} {:>4}  {}\n  {:<12} {}",
        pizza.name,
        pizza.price_label(),
        pizza.ingredients,
        "",
        pizza.image_url(base_path)
    )
}

pub fn menu_text(menu: &MenuState<'_>, base_path: &str) -> String {
    let mut out = format!("{}\n{}\n\n", MENU_HEADING, MENU_INTRO);
    match menu {
        MenuState::Items(items) => {
            for pizza in items {
                out.push_str(&pizza_line(pizza, base_path));
                out.push('\n');
            }
        }
        MenuState::NoResults => {
            out.push_str(&format!("  {}\n", NO_RESULTS));
        }
    }
    out
}

pub fn footer_text(footer: &FooterState) -> String {
    let mut out = format!("{}\n", footer.status_text());
    match footer {
        FooterState::Closed => {}
        FooterState::OpenEmpty => out.push_str(&format!("{}\n", NO_ORDERS)),
        FooterState::OpenWithOrders(labels) => {
            out.push_str(&format!("{}\n", ORDERS_HEADING));
            for label in labels {
                out.push_str(&format!("  - {}\n", label));
            }
            out.push_str(&format!("[{}]\n", CLEAR_BUTTON));
        }
    }
    out
}

//! 画面モデル（全フロントエンド共通）
//!
//! ヘッダー、検索欄、メニュー、フッターの表示内容をここで決め、
//! 各フロントエンドは描画だけを担当する。

use crate::catalog::{PizzaRecord, CATALOG};
use crate::error::Result;
use crate::filter::filter_catalog;
use crate::ledger::{Confirm, MutationOutcome, OrderLedger, OrderLine};
use serde::Serialize;

pub const SHOP_NAME: &str = "Hui Zhi's Pizza Co.";
pub const SEARCH_PLACEHOLDER: &str = "Search your pizza!";
pub const MENU_HEADING: &str = "Our Menu";
pub const MENU_INTRO: &str =
    "Choose from our selection of freshly baked pizzas made with authentic ingredients and love.";
pub const NO_RESULTS: &str = "No pizzas found 🍕";
pub const ORDER_BUTTON: &str = "Order";
pub const OPEN_MESSAGE: &str = "We're currently open!";
pub const CLOSED_MESSAGE: &str = "Sorry, we're closed";
pub const NO_ORDERS: &str = "No orders yet.";
pub const ORDERS_HEADING: &str = "Your orders:";
pub const CLEAR_BUTTON: &str = "Clear All Orders";

/// 注文行の表示ラベル（例: `Funghi ×2`）
pub fn order_line_label(line: &OrderLine) -> String {
    format!("{} ×{}", line.pizza.name, line.quantity)
}

/// メニュー領域の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState<'a> {
    Items(Vec<&'a PizzaRecord>),
    NoResults,
}

impl<'a> MenuState<'a> {
    pub fn from_items(items: Vec<&'a PizzaRecord>) -> Self {
        if items.is_empty() {
            MenuState::NoResults
        } else {
            MenuState::Items(items)
        }
    }

    /// 固定カタログにフィルタを適用
    pub fn for_filter(text: &str) -> MenuState<'static> {
        MenuState::from_items(filter_catalog(&CATALOG, text))
    }

    pub fn items(&self) -> &[&'a PizzaRecord] {
        match self {
            MenuState::Items(items) => items,
            MenuState::NoResults => &[],
        }
    }
}

/// フッター領域の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterState {
    Closed,
    OpenEmpty,
    /// 表示ラベル（台帳順）
    OpenWithOrders(Vec<String>),
}

impl FooterState {
    pub fn from_parts(open: bool, ledger: &OrderLedger) -> Self {
        if !open {
            FooterState::Closed
        } else if ledger.is_empty() {
            FooterState::OpenEmpty
        } else {
            FooterState::OpenWithOrders(ledger.lines().iter().map(order_line_label).collect())
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self {
            FooterState::Closed => CLOSED_MESSAGE,
            _ => OPEN_MESSAGE,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, FooterState::Closed)
    }
}

/// JSON出力用のメニュー項目（画像URL解決済み）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub name: &'static str,
    pub ingredients: &'static str,
    pub price: u32,
    pub image_url: String,
}

impl MenuEntry {
    pub fn new(pizza: &PizzaRecord, base_path: &str) -> Self {
        Self {
            name: pizza.name,
            ingredients: pizza.ingredients,
            price: pizza.price,
            image_url: pizza.image_url(base_path),
        }
    }
}

/// メニュー項目をJSON配列に変換
pub fn menu_json(items: &[&PizzaRecord], base_path: &str) -> Result<String> {
    let entries: Vec<MenuEntry> = items.iter().map(|p| MenuEntry::new(p, base_path)).collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// 1セッション分の状態（フィルタ文字列と注文台帳）
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    filter: String,
    ledger: OrderLedger,
}

impl Storefront {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    pub fn visible(&self) -> Vec<&'static PizzaRecord> {
        filter_catalog(&CATALOG, &self.filter)
    }

    pub fn menu(&self) -> MenuState<'static> {
        MenuState::for_filter(&self.filter)
    }

    pub fn footer(&self, open: bool) -> FooterState {
        FooterState::from_parts(open, &self.ledger)
    }

    pub fn add_one(&mut self, pizza: &PizzaRecord, confirm: impl Confirm) -> MutationOutcome {
        self.ledger.add_one(pizza, confirm)
    }

    pub fn clear_all(&mut self, confirm: impl Confirm) -> MutationOutcome {
        self.ledger.clear_all(confirm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;

    #[test]
    fn test_menu_state_all() {
        let menu = MenuState::for_filter("");
        assert_eq!(menu.items().len(), 6);
    }

    #[test]
    fn test_menu_state_no_results() {
        let menu = MenuState::for_filter("zz");
        assert_eq!(menu, MenuState::NoResults);
        assert!(menu.items().is_empty());
    }

    #[test]
    fn test_footer_closed_hides_orders() {
        let mut ledger = OrderLedger::new();
        let _ = ledger.add_one(&CATALOG[0], true);

        let footer = FooterState::from_parts(false, &ledger);
        assert_eq!(footer, FooterState::Closed);
        assert_eq!(footer.status_text(), "Sorry, we're closed");
        assert!(!footer.is_open());
    }

    #[test]
    fn test_footer_open_empty() {
        let footer = FooterState::from_parts(true, &OrderLedger::new());
        assert_eq!(footer, FooterState::OpenEmpty);
        assert_eq!(footer.status_text(), "We're currently open!");
    }

    #[test]
    fn test_footer_open_with_orders() {
        let mut ledger = OrderLedger::new();
        let funghi = find("Funghi").unwrap();
        let _ = ledger.add_one(funghi, true);
        let _ = ledger.add_one(&CATALOG[0], true);
        let _ = ledger.add_one(funghi, true);

        let footer = FooterState::from_parts(true, &ledger);
        assert_eq!(
            footer,
            FooterState::OpenWithOrders(vec![
                "Funghi ×2".to_string(),
                "Margherita ×1".to_string(),
            ])
        );
    }

    #[test]
    fn test_menu_json() {
        let items = MenuState::for_filter("marg");
        let json = menu_json(items.items(), "/static").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().map(|a| a.len()), Some(1));
        assert_eq!(value[0]["name"], "Margherita");
        assert_eq!(value[0]["imageUrl"], "/static/pizzas/margherita.jpg");
    }

    #[test]
    fn test_storefront_session() {
        let mut shop = Storefront::new();
        shop.set_filter("p");
        let visible: Vec<_> = shop.visible().iter().map(|p| p.name).collect();
        assert_eq!(visible, vec!["Pepperoni", "Prosciutto"]);

        let first = shop.visible()[0];
        assert!(shop.add_one(first, true).is_applied());
        assert_eq!(shop.add_one(first, false), MutationOutcome::Declined);
        assert_eq!(shop.ledger().quantity_of("Pepperoni"), 1);

        assert_eq!(shop.clear_all(false), MutationOutcome::Declined);
        assert_eq!(shop.ledger().len(), 1);
        assert!(shop.clear_all(true).is_applied());
        assert_eq!(shop.footer(true), FooterState::OpenEmpty);
    }
}

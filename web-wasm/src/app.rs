//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::browser::{console_log, BrowserConfirm};
use crate::components::{footer::Footer, header::Header, menu::Menu, search_bar::SearchBar};
use crate::state::{apply_add, apply_clear};
use pizza_co_common::{OrderLedger, PizzaRecord};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (filter, set_filter) = signal(String::new());
    let ledger = RwSignal::new(OrderLedger::new());

    // 注文ハンドラ
    let on_order = move |pizza: PizzaRecord| {
        let updated = ledger.with_untracked(|current| apply_add(current, &pizza, BrowserConfirm));
        match updated {
            Some(next) => {
                console_log(&format!(
                    "added {} (quantity {})",
                    pizza.name,
                    next.quantity_of(pizza.name)
                ));
                ledger.set(next);
            }
            None => console_log(&format!("add {} declined", pizza.name)),
        }
    };

    // 全削除ハンドラ
    let on_clear = move |_: ()| {
        if let Some(next) = ledger.with_untracked(|current| apply_clear(current, BrowserConfirm)) {
            console_log("orders cleared");
            ledger.set(next);
        }
    };

    view! {
        <div class="container">
            <Header />
            <SearchBar filter=filter set_filter=set_filter />
            <Menu filter=filter on_order=on_order />
            <Footer ledger=ledger on_clear=on_clear />
        </div>
    }
}

//! ヘッダーコンポーネント

use leptos::prelude::*;
use pizza_co_common::storefront::SHOP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>{SHOP_NAME}</h1>
        </header>
    }
}

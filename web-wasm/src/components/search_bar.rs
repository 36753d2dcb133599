//! 検索欄コンポーネント

use leptos::prelude::*;
use pizza_co_common::storefront::SEARCH_PLACEHOLDER;

#[component]
pub fn SearchBar(filter: ReadSignal<String>, set_filter: WriteSignal<String>) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder=SEARCH_PLACEHOLDER
                prop:value=move || filter.get()
                on:input=move |ev| {
                    set_filter.set(event_target_value(&ev));
                }
            />
        </div>
    }
}

//! メニューコンポーネント

use leptos::prelude::*;
use crate::browser::image_src;
use pizza_co_common::storefront::{MENU_HEADING, MENU_INTRO, NO_RESULTS, ORDER_BUTTON};
use pizza_co_common::{filter_catalog, PizzaRecord, CATALOG};

#[component]
pub fn Menu<FO>(filter: ReadSignal<String>, on_order: FO) -> impl IntoView
where
    FO: Fn(PizzaRecord) + 'static + Clone + Send,
{
    let visible = Memo::new(move |_| filter.with(|text| filter_catalog(&CATALOG, text)));

    view! {
        <main class="menu">
            <h2>{MENU_HEADING}</h2>
            <p>{MENU_INTRO}</p>
            <ul class="pizzas">
                <For
                    each=move || visible.get()
                    key=|pizza| pizza.name
                    children=move |pizza| {
                        let on_order = on_order.clone();
                        let pizza = *pizza;
                        view! { <PizzaCard pizza=pizza on_order=on_order /> }
                    }
                />
                <Show when=move || visible.with(|items| items.is_empty())>
                    <p class="no-results">{NO_RESULTS}</p>
                </Show>
            </ul>
        </main>
    }
}

#[component]
fn PizzaCard<FO>(pizza: PizzaRecord, on_order: FO) -> impl IntoView
where
    FO: Fn(PizzaRecord) + 'static + Clone + Send,
{
    view! {
        <li class="pizza">
            <img src=image_src(&pizza) alt=pizza.name />
            <div>
                <h3>{pizza.name}</h3>
                <p>{pizza.ingredients}</p>
            </div>
            <span>{pizza.price_label()}</span>
            <button
                class="btn"
                on:click=move |_| on_order(pizza)
            >
                {ORDER_BUTTON}
            </button>
        </li>
    }
}

//! フッターコンポーネント（営業状況と注文一覧）

use leptos::prelude::*;
use crate::browser::current_hour;
use pizza_co_common::storefront::{
    FooterState, CLEAR_BUTTON, CLOSED_MESSAGE, NO_ORDERS, OPEN_MESSAGE, ORDERS_HEADING,
};
use pizza_co_common::{is_open, OrderLedger};

#[component]
pub fn Footer<FC>(ledger: RwSignal<OrderLedger>, on_clear: FC) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    // 描画のたびに時計を読む
    let footer_state = move || ledger.with(|l| FooterState::from_parts(is_open(current_hour()), l));

    view! {
        <footer class="footer">
            {move || match footer_state() {
                FooterState::Closed => view! { <p>{CLOSED_MESSAGE}</p> }.into_any(),
                FooterState::OpenEmpty => view! {
                    <div class="order">
                        <p>{OPEN_MESSAGE}</p>
                        <p>{NO_ORDERS}</p>
                    </div>
                }
                .into_any(),
                FooterState::OpenWithOrders(labels) => {
                    let on_clear = on_clear.clone();
                    view! {
                        <div class="order">
                            <p>{OPEN_MESSAGE}</p>
                            <p>{ORDERS_HEADING}</p>
                            <ul>
                                {labels
                                    .into_iter()
                                    .map(|label| view! { <li>{label}</li> })
                                    .collect_view()}
                            </ul>
                            <button class="clear-btn" on:click=move |_| on_clear(())>
                                {CLEAR_BUTTON}
                            </button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </footer>
    }
}

//! Orders page: the signed-in user's purchases with refund requests.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::order_row::OrderRow;
use crate::net::types::Order;
use crate::state::auth::SessionStore;
use crate::util::auth::install_unauth_redirect;
use crate::util::storage;

/// Fetch orders with the stored bearer token; `None` when signed out or
/// when the request fails.
async fn load_orders() -> Option<Vec<Order>> {
    let token = storage::load_token()?;
    crate::net::api::fetch_orders(&token).await
}

/// Orders page: a table of orders with a refund action on refundable rows.
/// Redirects to `/login` once the session has hydrated without a user.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    install_unauth_redirect(session.auth, navigate);

    let orders = LocalResource::new(load_orders);
    let info = RwSignal::new(String::new());

    let on_refund = Callback::new(move |order_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let orders = orders.clone();
            leptos::task::spawn_local(async move {
                let Some(token) = storage::load_token() else {
                    return;
                };
                match crate::net::api::request_refund(&token, &order_id).await {
                    Ok(_) => {
                        info.set(String::new());
                        orders.refetch();
                    }
                    Err(e) => info.set(e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = order_id;
        }
    });

    view! {
        <div class="orders-page">
            <h1>"Your Orders"</h1>
            <Show when=move || !info.get().is_empty()>
                <p class="orders-page__message">{move || info.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                {move || {
                    orders.get().map(|list| match list {
                        Some(list) if !list.is_empty() => {
                            view! {
                                <table class="orders-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Order"</th>
                                            <th>"Date"</th>
                                            <th>"Items"</th>
                                            <th>"Total"</th>
                                            <th>"Status"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|order| {
                                                view! { <OrderRow order=order on_refund=on_refund/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                        Some(_) => view! { <p class="orders-page__empty">"No orders yet."</p> }.into_any(),
                        None => {
                            view! { <p class="orders-page__empty">"Orders are unavailable right now."</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

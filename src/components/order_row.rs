//! Row component for one order in the orders table.
//!
//! DESIGN
//! ======
//! Owns the per-order presentation policy (status labels, when the refund
//! action is offered); the page owns the network side of the action.

#[cfg(test)]
#[path = "order_row_test.rs"]
mod order_row_test;

use leptos::prelude::*;

use crate::net::types::Order;
use crate::util::format::{display_date, format_price_cents};

/// Whether an order is in a state the customer may request a refund from.
///
/// Only settled, un-refunded orders qualify; unknown statuses are treated
/// conservatively as not refundable.
pub fn can_request_refund(status: &str) -> bool {
    matches!(status, "paid" | "shipped")
}

/// Humanize a wire status value for display (`refund_requested` →
/// `Refund requested`).
pub fn status_label(status: &str) -> String {
    let mut label = status.replace('_', " ");
    if let Some(first) = label.get(..1) {
        let upper = first.to_ascii_uppercase();
        label.replace_range(..1, &upper);
    }
    label
}

/// One order row: id, date, items, total, status, refund action.
#[component]
pub fn OrderRow(order: Order, on_refund: Callback<String>) -> impl IntoView {
    let refundable = can_request_refund(&order.status);
    let date = display_date(&order.created_at).to_owned();
    let total = format_price_cents(order.total_cents);
    let status = status_label(&order.status);
    let item_titles = order
        .items
        .iter()
        .map(|item| item.title.clone())
        .collect::<Vec<_>>()
        .join(", ");

    let on_refund_click = Callback::new({
        let id = order.id.clone();
        move |()| on_refund.run(id.clone())
    });

    view! {
        <tr class="order-row">
            <td class="order-row__id">{order.id.clone()}</td>
            <td class="order-row__date">{date}</td>
            <td class="order-row__items">{item_titles}</td>
            <td class="order-row__total">{total}</td>
            <td class="order-row__status">{status}</td>
            <td class="order-row__actions">
                <Show when=move || refundable>
                    <button
                        class="order-row__refund"
                        on:click=move |_| on_refund_click.run(())
                    >
                        "Request refund"
                    </button>
                </Show>
            </td>
        </tr>
    }
}

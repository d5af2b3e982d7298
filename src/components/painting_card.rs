//! Card component for one catalog painting.
//!
//! DESIGN
//! ======
//! Keeps painting presentation consistent between the gallery grid and any
//! artist-scoped listing.

use leptos::prelude::*;

use crate::net::types::Painting;
use crate::util::format::format_price_cents;

/// A single painting: image, title, artist, price, sold badge.
#[component]
pub fn PaintingCard(painting: Painting) -> impl IntoView {
    let price = format_price_cents(painting.price_cents);
    let sold = painting.sold;
    let alt = painting.title.clone();

    view! {
        <article class="painting-card" class:painting-card--sold=sold>
            <img class="painting-card__image" src=painting.image_url alt=alt/>
            <div class="painting-card__body">
                <span class="painting-card__title">{painting.title}</span>
                <span class="painting-card__artist">{painting.artist_name}</span>
                <span class="painting-card__price">{price}</span>
                <Show when=move || sold>
                    <span class="painting-card__badge">"Sold"</span>
                </Show>
            </div>
        </article>
    }
}

//! Gallery page listing the painting catalog.

use leptos::prelude::*;

use crate::components::painting_card::PaintingCard;

/// Landing page. Fetches the catalog on mount and renders it as a grid.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let paintings = LocalResource::new(|| crate::net::api::fetch_paintings());

    view! {
        <div class="gallery-page">
            <header class="gallery-page__header">
                <h1>"Original paintings, directly from the artists"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading the collection..."</p> }>
                {move || {
                    paintings.get().map(|list| match list {
                        Some(list) if !list.is_empty() => {
                            view! {
                                <div class="gallery-page__grid">
                                    {list
                                        .into_iter()
                                        .map(|painting| view! { <PaintingCard painting=painting/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                        Some(_) => view! { <p>"The collection is empty right now."</p> }.into_any(),
                        None => {
                            view! { <p>"The collection is unavailable right now."</p> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

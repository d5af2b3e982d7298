//! Artists page listing every artist with a storefront presence.

use leptos::prelude::*;

/// Artist roster: name and short biography per artist.
#[component]
pub fn ArtistsPage() -> impl IntoView {
    let artists = LocalResource::new(|| crate::net::api::fetch_artists());

    view! {
        <div class="artists-page">
            <h1>"Artists"</h1>
            <Suspense fallback=move || view! { <p>"Loading artists..."</p> }>
                {move || {
                    artists.get().map(|list| match list {
                        Some(list) if !list.is_empty() => {
                            view! {
                                <ul class="artists-page__list">
                                    {list
                                        .into_iter()
                                        .map(|artist| {
                                            view! {
                                                <li class="artists-page__entry">
                                                    <span class="artists-page__name">{artist.name}</span>
                                                    <p class="artists-page__bio">{artist.bio}</p>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                        Some(_) => view! { <p>"No artists have joined yet."</p> }.into_any(),
                        None => view! { <p>"Artists are unavailable right now."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

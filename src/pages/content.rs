//! Static content pages (legal text, about, FAQ) rendered from markdown.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::util::markdown::render_markdown_html;

/// Content page. Fetches `/api/pages/{slug}` and renders the markdown
/// body; refetches when the route's slug changes.
#[component]
pub fn ContentPage() -> impl IntoView {
    let params = use_params_map();
    let page = LocalResource::new(move || {
        let slug = params.read().get("slug").unwrap_or_default();
        async move { crate::net::api::fetch_page(&slug).await }
    });

    view! {
        <div class="content-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    page.get().map(|loaded| match loaded {
                        Some(page) => {
                            let body = render_markdown_html(&page.body_markdown);
                            view! {
                                <article class="content-page__article">
                                    <h1>{page.title}</h1>
                                    <div class="content-page__body" inner_html=body></div>
                                </article>
                            }
                                .into_any()
                        }
                        None => view! { <p>"Page not found."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

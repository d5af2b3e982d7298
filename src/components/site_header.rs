//! Top navigation bar with session-aware account controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. While the session is still hydrating it shows
//! a neutral placeholder instead of guessing at the signed-in state.

use leptos::prelude::*;

use crate::state::auth::SessionStore;

/// Site-wide header: brand, primary navigation, account controls.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let loading = move || session.auth.get().loading;
    let signed_in = move || session.auth.get().user.is_some();
    let user_name = move || {
        session
            .auth
            .get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.name.clone())
    };

    let on_sign_out = move |_| session.logout();

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Atelier"</a>
            <nav class="site-header__nav">
                <a href="/">"Gallery"</a>
                <a href="/artists">"Artists"</a>
                <Show when=signed_in>
                    <a href="/orders">"Orders"</a>
                    <a href="/dashboard">"Dashboard"</a>
                </Show>
            </nav>
            <div class="site-header__account">
                <Show
                    when=move || !loading()
                    fallback=|| view! { <span class="site-header__placeholder" aria-hidden="true"></span> }
                >
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <a class="site-header__link" href="/login">"Sign in"</a>
                                <a class="site-header__link site-header__link--primary" href="/signup">
                                    "Create account"
                                </a>
                            }
                        }
                    >
                        <span class="site-header__name">{user_name}</span>
                        <button class="site-header__signout" on:click=on_sign_out>
                            "Sign out"
                        </button>
                    </Show>
                </Show>
            </div>
        </header>
    }
}

//! Account page: view and edit the signed-in user's profile.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionStore;
use crate::util::auth::install_unauth_redirect;
#[cfg(feature = "hydrate")]
use crate::util::storage;

/// Trim and require the display name.
fn validate_profile_input(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a display name.");
    }
    Ok(name.to_owned())
}

/// Account page. Saving hands the server's updated record to the session
/// store, which refreshes both in-memory state and the storage cache.
/// Redirects to `/login` once the session has hydrated without a user.
#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    install_unauth_redirect(session.auth, navigate);

    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Prefill the form once the session carries a user.
    Effect::new(move || {
        if let Some(user) = session.auth.get().user {
            name.set(user.name);
        }
    });

    let email = move || {
        session
            .auth
            .get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.email.clone())
    };
    let role = move || {
        session
            .auth
            .get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.role.clone())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = match validate_profile_input(&name.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = storage::load_token() else {
                busy.set(false);
                return;
            };
            match crate::net::api::update_profile(&token, &name_value).await {
                Ok(user) => {
                    session.update_user(user);
                    info.set("Profile updated.".to_owned());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, name_value);
        }
    };

    view! {
        <div class="account-page">
            <h1>"Account"</h1>
            <form class="account-form" on:submit=on_submit>
                <label class="account-form__label">
                    "Display name"
                    <input
                        class="account-form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <p class="account-form__static">
                    <span class="account-form__key">"Email"</span>
                    <span class="account-form__value">{email}</span>
                </p>
                <p class="account-form__static">
                    <span class="account-form__key">"Role"</span>
                    <span class="account-form__value">{role}</span>
                </p>
                <button class="account-form__save" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="account-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}

//! Auth-session state for the current storefront user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the client-visible authentication state: the signed-in user, the
//! initial-hydration loading flag, and the login/logout/update operations
//! the rest of the application calls. The bearer token and a cached copy of
//! the user record live in durable storage (`util::storage`); hydration
//! reconciles that cache against `/api/user/me` once per mount.
//!
//! Route guards and user-aware components read `auth` through context and
//! must treat `loading = true` as "not yet trustworthy"; no authorization
//! decision is valid until it drops to `false`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Sessions begin loading; `loading` drops to `false` exactly once,
    /// after the initial hydration attempt settles.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// What the initial hydration should do, given what durable storage held.
#[derive(Clone, Debug, PartialEq)]
pub enum HydrationPlan {
    /// No stored token: finish immediately without a network call.
    Anonymous,
    /// Stored token: optimistically show the cached user, then refresh.
    Refresh {
        token: String,
        cached_user: Option<User>,
    },
}

/// Decide the hydration path from raw storage contents.
///
/// A cached-user value that fails to parse is silently ignored: it skips
/// the optimistic pre-fill but never escalates to a credential wipe.
pub fn plan_hydration(token: Option<String>, cached_user_json: Option<&str>) -> HydrationPlan {
    match token {
        None => HydrationPlan::Anonymous,
        Some(token) => HydrationPlan::Refresh {
            token,
            cached_user: cached_user_json.and_then(|raw| serde_json::from_str(raw).ok()),
        },
    }
}

/// Shared session store: authentication state plus the operations that
/// mutate it.
///
/// Constructed once in `App` and provided via context. Signals are `Copy`,
/// so the store is handed around by value.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    /// Current user and hydration status, read by pages and the header.
    pub auth: RwSignal<AuthState>,
    /// Advanced by `login`/`logout`; an in-flight hydration discards its
    /// result when it observes a stale generation.
    generation: RwSignal<u64>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            auth: RwSignal::new(AuthState::default()),
            generation: RwSignal::new(0),
        }
    }

    /// One-shot session hydration: read durable storage, then refresh the
    /// cached user with a single `/api/user/me` round-trip.
    ///
    /// Runs at most once per application mount. `loading` stays `true`
    /// until the network step settles (or is short-circuited by a missing
    /// token) and then drops to `false` exactly once.
    pub async fn hydrate(self) {
        match plan_hydration(storage::load_token(), storage::load_user_json().as_deref()) {
            HydrationPlan::Anonymous => {}
            HydrationPlan::Refresh { token, cached_user } => {
                if let Some(user) = cached_user {
                    self.auth.update(|s| s.user = Some(user));
                }
                let generation = self.generation.get_untracked();
                let fresh = crate::net::api::fetch_current_user(&token).await;
                // A login/logout that landed while the refresh was in
                // flight owns the session now; drop the stale result.
                if self.generation.get_untracked() == generation {
                    self.settle_refresh(fresh);
                }
            }
        }
        self.auth.update(|s| s.loading = false);
        #[cfg(feature = "hydrate")]
        log::debug!(
            "session hydrated: user {}",
            if self.auth.get_untracked().user.is_some() {
                "present"
            } else {
                "absent"
            }
        );
    }

    /// Apply the outcome of the `/api/user/me` refresh.
    ///
    /// A fresh record is adopted and re-cached. Any failure (expired
    /// token, network outage, malformed body) invalidates the session
    /// uniformly: stored credentials are wiped and the user goes absent.
    fn settle_refresh(self, fresh: Option<User>) {
        match fresh {
            Some(user) => {
                if let Ok(json) = serde_json::to_string(&user) {
                    storage::save_user_json(&json);
                }
                self.auth.update(|s| s.user = Some(user));
            }
            None => {
                storage::clear_session();
                self.auth.update(|s| s.user = None);
            }
        }
    }

    /// Record a successful sign-in: persist the credential and user record
    /// first, then update in-memory state and land on the dashboard.
    pub fn login(self, token: &str, user: User) {
        storage::save_token(token);
        if let Ok(json) = serde_json::to_string(&user) {
            storage::save_user_json(&json);
        }
        self.generation.update(|g| *g += 1);
        self.auth.update(|s| s.user = Some(user));
        navigate_to("/dashboard");
    }

    /// Replace the user record after a profile change. Updates memory and
    /// the storage cache; no navigation, no network call.
    pub fn update_user(self, user: User) {
        if let Ok(json) = serde_json::to_string(&user) {
            storage::save_user_json(&json);
        }
        self.auth.update(|s| s.user = Some(user));
    }

    /// End the session. Local invalidation is unconditional and
    /// synchronous; the server notification is fire-and-forget and its
    /// failure is swallowed.
    pub fn logout(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async {
            crate::net::api::notify_logout().await;
        });
        storage::clear_session();
        self.generation.update(|g| *g += 1);
        self.auth.update(|s| s.user = None);
        navigate_to("/login");
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Imperative navigation used by the login/logout effects; no-op off the
/// browser.
fn navigate_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

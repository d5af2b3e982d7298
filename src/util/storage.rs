//! Durable client storage for the session credential and cached user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists two keys: `token` (raw bearer string) and
//! `user` (JSON-serialized record). On hydrate builds these live in browser
//! `localStorage`; storage failures are tolerated and behave like an empty
//! store. Off-hydrate builds back the same surface with a thread-local map
//! so session semantics stay observable under native `cargo test`. SSR
//! never runs session operations, so the fallback is inert there.
//!
//! Writes are last-write-wins; no cross-tab synchronization is attempted.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Storage key holding the raw bearer token.
const TOKEN_KEY: &str = "token";

/// Storage key holding the JSON-serialized cached user.
const USER_KEY: &str = "user";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static FALLBACK_STORE: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_STORE.with(|store| store.borrow().get(key).cloned())
    }
}

fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_STORE.with(|store| {
            store.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }
}

fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        let _ = storage.remove_item(key);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

/// Read the persisted bearer token, if any.
pub fn load_token() -> Option<String> {
    get_item(TOKEN_KEY)
}

/// Persist the bearer token.
pub fn save_token(token: &str) {
    set_item(TOKEN_KEY, token);
}

/// Read the cached user record as raw JSON, if any.
pub fn load_user_json() -> Option<String> {
    get_item(USER_KEY)
}

/// Persist the cached user record as raw JSON.
pub fn save_user_json(json: &str) {
    set_item(USER_KEY, json);
}

/// Remove both session keys. Safe to call when nothing is stored.
pub fn clear_session() {
    remove_item(TOKEN_KEY);
    remove_item(USER_KEY);
}

//! REST API helpers for communicating with the storefront server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Session-facing calls return `Option` so auth refresh failures collapse
//! into a single "invalid session" outcome; form-facing calls return
//! `Result<_, String>` with a displayable message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Artist, AuthSuccess, Order, PageContent, Painting, User};

#[cfg(any(test, feature = "hydrate"))]
fn page_endpoint(slug: &str) -> String {
    format!("/api/pages/{slug}")
}

#[cfg(any(test, feature = "hydrate"))]
fn refund_endpoint(order_id: &str) -> String {
    format!("/api/orders/{order_id}/refund")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    format!("sign in failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_failed_message(status: u16) -> String {
    format!("sign up failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn refund_failed_message(status: u16) -> String {
    format!("refund request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_update_failed_message(status: u16) -> String {
    format!("profile update failed: {status}")
}

/// Fetch the user a bearer token authenticates via `GET /api/user/me`.
///
/// Returns `None` for transport errors, non-2xx statuses, and unparsable
/// bodies alike; the session layer treats all three as an invalid session.
pub async fn fetch_current_user(token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/user/me")
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            log::warn!("user refresh rejected: {}", resp.status());
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Notify the server of a logout via `POST /api/auth/logout`.
///
/// Best-effort: the result is ignored and failures are swallowed, so local
/// logout never depends on network state.
pub async fn notify_logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Sign in with email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a displayable message if the request fails or the credentials
/// are rejected.
pub async fn login(email: &str, password: &str) -> Result<AuthSuccess, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_in_failed_message(resp.status()));
        }
        resp.json::<AuthSuccess>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns a displayable message if the request fails or the server
/// rejects the submission (e.g. email already in use).
pub async fn signup(name: &str, email: &str, password: &str) -> Result<AuthSuccess, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_up_failed_message(resp.status()));
        }
        resp.json::<AuthSuccess>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Update the signed-in user's display name via `PUT /api/user/me`.
///
/// Returns the server's updated user record on success.
///
/// # Errors
///
/// Returns a displayable message if the request fails or the server
/// rejects the change.
pub async fn update_profile(token: &str, name: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name });
        let resp = gloo_net::http::Request::put("/api/user/me")
            .header("Authorization", &bearer_header(token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(profile_update_failed_message(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, name);
        Err("not available on server".to_owned())
    }
}

/// Fetch the painting catalog from `/api/paintings`.
pub async fn fetch_paintings() -> Option<Vec<Painting>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/paintings").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Painting>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the artist roster from `/api/artists`.
pub async fn fetch_artists() -> Option<Vec<Artist>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/artists").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Artist>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the signed-in user's orders from `/api/orders`.
pub async fn fetch_orders(token: &str) -> Option<Vec<Order>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/orders")
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Order>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Request a refund via `POST /api/orders/{id}/refund`.
///
/// Returns the updated order on success.
///
/// # Errors
///
/// Returns a displayable message if the request fails or the order is not
/// refundable.
pub async fn request_refund(token: &str, order_id: &str) -> Result<Order, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&refund_endpoint(order_id))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(refund_failed_message(resp.status()));
        }
        resp.json::<Order>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, order_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch a static content page from `/api/pages/{slug}`.
pub async fn fetch_page(slug: &str) -> Option<PageContent> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&page_endpoint(slug)).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<PageContent>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        None
    }
}

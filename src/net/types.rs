//! Wire DTOs for the storefront API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the external API's JSON payloads field-for-field so
//! serde round-trips stay lossless. Open-ended server enums (`role`, order
//! `status`) are kept as plain strings; rendering code treats unknown values
//! conservatively instead of failing to deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/user/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Account role: `customer`, `artist`, or `admin`. Open-ended.
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "customer".to_owned()
}

/// Successful sign-in / sign-up payload: a bearer token plus the user it
/// authenticates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSuccess {
    /// Opaque bearer credential for subsequent authenticated requests.
    pub token: String,
    /// The authenticated account.
    pub user: User,
}

/// A painting listed in the storefront catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Painting {
    /// Unique painting identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Identifier of the artist who created it.
    pub artist_id: String,
    /// Artist display name, denormalized for list rendering.
    pub artist_name: String,
    /// Asking price in integer cents.
    pub price_cents: i64,
    /// Primary image URL.
    pub image_url: String,
    /// Whether the painting has already been sold.
    #[serde(default)]
    pub sold: bool,
}

/// An artist with a public storefront presence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// Unique artist identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short biography shown on the artists page.
    #[serde(default)]
    pub bio: String,
}

/// One line of an order: a painting at the price it was bought for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Painting purchased.
    pub painting_id: String,
    /// Painting title at purchase time.
    pub title: String,
    /// Price paid in integer cents.
    pub price_cents: i64,
}

/// A customer order as returned by `/api/orders`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: String,
    /// Order status: `pending`, `paid`, `shipped`, `refund_requested`,
    /// or `refunded`. Open-ended.
    pub status: String,
    /// Order total in integer cents.
    pub total_cents: i64,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Purchased line items.
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// A static content page (legal text, about, FAQ) served by slug.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// URL slug the page is served under.
    pub slug: String,
    /// Page heading.
    pub title: String,
    /// Body in markdown.
    pub body_markdown: String,
}

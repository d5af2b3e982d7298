//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state,
//! redirects) and delegates rendering details to `components`.

pub mod account;
pub mod artists;
pub mod content;
pub mod dashboard;
pub mod gallery;
pub mod login;
pub mod orders;
pub mod signup;

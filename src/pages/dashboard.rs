//! Dashboard page with role-driven account panels.
//!
//! Panel visibility is presentation only: the server re-checks every
//! privileged operation, so hiding a panel never stands in for access
//! control.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionStore;
use crate::util::auth::install_unauth_redirect;

/// A dashboard panel the current role may see.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Orders,
    Account,
    Listings,
    Sales,
    Catalog,
    Customers,
    Refunds,
}

impl Panel {
    /// Display title.
    pub fn title(self) -> &'static str {
        match self {
            Panel::Orders => "Orders",
            Panel::Account => "Account",
            Panel::Listings => "Listings",
            Panel::Sales => "Sales",
            Panel::Catalog => "Catalog",
            Panel::Customers => "Customers",
            Panel::Refunds => "Refunds",
        }
    }

    /// Short description rendered under the title.
    pub fn blurb(self) -> &'static str {
        match self {
            Panel::Orders => "Track your purchases and request refunds.",
            Panel::Account => "Your profile and sign-in details.",
            Panel::Listings => "Paintings you have listed for sale.",
            Panel::Sales => "Orders placed for your work.",
            Panel::Catalog => "Every painting on the storefront.",
            Panel::Customers => "Registered accounts.",
            Panel::Refunds => "Open refund requests awaiting review.",
        }
    }

    /// Route the panel links to, if it has a dedicated page.
    pub fn href(self) -> Option<&'static str> {
        match self {
            Panel::Orders => Some("/orders"),
            Panel::Account => Some("/account"),
            _ => None,
        }
    }
}

/// Panels rendered for a role. Unknown roles fall back to the customer set.
pub fn panels_for_role(role: &str) -> &'static [Panel] {
    match role {
        "artist" => &[Panel::Listings, Panel::Sales, Panel::Orders, Panel::Account],
        "admin" => &[Panel::Catalog, Panel::Customers, Panel::Refunds, Panel::Account],
        _ => &[Panel::Orders, Panel::Account],
    }
}

/// Dashboard page — greets the signed-in user and shows their panels.
/// Redirects to `/login` once the session has hydrated without a user.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    install_unauth_redirect(session.auth, navigate);

    let greeting = move || {
        session
            .auth
            .get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| format!("Welcome back, {}.", u.name))
    };
    let panels = move || {
        session
            .auth
            .get()
            .user
            .as_ref()
            .map_or(&[][..], |u| panels_for_role(&u.role))
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <p class="dashboard-page__greeting">{greeting}</p>
            </header>
            <div class="dashboard-page__panels">
                {move || {
                    panels()
                        .iter()
                        .map(|panel| view! { <PanelCard panel=*panel/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// One dashboard panel card; a link when the panel has its own page.
#[component]
fn PanelCard(panel: Panel) -> impl IntoView {
    let body = view! {
        <span class="panel-card__title">{panel.title()}</span>
        <span class="panel-card__blurb">{panel.blurb()}</span>
    };
    match panel.href() {
        Some(href) => view! { <a class="panel-card" href=href>{body}</a> }.into_any(),
        None => view! { <div class="panel-card">{body}</div> }.into_any(),
    }
}

//! Sitemap XML generation for the storefront's public routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sitemap document is served from the site root by the host serving
//! this application; the generator lives here because it is pure string
//! assembly over the client's own route table plus the content-page slugs
//! the API reports.

#[cfg(test)]
#[path = "sitemap_test.rs"]
mod sitemap_test;

/// Public routes every sitemap includes, independent of API content.
pub const STATIC_ROUTES: &[&str] = &["/", "/artists", "/login", "/signup"];

/// Build a sitemap XML document for the public routes plus the given
/// content-page slugs.
pub fn build_sitemap_xml(base_url: &str, page_slugs: &[&str]) -> String {
    let base = base_url.trim_end_matches('/');
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for route in STATIC_ROUTES {
        push_url(&mut out, base, route);
    }
    for slug in page_slugs {
        push_url(&mut out, base, &format!("/pages/{slug}"));
    }
    out.push_str("</urlset>\n");
    out
}

fn push_url(out: &mut String, base: &str, path: &str) {
    out.push_str("  <url><loc>");
    out.push_str(base);
    out.push_str(path);
    out.push_str("</loc></url>\n");
}

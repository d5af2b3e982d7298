use super::*;

#[test]
fn includes_xml_declaration_and_urlset() {
    let xml = build_sitemap_xml("https://atelier.example", &[]);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert!(xml.ends_with("</urlset>\n"));
}

#[test]
fn includes_every_static_route() {
    let xml = build_sitemap_xml("https://atelier.example", &[]);
    assert!(xml.contains("<loc>https://atelier.example/</loc>"));
    assert!(xml.contains("<loc>https://atelier.example/artists</loc>"));
    assert!(xml.contains("<loc>https://atelier.example/login</loc>"));
    assert!(xml.contains("<loc>https://atelier.example/signup</loc>"));
}

#[test]
fn includes_content_page_slugs() {
    let xml = build_sitemap_xml("https://atelier.example", &["privacy", "terms"]);
    assert!(xml.contains("<loc>https://atelier.example/pages/privacy</loc>"));
    assert!(xml.contains("<loc>https://atelier.example/pages/terms</loc>"));
}

#[test]
fn trims_trailing_slash_from_base_url() {
    let xml = build_sitemap_xml("https://atelier.example/", &["privacy"]);
    assert!(xml.contains("<loc>https://atelier.example/pages/privacy</loc>"));
    assert!(!xml.contains("example//pages"));
}

use super::*;

#[test]
fn renders_headings_and_paragraphs() {
    let out = render_markdown_html("# Terms of Sale\n\nAll sales are final.");
    assert!(out.contains("<h1>Terms of Sale</h1>"));
    assert!(out.contains("<p>All sales are final.</p>"));
}

#[test]
fn renders_emphasis() {
    let out = render_markdown_html("Refunds within **14 days**.");
    assert!(out.contains("<strong>14 days</strong>"));
}

#[test]
fn renders_tables() {
    let out = render_markdown_html("| Size | Price |\n| --- | --- |\n| A3 | $40 |");
    assert!(out.contains("<table>"));
}

#[test]
fn renders_strikethrough() {
    let out = render_markdown_html("~~old price~~");
    assert!(out.contains("<del>old price</del>"));
}

#[test]
fn drops_raw_html() {
    let out = render_markdown_html("before\n\n<script>alert(1)</script>\n\nafter");
    assert!(!out.contains("<script>"));
    assert!(out.contains("<p>before</p>"));
    assert!(out.contains("<p>after</p>"));
}

//! Feed parsing and rendering against fixture documents

mod common;

use common::fixtures::load_rss_fixture;
use rstest::rstest;
use tidy_feed::{parse_feed, render_posts_html, render_posts_text, FeedError};

#[test]
fn test_rss2_items_in_order() {
    let posts = parse_feed(&load_rss_fixture("rss2.xml")).unwrap();

    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].title(), "Organizing bookmarks without losing any");
    assert_eq!(posts[1].title(), "Fish & Chips <recipe>");
    assert_eq!(posts[2].title(), "untitled");
    assert_eq!(posts[2].link(), "https://uegee.com/posts/untitled-draft/");
}

#[test]
fn test_rss2_cdata_and_entities() {
    let posts = parse_feed(&load_rss_fixture("rss2.xml")).unwrap();

    assert_eq!(
        posts[0].description(),
        "Folders, a pool, and <em>one</em> rule: nothing disappears."
    );
    assert_eq!(posts[1].description(), "Batter, oil & patience.");
}

#[test]
fn test_rss2_missing_fields_fall_back() {
    let posts = parse_feed(&load_rss_fixture("rss2.xml")).unwrap();

    assert_eq!(posts[2].pub_date(), "unknown time");
    assert_eq!(posts[2].description(), "no description");
}

#[test]
fn test_rss1_items_beside_channel() {
    let posts = parse_feed(&load_rss_fixture("rss1.xml")).unwrap();

    let titles: Vec<&str> = posts.iter().map(|p| p.title()).collect();
    assert_eq!(titles, vec!["First RDF item", "Second RDF item"]);
    assert_eq!(posts[1].description(), "no description");
}

#[test]
fn test_empty_feed_parses_to_nothing() {
    let posts = parse_feed(&load_rss_fixture("empty.xml")).unwrap();
    assert!(posts.is_empty());
}

#[test]
fn test_malformed_fixture_is_rejected() {
    let result = parse_feed(&load_rss_fixture("malformed.xml"));
    assert!(matches!(result, Err(FeedError::Parse(_))));
}

#[rstest]
#[case::empty_body("")]
#[case::plain_text("not xml at all")]
#[case::unclosed_root("<rss><channel><item><title>x</title></item></channel>")]
#[case::mismatched("<rss><item><title>x</link></item></rss>")]
#[case::two_roots("<rss></rss><feed></feed>")]
#[case::trailing_text("<rss></rss>\nleftover")]
fn test_not_well_formed(#[case] xml: &str) {
    assert!(
        matches!(parse_feed(xml), Err(FeedError::Parse(_))),
        "expected parse error for {:?}",
        xml
    );
}

#[rstest]
#[case::nested_markup(
    "<rss><item><title>Rust<b>1.80</b></title></item></rss>",
    "Rust1.80"
)]
#[case::mixed_content(
    "<rss><item><title>Rust <em>is</em> fun</title></item></rss>",
    "Rust is fun"
)]
#[case::surrounding_whitespace(
    "<?xml version=\"1.0\"?>\n<rss>\n  <item><title>Rust</title></item>\n</rss>\n",
    "Rust"
)]
#[case::empty_title("<rss><item><title></title></item></rss>", "untitled")]
#[case::self_closing_title("<rss><item><title/></item></rss>", "untitled")]
#[case::numeric_entity("<rss><item><title>caf&#233;</title></item></rss>", "café")]
fn test_title_text(#[case] xml: &str, #[case] expected: &str) {
    let posts = parse_feed(xml).unwrap();
    assert_eq!(posts[0].title(), expected);
}

#[test]
fn test_rendered_html_escapes_feed_content() {
    let posts = parse_feed(&load_rss_fixture("rss2.xml")).unwrap();
    let html = render_posts_html(&posts);

    assert_eq!(html.matches(r#"<div class="post">"#).count(), 3);
    assert!(html.contains("Fish &amp; Chips &lt;recipe&gt;"));
    assert!(html.contains("&lt;em&gt;one&lt;/em&gt;"));
    assert!(html.contains(r#"<span class="post-time">2024/03/05 14:03:09</span>"#));
    assert!(html.contains(r#"<span class="post-time">2024/02/17 09:30:00</span>"#));
    assert!(html.contains(r#"<span class="post-time">unknown time</span>"#));
}

#[test]
fn test_rendered_text_listing() {
    let posts = parse_feed(&load_rss_fixture("rss1.xml")).unwrap();
    let text = render_posts_text(&posts);

    assert!(text.starts_with("First RDF item\n"));
    assert!(text.contains("  https://example.org/two\n"));
    assert!(text.contains("  unknown time\n"));
}

#[test]
fn test_posts_serialize_raw_fields() {
    let posts = parse_feed("<rss><item><title>T</title></item></rss>").unwrap();
    let json = serde_json::to_value(&posts).unwrap();

    assert_eq!(json[0]["title"], "T");
    assert!(json[0]["link"].is_null());
}

//! Display rendering for posts.

use chrono::DateTime;

use crate::error::FeedError;
use crate::post::Post;

/// Escape text for HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a feed date as `YYYY/MM/DD HH:MM:SS`.
///
/// Accepts RFC 2822 (the RSS `pubDate` format) and RFC 3339. The time is
/// shown in the offset the feed wrote it in. Anything else is returned
/// unchanged.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    DateTime::parse_from_rfc2822(trimmed)
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed))
        .map(|date| date.format("%Y/%m/%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// One post as an HTML fragment. Every text field is escaped.
pub fn render_post_html(post: &Post) -> String {
    format!(
        r#"<div class="post">
  <article>
    <span class="post-title">
      <a href="{link}" target="_blank" class="post-link">{title}</a>
    </span>
    <br>
    <span class="post-time">{time}</span>
    <br>
    <span class="post-content">{description}</span>
  </article>
</div>
"#,
        link = escape_html(post.link()),
        title = escape_html(post.title()),
        time = escape_html(&format_date(post.pub_date())),
        description = escape_html(post.description()),
    )
}

pub fn render_posts_html(posts: &[Post]) -> String {
    posts.iter().map(render_post_html).collect()
}

/// Plain listing for a terminal.
pub fn render_posts_text(posts: &[Post]) -> String {
    let mut out = String::new();
    for post in posts {
        out.push_str(&format!(
            "{}\n  {}\n  {}\n  {}\n\n",
            post.title(),
            format_date(post.pub_date()),
            post.link(),
            post.description()
        ));
    }
    out
}

/// The single user-facing line shown when the feed cannot be displayed.
pub fn error_message(err: &FeedError) -> String {
    format!("Could not load posts ({})", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#039;y&#039;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_format_rfc2822() {
        assert_eq!(
            format_date("Tue, 05 Mar 2024 14:03:09 +0800"),
            "2024/03/05 14:03:09"
        );
        assert_eq!(
            format_date("Tue, 05 Mar 2024 06:03:09 GMT"),
            "2024/03/05 06:03:09"
        );
    }

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(format_date("2024-03-05T14:03:09Z"), "2024/03/05 14:03:09");
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        assert_eq!(format_date("unknown time"), "unknown time");
        assert_eq!(format_date("last Tuesday"), "last Tuesday");
    }

    #[test]
    fn test_post_html_is_escaped() {
        let post = Post {
            title: Some("<b>Bold</b>".to_string()),
            link: Some("https://example.com/?a=1&b=2".to_string()),
            pub_date: None,
            description: Some("it's \"quoted\"".to_string()),
        };
        let html = render_post_html(&post);
        assert!(html.contains(r#"href="https://example.com/?a=1&amp;b=2""#));
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(html.contains(r#"<span class="post-time">unknown time</span>"#));
        assert!(html.contains("it&#039;s &quot;quoted&quot;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(&FeedError::NoItems),
            "Could not load posts (No posts found)"
        );
    }
}

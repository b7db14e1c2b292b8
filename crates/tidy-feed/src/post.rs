//! Posts read from a feed.

use serde::Serialize;

pub const UNTITLED: &str = "untitled";
pub const NO_LINK: &str = "#";
pub const UNKNOWN_TIME: &str = "unknown time";
pub const NO_DESCRIPTION: &str = "no description";

/// One `item` of a feed. Fields hold the raw text content; the accessors
/// apply display fallbacks for missing or empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Post {
    pub title: Option<String>,
    pub link: Option<String>,
    pub pub_date: Option<String>,
    pub description: Option<String>,
}

/// The item children a post is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Title,
    Link,
    PubDate,
    Description,
}

impl Field {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Field::Title),
            "link" => Some(Field::Link),
            "pubDate" => Some(Field::PubDate),
            "description" => Some(Field::Description),
            _ => None,
        }
    }
}

fn or_fallback<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

impl Post {
    pub fn title(&self) -> &str {
        or_fallback(&self.title, UNTITLED)
    }

    pub fn link(&self) -> &str {
        or_fallback(&self.link, NO_LINK)
    }

    pub fn pub_date(&self) -> &str {
        or_fallback(&self.pub_date, UNKNOWN_TIME)
    }

    pub fn description(&self) -> &str {
        or_fallback(&self.description, NO_DESCRIPTION)
    }

    pub(crate) fn has(&self, field: Field) -> bool {
        self.slot(field).is_some()
    }

    /// Append text to a field, creating it if needed.
    pub(crate) fn append(&mut self, field: Field, text: &str) {
        self.slot_mut(field)
            .get_or_insert_with(String::new)
            .push_str(text);
    }

    /// Mark a field as present (an element was seen), even if it stays empty.
    pub(crate) fn open(&mut self, field: Field) {
        self.slot_mut(field).get_or_insert_with(String::new);
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Title => &self.title,
            Field::Link => &self.link,
            Field::PubDate => &self.pub_date,
            Field::Description => &self.description,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Link => &mut self.link,
            Field::PubDate => &mut self.pub_date,
            Field::Description => &mut self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks() {
        let post = Post::default();
        assert_eq!(post.title(), "untitled");
        assert_eq!(post.link(), "#");
        assert_eq!(post.pub_date(), "unknown time");
        assert_eq!(post.description(), "no description");
    }

    #[test]
    fn test_empty_value_uses_fallback() {
        let post = Post {
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(post.title(), "untitled");
    }

    #[test]
    fn test_append() {
        let mut post = Post::default();
        post.open(Field::Description);
        assert!(post.has(Field::Description));
        post.append(Field::Description, "Hello, ");
        post.append(Field::Description, "world");
        assert_eq!(post.description(), "Hello, world");
    }
}

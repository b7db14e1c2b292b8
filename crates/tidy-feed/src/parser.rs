//! RSS parsing with quick-xml
//!
//! Every `item` element in the document becomes a [`Post`], wherever it
//! sits (RSS 2.0 nests items in `channel`, RSS 1.0 puts them beside it).
//! For each item, the text content of the first `title`, `link`, `pubDate`
//! and `description` descendant is kept. Text and CDATA both count.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::FeedError;
use crate::post::{Field, Post};

/// Parse a feed document into posts.
///
/// The document must be well-formed: mismatched or unclosed tags, content
/// outside the root element, or a missing root element are errors. An empty
/// item list is not an error here; [`crate::FeedReader`] decides that.
pub fn parse_feed(xml: &str) -> Result<Vec<Post>, FeedError> {
    let mut reader = Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut posts = Vec::new();

    // Open element names, outermost first
    let mut stack: Vec<String> = Vec::new();
    let mut saw_root = false;

    // Item being read and the stack depth of its element
    let mut current: Option<Post> = None;
    let mut item_depth = 0usize;
    // Field whose text is being collected and the depth of its element
    let mut capture: Option<(Field, usize)> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                enter_element(&mut stack, &mut saw_root, &name)?;

                if name == "item" && current.is_none() {
                    current = Some(Post::default());
                    item_depth = stack.len();
                } else if let Some(item) = current.as_mut() {
                    if capture.is_none() {
                        if let Some(field) = Field::from_name(&name).filter(|f| !item.has(*f)) {
                            item.open(field);
                            capture = Some((field, stack.len()));
                        }
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                enter_element(&mut stack, &mut saw_root, &name)?;
                stack.pop();

                if name == "item" && current.is_none() {
                    posts.push(Post::default());
                } else if let Some(item) = current.as_mut() {
                    if capture.is_none() {
                        if let Some(field) = Field::from_name(&name) {
                            item.open(field);
                        }
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                if stack.pop().is_none() {
                    return Err(FeedError::Parse(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    )));
                }

                if matches!(capture, Some((_, depth)) if stack.len() < depth) {
                    capture = None;
                }
                if current.is_some() && stack.len() < item_depth {
                    if let Some(item) = current.take() {
                        posts.push(item);
                    }
                }
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map(|t| t.into_owned())
                    .unwrap_or_else(|_| String::from_utf8_lossy(&e).into_owned());
                if stack.is_empty() {
                    // Whitespace around the root element is allowed
                    if !text.trim().is_empty() {
                        return Err(FeedError::Parse(
                            "text content outside the root element".to_string(),
                        ));
                    }
                } else if let (Some(item), Some((field, _))) = (current.as_mut(), capture) {
                    item.append(field, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let (Some(item), Some((field, _))) = (current.as_mut(), capture) {
                    item.append(field, &String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(FeedError::Parse(format!(
                    "XML error at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(FeedError::Parse(format!("unclosed element <{}>", open)));
    }
    if !saw_root {
        return Err(FeedError::Parse("no root element".to_string()));
    }

    Ok(posts)
}

fn enter_element(stack: &mut Vec<String>, saw_root: &mut bool, name: &str) -> Result<(), FeedError> {
    if stack.is_empty() {
        if *saw_root {
            return Err(FeedError::Parse(format!(
                "second root element <{}>",
                name
            )));
        }
        *saw_root = true;
    }
    stack.push(name.to_string());
    Ok(())
}

pub mod document;
pub mod element;
pub mod node;
pub mod selector;
pub mod stylesheet;

pub use document::Document;
pub use element::Element;
pub use node::Node;
pub use selector::{Selector, SelectorError};
pub use stylesheet::{Declaration, StyleRule, Stylesheet};

/// Whether `name` can be written unquoted as a tag or attribute name.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.' | '-'))
}

/// Escape text for inclusion in markup, both as element content and inside
/// double-quoted attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

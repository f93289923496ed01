use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{element::Element, escape};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Node {
    #[default]
    Empty,
    Text(String),
    Element(Element),
}

impl Node {
    pub fn text(text: impl ToString) -> Node {
        Node::Text(text.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of this node and all of its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Empty => String::new(),
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Empty => Ok(()),
            Node::Text(text) => write!(f, "{}", escape(text)),
            Node::Element(element) => write!(f, "{}", element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_node_prints_nothing() {
        assert_eq!(Node::Empty.to_string(), "");
        assert!(Node::default().is_empty());
    }

    #[test]
    fn test_text_is_escaped() {
        let node = Node::text("Fast & <Furious>");
        assert_eq!(node.to_string(), "Fast &amp; &lt;Furious&gt;");
        assert_eq!(node.text_content(), "Fast & <Furious>");
    }
}

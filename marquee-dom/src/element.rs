use std::fmt;

use kv_log_macro as log;
use serde::{Deserialize, Serialize};

use crate::{escape, is_valid_name, node::Node, selector::Selector};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl ToString) -> Self {
        Element {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: impl ToString) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: impl ToString, value: impl ToString) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets an attribute, keeping its original position if it already exists.
    /// Returns `false`, leaving the element unchanged, when `name` is not a
    /// valid attribute name.
    pub fn set_attribute(&mut self, name: impl ToString, value: impl ToString) -> bool {
        let name = name.to_string();
        if !is_valid_name(&name) {
            log::debug!("Rejected attribute name", { name: name });
            return false;
        }

        let value = value.to_string();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
        true
    }

    /// Drops every child and, unless `node` is empty, installs it as the only child.
    pub fn replace_children(&mut self, node: Node) {
        self.children.clear();
        if !node.is_empty() {
            self.children.push(node);
        }
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Depth-first search over this element and its descendants.
    pub fn find(&self, selector: &Selector) -> Option<&Element> {
        if selector.matches(self) {
            return Some(self);
        }

        self.children.iter().find_map(|child| match child {
            Node::Element(element) => element.find(selector),
            _ => None,
        })
    }

    pub fn find_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        if selector.matches(self) {
            return Some(self);
        }

        self.children.iter_mut().find_map(|child| match child {
            Node::Element(element) => element.find_mut(selector),
            _ => None,
        })
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fields are public, so names are checked again here. An element with
        // an unprintable tag contributes only its children.
        if !is_valid_name(&self.tag) {
            for child in &self.children {
                write!(f, "{}", child)?;
            }
            return Ok(());
        }

        write!(f, "<{}", self.tag)?;
        if let Some(id) = &self.id {
            write!(f, " id=\"{}\"", escape(id))?;
        }
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", escape(&self.classes.join(" ")))?;
        }
        for (name, value) in self.attributes.iter().filter(|(n, _)| is_valid_name(n)) {
            write!(f, " {}=\"{}\"", name, escape(value))?;
        }
        write!(f, ">")?;

        for child in &self.children {
            write!(f, "{}", child)?;
        }

        write!(f, "</{}>", self.tag)
    }
}

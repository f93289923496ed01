use std::fmt;

use kv_log_macro as log;
use serde::{Deserialize, Serialize};

use crate::{element::Element, escape, selector::Selector, stylesheet::Stylesheet};

/// The host page an application is mounted into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub stylesheets: Vec<Stylesheet>,
    pub body: Element,
}

impl Default for Document {
    fn default() -> Self {
        Document {
            title: String::new(),
            stylesheets: vec![],
            body: Element::new("body"),
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document whose body holds a single empty `<div id="{id}">`.
    pub fn with_mount_point(id: impl ToString) -> Self {
        let mut document = Self::default();
        document
            .body
            .children
            .push(Element::new("div").with_id(id).into());
        document
    }

    pub fn query_selector(&self, selector: &Selector) -> Option<&Element> {
        self.body.find(selector)
    }

    pub fn query_selector_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        self.body.find_mut(selector)
    }

    /// Applies a global stylesheet. Returns `false` when a stylesheet with the
    /// same name has already been adopted, in which case nothing changes.
    pub fn adopt_stylesheet(&mut self, stylesheet: Stylesheet) -> bool {
        if self.stylesheets.iter().any(|s| s.name == stylesheet.name) {
            log::debug!("Stylesheet already adopted", { name: stylesheet.name });
            return false;
        }

        log::debug!("Adopting stylesheet", {
            name: stylesheet.name,
            rules: stylesheet.rules.len()
        });
        self.stylesheets.push(stylesheet);
        true
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html>")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<title>{}</title>", escape(&self.title))?;
        for stylesheet in &self.stylesheets {
            write!(f, "<style>\n{}</style>\n", stylesheet)?;
        }
        writeln!(f, "</head>")?;
        writeln!(f, "{}", self.body)?;
        write!(f, "</html>")
    }
}

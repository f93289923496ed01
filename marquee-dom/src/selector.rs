use std::{fmt, str::FromStr};

use crate::element::Element;

/// The subset of CSS selectors a mount target can be named by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// `#app`
    Id(String),
    /// `.movie-list`
    Class(String),
    /// `main`
    Tag(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorError {
    pub selector: String,
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported selector '{}' (expected '#id', '.class' or 'tag')",
            self.selector
        )
    }
}

impl std::error::Error for SelectorError {}

impl Selector {
    pub fn parse(selector: &str) -> Result<Selector, SelectorError> {
        let invalid = || SelectorError {
            selector: selector.to_string(),
        };

        let trimmed = selector.trim();
        let parsed = if let Some(id) = trimmed.strip_prefix('#') {
            Selector::Id(id.to_string())
        } else if let Some(class) = trimmed.strip_prefix('.') {
            Selector::Class(class.to_string())
        } else if trimmed.starts_with(|c: char| c.is_ascii_alphabetic()) {
            Selector::Tag(trimmed.to_ascii_lowercase())
        } else {
            return Err(invalid());
        };

        if !is_identifier(parsed.value()) {
            return Err(invalid());
        }

        Ok(parsed)
    }

    pub fn value(&self) -> &str {
        match self {
            Selector::Id(value) | Selector::Class(value) | Selector::Tag(value) => value,
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Id(id) => element.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => element.has_class(class),
            Selector::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
        }
    }
}

fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{}", id),
            Selector::Class(class) => write!(f, ".{}", class),
            Selector::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

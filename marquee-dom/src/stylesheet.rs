use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    pub fn new(selector: impl ToString, declarations: &[(&str, &str)]) -> Self {
        StyleRule {
            selector: selector.to_string(),
            declarations: declarations
                .iter()
                .map(|(property, value)| Declaration {
                    property: property.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }
}

/// A global stylesheet. Documents adopt a stylesheet at most once, keyed by `name`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stylesheet {
    pub name: String,
    pub rules: Vec<StyleRule>,
}

impl Stylesheet {
    pub fn new(name: impl ToString, rules: Vec<StyleRule>) -> Self {
        Stylesheet {
            name: name.to_string(),
            rules,
        }
    }

    pub fn get(&self, selector: &str) -> Option<&StyleRule> {
        self.rules.iter().find(|r| r.selector == selector)
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            write!(f, "{} {{", rule.selector)?;
            for declaration in &rule.declarations {
                write!(f, " {}: {};", declaration.property, declaration.value)?;
            }
            writeln!(f, " }}")?;
        }
        Ok(())
    }
}

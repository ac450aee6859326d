use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attribute names the component always handles itself.
const INTERCEPTED_ATTRIBUTES: [&str; 2] = ["onchange", "oninput"];

/// Attribute names that have a typed field on [`InputOptions`].
const RESERVED_ATTRIBUTES: [&str; 4] = ["class", "disabled", "id", "name"];

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid attribute name: {0:?}")]
    InvalidAttributeName(String),
    #[error("Attribute {0:?} must be set through its own option")]
    ReservedAttribute(String),
}

/// Declarative description of a labeled input.
///
/// Mirrors the component props so a form can be described as data. Entries in
/// `attributes` are forwarded to the native field verbatim, except the change
/// hooks, which the component always wraps, and the names that already have a
/// typed field here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputOptions {
    pub id: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub disabled: bool,
    pub class: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

impl InputOptions {
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: InputOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        for name in self.attributes.keys() {
            if !is_valid_attribute_name(name) {
                return Err(OptionsError::InvalidAttributeName(name.clone()));
            }
            if is_reserved(name) {
                return Err(OptionsError::ReservedAttribute(name.clone()));
            }
        }
        Ok(())
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Caller attributes that reach the native field. Change hooks and names
    /// covered by typed fields never do, even if `validate` was skipped.
    pub fn forwarded_attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .filter(|(name, _)| !is_intercepted(name) && !is_reserved(name))
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn label_target(&self) -> String {
        crate::styles::label_target(self.id.as_deref(), self.name.as_deref())
    }
}

fn is_intercepted(name: &str) -> bool {
    INTERCEPTED_ATTRIBUTES
        .iter()
        .any(|hook| hook.eq_ignore_ascii_case(name))
}

fn is_reserved(name: &str) -> bool {
    RESERVED_ATTRIBUTES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '='))
}

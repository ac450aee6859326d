use serde::{Deserialize, Serialize};

/// Shown when the platform reports a field invalid without any message text.
pub const FALLBACK_MESSAGE: &str = "Invalid value";

// ============================================================================
// Field Report
// ============================================================================

/// What a single change event reports about the native field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidity {
    pub valid: bool,
    pub message: String,
    pub value: String,
}

impl FieldValidity {
    pub fn new(valid: bool, message: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            valid,
            message: message.into(),
            value: value.into(),
        }
    }

    pub fn valid(value: impl Into<String>) -> Self {
        Self::new(true, String::new(), value)
    }

    pub fn invalid(message: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(false, message, value)
    }
}

// ============================================================================
// Display State
// ============================================================================

/// Whether the field currently shows a validation error, and which one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum ValidationDisplayState {
    #[default]
    Valid,
    Invalid(String),
}

impl ValidationDisplayState {
    /// Derives the display state from one change event. Nothing else feeds in.
    pub fn from_validity(validity: &FieldValidity) -> Self {
        if validity.valid {
            ValidationDisplayState::Valid
        } else if validity.message.is_empty() {
            ValidationDisplayState::Invalid(FALLBACK_MESSAGE.to_string())
        } else {
            ValidationDisplayState::Invalid(validity.message.clone())
        }
    }

    /// Replaces the current state with the one the event reports.
    pub fn apply(&mut self, validity: &FieldValidity) {
        let next = Self::from_validity(validity);
        if next != *self {
            log::debug!("validation state {} -> {}", self.as_str(), next.as_str());
        }
        *self = next;
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ValidationDisplayState::Valid => None,
            ValidationDisplayState::Invalid(message) => Some(message.as_str()),
        }
    }

    /// Text for the message region; empty while valid.
    pub fn message_text(&self) -> &str {
        self.error_message().unwrap_or("")
    }

    pub fn has_error(&self) -> bool {
        matches!(self, ValidationDisplayState::Invalid(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationDisplayState::Valid => "valid",
            ValidationDisplayState::Invalid(_) => "invalid",
        }
    }
}

//! Error types for value registration and decoding.

use thiserror::Error;

/// Errors produced while registering, constructing or decoding values.
///
/// None of these leave a registry or a [`crate::SerializedValue`] partially
/// updated: the operation that reports them has no effect on its target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValueError {
    /// A value without a type tag was offered to the registry.
    #[error("invalid registration: {reason}")]
    InvalidRegistration { reason: String },

    /// The literal form or `_type` tag matches no registered variant.
    #[error("unknown value kind: {input}")]
    UnknownValueKind { input: String },

    /// The tag is known but the record's fields are missing or malformed.
    #[error("invalid payload for {tag}: {reason}")]
    InvalidPayload { tag: String, reason: String },

    /// A constructor rejected a degenerate parameter.
    #[error("invalid parameter for {tag}: {reason}")]
    InvalidParameter { tag: &'static str, reason: String },

    /// Writing JSON failed or a variant produced a payload that does not
    /// match its declared kind.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl ValueError {
    pub(crate) fn unknown(input: impl Into<String>) -> Self {
        Self::UnknownValueKind {
            input: input.into(),
        }
    }

    pub(crate) fn invalid_payload(tag: &str, reason: impl ToString) -> Self {
        Self::InvalidPayload {
            tag: tag.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether a caller may skip the offending definition and carry on, for
    /// instance by substituting `Const(0)`.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownValueKind { .. } | Self::InvalidPayload { .. }
        )
    }

    /// Error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidRegistration { .. } => "registration",
            Self::UnknownValueKind { .. } | Self::InvalidPayload { .. } => "decode",
            Self::InvalidParameter { .. } => "construction",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for ValueError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

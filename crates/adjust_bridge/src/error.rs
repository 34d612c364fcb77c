//! Error types for envelope construction, channel delivery, and the optional validation layer.

use thiserror::Error;

use crate::action::{Action, PayloadShape};

/// Failure reported by the bridge when an operation could not be handed to the channel.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The payload could not be converted to a JSON value.
    #[error("failed to encode payload for {action}: {source}")]
    Encode {
        /// Action whose payload failed to encode.
        action: Action,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },
    /// The host message channel is missing.
    #[error("message handler `{handler}` is unavailable: {reason}")]
    ChannelUnavailable {
        /// Handler name the bridge tried to resolve.
        handler: String,
        /// Host-specific detail.
        reason: String,
    },
    /// The host channel exists but rejected the message.
    #[error("message handler `{handler}` rejected {action}: {message}")]
    Post {
        /// Handler name the bridge posted to.
        handler: String,
        /// Action that was being posted.
        action: Action,
        /// Host-specific detail.
        message: String,
    },
    /// The envelope failed the optional validation layer and was not posted.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Envelope construction or wire decoding failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// A payload variant was paired with an action that expects a different shape.
    #[error("{action} expects a {expected:?} payload, got {actual:?}")]
    ShapeMismatch {
        /// Action the envelope was built for.
        action: Action,
        /// Shape the action defines.
        expected: PayloadShape,
        /// Shape that was supplied.
        actual: PayloadShape,
    },
    /// The decoded message was not a JSON object.
    #[error("bridge message must be a JSON object")]
    NotAnObject,
    /// The `action` field is absent or not a string.
    #[error("bridge message has no string `action` field")]
    MissingAction,
    /// The `action` field named no known action.
    #[error("unknown action `{0}`")]
    UnknownAction(String),
    /// A field the action requires is absent.
    #[error("{action} is missing field `{field}`")]
    MissingField {
        /// Action being decoded.
        action: Action,
        /// Missing field name.
        field: &'static str,
    },
    /// A field the action does not define is present.
    #[error("{action} does not accept field `{field}`")]
    UnexpectedField {
        /// Action being decoded.
        action: Action,
        /// Offending field name.
        field: String,
    },
    /// A field is present but has the wrong JSON type.
    #[error("field `{field}` of {action}: {reason}")]
    InvalidField {
        /// Action being decoded.
        action: Action,
        /// Offending field name.
        field: &'static str,
        /// What was wrong.
        reason: String,
    },
}

/// Rejection raised by [`crate::validate_envelope`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// `data` must be a JSON object for this action.
    #[error("{action}: payload must be an object")]
    ExpectedObject {
        /// Action being validated.
        action: Action,
    },
    /// A string field is missing, not a string, or empty.
    #[error("{action}: `{field}` must be a non-empty string")]
    EmptyString {
        /// Action being validated.
        action: Action,
        /// Offending field; `data` when the payload itself is the string.
        field: &'static str,
    },
    /// `environment` is not one of the accepted values.
    #[error("{action}: unknown environment `{value}`")]
    UnknownEnvironment {
        /// Action being validated.
        action: Action,
        /// Rejected value.
        value: String,
    },
    /// A revenue amount is not a finite number, or lacks a currency.
    #[error("{action}: invalid revenue: {reason}")]
    InvalidRevenue {
        /// Action being validated.
        action: Action,
        /// What was wrong.
        reason: &'static str,
    },
    /// An `add` parameter operation carried a null value.
    #[error("{action}: parameter `{key}` has no value")]
    MissingValue {
        /// Action being validated.
        action: Action,
        /// Parameter key.
        key: String,
    },
}

impl ValidationError {
    /// Returns the action the rejected envelope was built for.
    pub const fn action(&self) -> Action {
        match self {
            Self::ExpectedObject { action }
            | Self::EmptyString { action, .. }
            | Self::UnknownEnvironment { action, .. }
            | Self::InvalidRevenue { action, .. }
            | Self::MissingValue { action, .. } => *action,
        }
    }
}

//! Typed contract for the Adjust webview message bridge.
//!
//! Script-side code calls SDK operations; each call becomes one [`Envelope`] (an action tag plus
//! the payload that action defines) handed to a host [`MessageChannel`]. This crate holds the
//! action table, the envelope wire format, the stateless [`AdjustBridge`] dispatcher, typed
//! payload models, and an optional [`ValidatingChannel`] layer. Concrete webview transport lives
//! in `adjust_bridge_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod action;
pub mod channel;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod models;
pub mod validation;

pub use action::{Action, PayloadShape};
pub use channel::{MemoryMessageChannel, MessageChannel, NoopMessageChannel};
pub use dispatcher::AdjustBridge;
pub use envelope::{Envelope, Payload};
pub use error::{BridgeError, EnvelopeError, ValidationError};
pub use models::{
    AdjustAdRevenue, AdjustConfig, AdjustEnvironment, AdjustEvent, AdjustLogLevel,
    AdjustThirdPartySharing, AdjustUrlStrategy, Parameters,
};
pub use validation::{validate_envelope, ValidatingChannel};

//! WebKit message-handler channel for WKWebView and WebKitGTK hosts.

use adjust_bridge::{BridgeError, Envelope, MessageChannel};

use crate::bridge;

/// Message handler name the native side registers by default.
pub const DEFAULT_HANDLER_NAME: &str = "adjust";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Runtime bridge settings supplied by the embedding code.
pub struct BridgeConfig {
    /// Name under `window.webkit.messageHandlers` the native host registered.
    pub handler_name: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            handler_name: DEFAULT_HANDLER_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Channel posting envelopes to `window.webkit.messageHandlers[handler_name]`.
pub struct WebkitMessageChannel {
    handler_name: String,
}

impl WebkitMessageChannel {
    /// Creates a channel for the given handler name.
    pub fn new(handler_name: impl Into<String>) -> Self {
        Self {
            handler_name: handler_name.into(),
        }
    }

    /// Creates a channel from runtime settings.
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self::new(config.handler_name.clone())
    }

    /// Handler name this channel posts to.
    pub fn handler_name(&self) -> &str {
        &self.handler_name
    }

    /// Returns whether the handler is currently registered, without posting anything.
    pub fn is_available(&self) -> bool {
        bridge::handler_available(&self.handler_name)
    }
}

impl Default for WebkitMessageChannel {
    fn default() -> Self {
        Self::new(DEFAULT_HANDLER_NAME)
    }
}

impl MessageChannel for WebkitMessageChannel {
    fn post_message(&self, envelope: &Envelope) -> Result<(), BridgeError> {
        bridge::post_message(&self.handler_name, envelope)
    }
}

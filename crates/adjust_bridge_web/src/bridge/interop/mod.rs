//! Target routing for the WebKit message-handler transport.
//!
//! The wasm32 build talks to `window.webkit.messageHandlers`; every other target gets a shim
//! that reports the handler as unavailable.

use adjust_bridge::{BridgeError, Envelope};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn post_message(handler_name: &str, envelope: &Envelope) -> Result<(), BridgeError> {
    imp::post_message(handler_name, envelope)
}

pub fn handler_available(handler_name: &str) -> bool {
    imp::handler_available(handler_name)
}

//! WebKit message-handler transport used by [`crate::WebkitMessageChannel`].

mod interop;

use adjust_bridge::{BridgeError, Envelope};

pub fn post_message(handler_name: &str, envelope: &Envelope) -> Result<(), BridgeError> {
    interop::post_message(handler_name, envelope)
}

pub fn handler_available(handler_name: &str) -> bool {
    interop::handler_available(handler_name)
}

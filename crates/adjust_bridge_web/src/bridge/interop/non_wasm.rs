use super::*;

fn unsupported(handler_name: &str) -> BridgeError {
    BridgeError::ChannelUnavailable {
        handler: handler_name.to_string(),
        reason: "webkit message handlers are only available when compiled for wasm32".to_string(),
    }
}

pub fn post_message(handler_name: &str, _envelope: &Envelope) -> Result<(), BridgeError> {
    Err(unsupported(handler_name))
}

pub fn handler_available(_handler_name: &str) -> bool {
    false
}

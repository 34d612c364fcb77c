use super::*;
use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn lookup(target: &JsValue, property: &str) -> Result<JsValue, String> {
    let value = Reflect::get(target, &JsValue::from_str(property)).map_err(js_error_to_string)?;
    if value.is_null() || value.is_undefined() {
        Err(format!("`{property}` is not defined"))
    } else {
        Ok(value)
    }
}

// Resolves `window.webkit.messageHandlers[handler_name]` and its `postMessage` function.
fn resolve_handler(handler_name: &str) -> Result<(JsValue, Function), String> {
    let window: JsValue = web_sys::window()
        .ok_or_else(|| "no global `window`".to_string())?
        .into();
    let webkit = lookup(&window, "webkit")?;
    let handlers = lookup(&webkit, "messageHandlers")?;
    let handler = lookup(&handlers, handler_name)?;
    let post = lookup(&handler, "postMessage")?
        .dyn_into::<Function>()
        .map_err(|_| "`postMessage` is not a function".to_string())?;
    Ok((handler, post))
}

pub fn post_message(handler_name: &str, envelope: &Envelope) -> Result<(), BridgeError> {
    let (handler, post) =
        resolve_handler(handler_name).map_err(|reason| BridgeError::ChannelUnavailable {
            handler: handler_name.to_string(),
            reason,
        })?;
    let rejected = |message: String| BridgeError::Post {
        handler: handler_name.to_string(),
        action: envelope.action(),
        message,
    };

    // Plain objects, not `Map`s, so the native side receives a dictionary.
    let message = envelope
        .serialize(&Serializer::json_compatible())
        .map_err(|err| rejected(err.to_string()))?;
    post.call1(&handler, &message)
        .map(|_| ())
        .map_err(|err| rejected(js_error_to_string(err)))
}

pub fn handler_available(handler_name: &str) -> bool {
    resolve_handler(handler_name).is_ok()
}

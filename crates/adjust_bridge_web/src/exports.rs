//! Script-callable `Adjust` operations exported through `wasm-bindgen`.
//!
//! Names match what page scripts already call (`initSDK`, `trackEvent`, ...). Arguments arrive
//! as raw `JsValue`s and are converted to JSON without inspection; a bridge failure is thrown as a
//! JS `Error`. Every export posts through the thread's shared dispatcher.

use adjust_bridge::{AdjustBridge, BridgeError};
use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use crate::{take_recorded_envelopes, with_shared_bridge, MessageChannelAdapter};

fn with_bridge(
    op: impl FnOnce(&AdjustBridge<MessageChannelAdapter>) -> Result<(), BridgeError>,
) -> Result<(), JsValue> {
    with_shared_bridge(op).map_err(|err| js_sys::Error::new(&err.to_string()).into())
}

fn to_json(value: JsValue) -> Result<Value, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

/// Starts the SDK with an `AdjustConfig` object.
#[wasm_bindgen(js_name = initSDK)]
pub fn init_sdk(adjust_config: JsValue) -> Result<(), JsValue> {
    let config = to_json(adjust_config)?;
    with_bridge(|bridge| bridge.init_sdk(&config))
}

/// Tracks an `AdjustEvent` object.
#[wasm_bindgen(js_name = trackEvent)]
pub fn track_event(adjust_event: JsValue) -> Result<(), JsValue> {
    let event = to_json(adjust_event)?;
    with_bridge(|bridge| bridge.track_event(&event))
}

/// Tracks an ad revenue object.
#[wasm_bindgen(js_name = trackRevenue)]
pub fn track_revenue(adjust_revenue: JsValue) -> Result<(), JsValue> {
    let revenue = to_json(adjust_revenue)?;
    with_bridge(|bridge| bridge.track_ad_revenue(&revenue))
}

/// Reports the deeplink URL that opened the app.
#[wasm_bindgen(js_name = trackDeeplink)]
pub fn track_deeplink(url: &str) -> Result<(), JsValue> {
    with_bridge(|bridge| bridge.track_deeplink(url))
}

/// Reports the push notification token.
#[wasm_bindgen(js_name = trackPushToken)]
pub fn track_push_token(token: &str) -> Result<(), JsValue> {
    with_bridge(|bridge| bridge.track_push_token(token))
}

/// Switches the SDK to offline mode.
#[wasm_bindgen(js_name = switchToOfflineMode)]
pub fn switch_to_offline_mode() -> Result<(), JsValue> {
    with_bridge(AdjustBridge::switch_to_offline_mode)
}

/// Switches the SDK back to online mode.
#[wasm_bindgen(js_name = switchToOnlineMode)]
pub fn switch_to_online_mode() -> Result<(), JsValue> {
    with_bridge(AdjustBridge::switch_to_online_mode)
}

/// Disables the SDK.
#[wasm_bindgen(js_name = inactiveSDK)]
pub fn inactivate_sdk() -> Result<(), JsValue> {
    with_bridge(AdjustBridge::inactivate_sdk)
}

/// Re-enables the SDK.
#[wasm_bindgen(js_name = reactivateSDK)]
pub fn reactivate_sdk() -> Result<(), JsValue> {
    with_bridge(AdjustBridge::reactivate_sdk)
}

/// Adds a global callback parameter.
#[wasm_bindgen(js_name = addGlobalCallbackParameter)]
pub fn add_global_callback_parameter(key: &str, value: JsValue) -> Result<(), JsValue> {
    let value = to_json(value)?;
    with_bridge(|bridge| bridge.add_global_callback_parameter(key, &value))
}

/// Removes a global callback parameter by key.
#[wasm_bindgen(js_name = removeGlobalCallbackParameter)]
pub fn remove_global_callback_parameter(key: &str) -> Result<(), JsValue> {
    with_bridge(|bridge| bridge.remove_global_callback_parameter(key))
}

/// Removes every global callback parameter.
#[wasm_bindgen(js_name = clearGlobalCallbackParameters)]
pub fn clear_global_callback_parameters() -> Result<(), JsValue> {
    with_bridge(AdjustBridge::clear_global_callback_parameters)
}

/// Adds a global partner parameter.
#[wasm_bindgen(js_name = addGlobalPartnerParameter)]
pub fn add_global_partner_parameter(key: &str, value: JsValue) -> Result<(), JsValue> {
    let value = to_json(value)?;
    with_bridge(|bridge| bridge.add_global_partner_parameter(key, &value))
}

/// Removes a global partner parameter by key.
#[wasm_bindgen(js_name = removeGlobalPartnerParameter)]
pub fn remove_global_partner_parameter(key: &str) -> Result<(), JsValue> {
    with_bridge(|bridge| bridge.remove_global_partner_parameter(key))
}

/// Removes every global partner parameter.
#[wasm_bindgen(js_name = clearGlobalPartnerParameters)]
pub fn clear_global_partner_parameters() -> Result<(), JsValue> {
    with_bridge(AdjustBridge::clear_global_partner_parameters)
}

/// Asks the backend to forget this device.
#[wasm_bindgen(js_name = gdprForgetMe)]
pub fn gdpr_forget_me() -> Result<(), JsValue> {
    with_bridge(AdjustBridge::gdpr_forget_me)
}

/// Sends third-party sharing settings.
#[wasm_bindgen(js_name = trackThirdPartySharing)]
pub fn track_third_party_sharing(adjust_third_party_sharing: JsValue) -> Result<(), JsValue> {
    let sharing = to_json(adjust_third_party_sharing)?;
    with_bridge(|bridge| bridge.track_third_party_sharing(&sharing))
}

/// Drains the wire objects recorded under `bridge-memory`; an empty array otherwise.
#[wasm_bindgen(js_name = takeRecordedMessages)]
pub fn take_recorded_messages() -> Result<JsValue, JsValue> {
    take_recorded_envelopes()
        .serialize(&Serializer::json_compatible())
        .map_err(JsValue::from)
}

//! Stateless dispatcher exposing one method per bridge operation.
//!
//! Each method builds exactly one [`Envelope`] and posts it once. Nothing is retained between
//! calls, validated, or read back from the host.

use serde::Serialize;
use serde_json::Value;

use crate::action::Action;
use crate::channel::MessageChannel;
use crate::envelope::{Envelope, Payload};
use crate::error::BridgeError;

/// Dispatcher that forwards SDK operations to a [`MessageChannel`].
#[derive(Debug, Clone, Default)]
pub struct AdjustBridge<C> {
    channel: C,
}

impl<C: MessageChannel> AdjustBridge<C> {
    /// Wraps a channel.
    pub const fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Borrows the underlying channel.
    pub const fn channel(&self) -> &C {
        &self.channel
    }

    /// Unwraps the underlying channel.
    pub fn into_channel(self) -> C {
        self.channel
    }

    /// Posts a pre-built envelope.
    pub fn dispatch(&self, envelope: &Envelope) -> Result<(), BridgeError> {
        let action = envelope.action();
        tracing::debug!(action = %action, "adjust bridge: posting envelope");
        self.channel.post_message(envelope).inspect_err(|err| {
            tracing::warn!(action = %action, error = %err, "adjust bridge: post failed");
        })
    }

    fn send(&self, action: Action, payload: Payload) -> Result<(), BridgeError> {
        self.dispatch(&Envelope::from_parts(action, payload))
    }

    fn send_bare(&self, action: Action) -> Result<(), BridgeError> {
        self.send(action, Payload::None)
    }

    fn send_data<T: Serialize + ?Sized>(&self, action: Action, data: &T) -> Result<(), BridgeError> {
        let data = encode(action, data)?;
        self.send(action, Payload::Data(data))
    }

    fn send_key(&self, action: Action, key: &str) -> Result<(), BridgeError> {
        self.send(action, Payload::Key(key.to_string()))
    }

    fn send_key_value<T: Serialize + ?Sized>(
        &self,
        action: Action,
        key: &str,
        value: &T,
    ) -> Result<(), BridgeError> {
        let value = encode(action, value)?;
        self.send(
            action,
            Payload::KeyValue {
                key: key.to_string(),
                value,
            },
        )
    }

    /// Starts the SDK with a configuration object (usually [`crate::AdjustConfig`]).
    pub fn init_sdk<T: Serialize + ?Sized>(&self, config: &T) -> Result<(), BridgeError> {
        self.send_data(Action::InitSdk, config)
    }

    /// Tracks an event object (usually [`crate::AdjustEvent`]).
    pub fn track_event<T: Serialize + ?Sized>(&self, event: &T) -> Result<(), BridgeError> {
        self.send_data(Action::TrackEvent, event)
    }

    /// Tracks an ad revenue object (usually [`crate::AdjustAdRevenue`]).
    pub fn track_ad_revenue<T: Serialize + ?Sized>(&self, revenue: &T) -> Result<(), BridgeError> {
        self.send_data(Action::TrackAdRevenue, revenue)
    }

    /// Reports the deeplink URL that opened the app.
    pub fn track_deeplink(&self, url: &str) -> Result<(), BridgeError> {
        self.send(Action::TrackDeeplink, Payload::Data(Value::from(url)))
    }

    /// Reports the push notification token.
    pub fn track_push_token(&self, token: &str) -> Result<(), BridgeError> {
        self.send(Action::TrackPushToken, Payload::Data(Value::from(token)))
    }

    /// Switches the SDK to offline mode.
    pub fn switch_to_offline_mode(&self) -> Result<(), BridgeError> {
        self.send_bare(Action::SwitchToOfflineMode)
    }

    /// Switches the SDK back to online mode.
    pub fn switch_to_online_mode(&self) -> Result<(), BridgeError> {
        self.send_bare(Action::SwitchToOnlineMode)
    }

    /// Disables the SDK.
    pub fn inactivate_sdk(&self) -> Result<(), BridgeError> {
        self.send_bare(Action::InactivateSdk)
    }

    /// Re-enables the SDK.
    pub fn reactivate_sdk(&self) -> Result<(), BridgeError> {
        self.send_bare(Action::ReactivateSdk)
    }

    /// Adds a global callback parameter.
    pub fn add_global_callback_parameter<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), BridgeError> {
        self.send_key_value(Action::AddGlobalCallbackParameter, key, value)
    }

    /// Removes a global callback parameter by key.
    pub fn remove_global_callback_parameter(&self, key: &str) -> Result<(), BridgeError> {
        self.send_key(Action::RemoveGlobalCallbackParameter, key)
    }

    /// Removes every global callback parameter.
    pub fn clear_global_callback_parameters(&self) -> Result<(), BridgeError> {
        self.send_bare(Action::ClearGlobalCallbackParameters)
    }

    /// Adds a global partner parameter.
    pub fn add_global_partner_parameter<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), BridgeError> {
        self.send_key_value(Action::AddGlobalPartnerParameter, key, value)
    }

    /// Removes a global partner parameter by key.
    pub fn remove_global_partner_parameter(&self, key: &str) -> Result<(), BridgeError> {
        self.send_key(Action::RemoveGlobalPartnerParameter, key)
    }

    /// Removes every global partner parameter.
    pub fn clear_global_partner_parameters(&self) -> Result<(), BridgeError> {
        self.send_bare(Action::ClearGlobalPartnerParameters)
    }

    /// Asks the backend to forget this device.
    pub fn gdpr_forget_me(&self) -> Result<(), BridgeError> {
        self.send_bare(Action::GdprForgetMe)
    }

    /// Sends third-party sharing settings (usually [`crate::AdjustThirdPartySharing`]).
    pub fn track_third_party_sharing<T: Serialize + ?Sized>(
        &self,
        sharing: &T,
    ) -> Result<(), BridgeError> {
        self.send_data(Action::TrackThirdPartySharing, sharing)
    }
}

fn encode<T: Serialize + ?Sized>(action: Action, payload: &T) -> Result<Value, BridgeError> {
    serde_json::to_value(payload).map_err(|source| BridgeError::Encode { action, source })
}

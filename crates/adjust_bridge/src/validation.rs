//! Optional argument-shape checks, layered in front of a channel.
//!
//! The dispatcher never validates. Hosts that want stricter behaviour wrap their channel in a
//! [`ValidatingChannel`]; rejected envelopes are reported to the caller and never posted.

use serde_json::{Map, Value};

use crate::action::Action;
use crate::channel::MessageChannel;
use crate::envelope::{Envelope, Payload};
use crate::error::{BridgeError, ValidationError};
use crate::models::AdjustEnvironment;

/// Checks an envelope against the value rules of its action.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_envelope(envelope: &Envelope) -> Result<(), ValidationError> {
    let action = envelope.action();
    match (action, envelope.payload()) {
        (_, Payload::None) => Ok(()),
        (Action::InitSdk, Payload::Data(data)) => validate_config(action, data),
        (Action::TrackEvent, Payload::Data(data)) => {
            let fields = as_object(action, data)?;
            require_string(action, fields, "eventToken")?;
            validate_money(action, fields)
        }
        (Action::TrackAdRevenue, Payload::Data(data)) => {
            let fields = as_object(action, data)?;
            require_string(action, fields, "source")?;
            validate_money(action, fields)
        }
        (Action::TrackDeeplink | Action::TrackPushToken, Payload::Data(data)) => {
            match data.as_str() {
                Some(text) if !text.is_empty() => Ok(()),
                _ => Err(ValidationError::EmptyString {
                    action,
                    field: "data",
                }),
            }
        }
        (_, Payload::Data(data)) => as_object(action, data).map(|_| ()),
        (_, Payload::Key(key)) => require_key(action, key),
        (_, Payload::KeyValue { key, value }) => {
            require_key(action, key)?;
            if value.is_null() {
                return Err(ValidationError::MissingValue {
                    action,
                    key: key.clone(),
                });
            }
            Ok(())
        }
    }
}

fn validate_config(action: Action, data: &Value) -> Result<(), ValidationError> {
    let fields = as_object(action, data)?;
    require_string(action, fields, "appToken")?;
    let environment = require_string(action, fields, "environment")?;
    if AdjustEnvironment::parse(environment).is_none() {
        return Err(ValidationError::UnknownEnvironment {
            action,
            value: environment.to_string(),
        });
    }
    Ok(())
}

// Revenue is optional; when present it must be a number with a currency. JSON values cannot
// hold non-finite numbers, so a `null` amount next to a currency is a dropped NaN or infinity.
fn validate_money(action: Action, fields: &Map<String, Value>) -> Result<(), ValidationError> {
    match fields.get("revenue") {
        None => return Ok(()),
        Some(Value::Null) if fields.contains_key("currency") => {
            return Err(ValidationError::InvalidRevenue {
                action,
                reason: "currency has no amount",
            });
        }
        Some(Value::Null) => return Ok(()),
        Some(revenue) if !revenue.is_number() => {
            return Err(ValidationError::InvalidRevenue {
                action,
                reason: "amount is not a number",
            });
        }
        Some(_) => {}
    }
    match fields.get("currency").and_then(Value::as_str) {
        Some(currency) if !currency.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidRevenue {
            action,
            reason: "amount has no currency",
        }),
    }
}

fn as_object(action: Action, data: &Value) -> Result<&Map<String, Value>, ValidationError> {
    data.as_object()
        .ok_or(ValidationError::ExpectedObject { action })
}

fn require_string<'a>(
    action: Action,
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match fields.get(field).and_then(Value::as_str) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ValidationError::EmptyString { action, field }),
    }
}

fn require_key(action: Action, key: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::EmptyString { action, field: "key" });
    }
    Ok(())
}

/// Channel wrapper that validates each envelope before forwarding it.
#[derive(Debug, Clone, Default)]
pub struct ValidatingChannel<C> {
    inner: C,
}

impl<C> ValidatingChannel<C> {
    /// Wraps `inner`.
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Borrows the wrapped channel.
    pub const fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: MessageChannel> MessageChannel for ValidatingChannel<C> {
    fn post_message(&self, envelope: &Envelope) -> Result<(), BridgeError> {
        if let Err(err) = validate_envelope(envelope) {
            tracing::debug!(
                action = %envelope.action(),
                error = %err,
                "adjust bridge: envelope rejected"
            );
            return Err(err.into());
        }
        self.inner.post_message(envelope)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        AdjustAdRevenue, AdjustBridge, AdjustConfig, AdjustEnvironment, AdjustEvent,
        AdjustThirdPartySharing, MemoryMessageChannel,
    };

    fn envelope(action: Action, payload: Payload) -> Envelope {
        Envelope::new(action, payload).expect("shape matches")
    }

    #[test]
    fn well_formed_operations_pass() {
        let channel = MemoryMessageChannel::default();
        let bridge = AdjustBridge::new(ValidatingChannel::new(channel.clone()));

        bridge
            .init_sdk(&AdjustConfig::new("2fm9gkqubvpc", AdjustEnvironment::Production))
            .expect("init");
        bridge
            .track_event(&AdjustEvent::new("g3mfiw").with_revenue(0.01, "EUR"))
            .expect("event");
        bridge
            .track_ad_revenue(&AdjustAdRevenue::new("applovin_max_sdk"))
            .expect("ad revenue");
        bridge.track_deeplink("app://open").expect("deeplink");
        bridge.track_push_token("f00d").expect("push token");
        bridge
            .track_third_party_sharing(&AdjustThirdPartySharing::new(Some(true)))
            .expect("sharing");
        bridge
            .add_global_callback_parameter("user_id", "42")
            .expect("add parameter");
        bridge
            .remove_global_partner_parameter("sku")
            .expect("remove parameter");
        bridge.switch_to_offline_mode().expect("offline");

        assert_eq!(channel.len(), 9);
    }

    #[test]
    fn rejected_envelopes_are_not_forwarded() {
        let channel = MemoryMessageChannel::default();
        let bridge = AdjustBridge::new(ValidatingChannel::new(&channel));

        let err = bridge.track_deeplink("").expect_err("empty deeplink");
        assert!(matches!(
            err,
            BridgeError::Validation(ValidationError::EmptyString {
                action: Action::TrackDeeplink,
                field: "data",
            })
        ));
        assert!(channel.is_empty());
    }

    #[test]
    fn config_needs_token_and_known_environment() {
        assert_eq!(
            validate_envelope(&envelope(
                Action::InitSdk,
                Payload::Data(json!({"environment": "sandbox"}))
            )),
            Err(ValidationError::EmptyString {
                action: Action::InitSdk,
                field: "appToken",
            })
        );
        assert_eq!(
            validate_envelope(&envelope(
                Action::InitSdk,
                Payload::Data(json!({"appToken": "t", "environment": "staging"}))
            )),
            Err(ValidationError::UnknownEnvironment {
                action: Action::InitSdk,
                value: "staging".to_string(),
            })
        );
        assert_eq!(
            validate_envelope(&envelope(Action::InitSdk, Payload::Data(json!("t")))),
            Err(ValidationError::ExpectedObject {
                action: Action::InitSdk
            })
        );
    }

    #[test]
    fn revenue_requires_number_and_currency() {
        assert_eq!(
            validate_envelope(&envelope(
                Action::TrackEvent,
                Payload::Data(json!({"eventToken": "e", "revenue": 1.5}))
            )),
            Err(ValidationError::InvalidRevenue {
                action: Action::TrackEvent,
                reason: "amount has no currency",
            })
        );
        assert_eq!(
            validate_envelope(&envelope(
                Action::TrackAdRevenue,
                Payload::Data(json!({"source": "s", "revenue": "1.5", "currency": "EUR"}))
            )),
            Err(ValidationError::InvalidRevenue {
                action: Action::TrackAdRevenue,
                reason: "amount is not a number",
            })
        );
        assert_eq!(
            validate_envelope(&envelope(
                Action::TrackAdRevenue,
                Payload::Data(json!({"revenue": 1.5, "currency": "EUR"}))
            )),
            Err(ValidationError::EmptyString {
                action: Action::TrackAdRevenue,
                field: "source",
            })
        );
    }

    #[test]
    fn parameter_rules() {
        assert_eq!(
            validate_envelope(&envelope(
                Action::RemoveGlobalCallbackParameter,
                Payload::Key(String::new())
            )),
            Err(ValidationError::EmptyString {
                action: Action::RemoveGlobalCallbackParameter,
                field: "key",
            })
        );
        let err = validate_envelope(&envelope(
            Action::AddGlobalPartnerParameter,
            Payload::KeyValue {
                key: "sku".to_string(),
                value: Value::Null,
            },
        ))
        .expect_err("null value");
        assert_eq!(err.action(), Action::AddGlobalPartnerParameter);
        assert_eq!(
            err.to_string(),
            "adjust_addGlobalPartnerParameter: parameter `sku` has no value"
        );
        assert_eq!(
            validate_envelope(&envelope(
                Action::AddGlobalCallbackParameter,
                Payload::KeyValue {
                    key: String::new(),
                    value: json!("42"),
                },
            )),
            Err(ValidationError::EmptyString {
                action: Action::AddGlobalCallbackParameter,
                field: "key",
            })
        );
    }

    #[test]
    fn third_party_sharing_needs_an_object() {
        let channel = MemoryMessageChannel::default();
        let bridge = AdjustBridge::new(ValidatingChannel::new(&channel));

        let err = bridge
            .track_third_party_sharing(&json!([true]))
            .expect_err("array payload");
        assert!(matches!(
            err,
            BridgeError::Validation(ValidationError::ExpectedObject {
                action: Action::TrackThirdPartySharing,
            })
        ));
        assert!(channel.is_empty());
    }

    #[test]
    fn null_revenue_beside_currency_is_rejected() {
        assert_eq!(
            validate_envelope(&envelope(
                Action::TrackEvent,
                Payload::Data(json!({"eventToken": "e", "revenue": null, "currency": "EUR"}))
            )),
            Err(ValidationError::InvalidRevenue {
                action: Action::TrackEvent,
                reason: "currency has no amount",
            })
        );
        assert_eq!(
            validate_envelope(&envelope(
                Action::TrackEvent,
                Payload::Data(json!({"eventToken": "e", "revenue": null}))
            )),
            Ok(())
        );
    }

    #[test]
    fn non_finite_revenue_never_reaches_the_channel() {
        let channel = MemoryMessageChannel::default();
        let bridge = AdjustBridge::new(ValidatingChannel::new(&channel));

        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = bridge
                .track_event(&AdjustEvent::new("e").with_revenue(amount, "EUR"))
                .expect_err("non-finite event revenue");
            assert!(matches!(
                err,
                BridgeError::Encode {
                    action: Action::TrackEvent,
                    ..
                }
            ));
            let err = bridge
                .track_ad_revenue(&AdjustAdRevenue::new("s").with_revenue(amount, "EUR"))
                .expect_err("non-finite ad revenue");
            assert!(matches!(
                err,
                BridgeError::Encode {
                    action: Action::TrackAdRevenue,
                    ..
                }
            ));
        }
        assert!(channel.is_empty());
    }
}

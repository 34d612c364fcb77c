use serde::{Deserialize, Serialize};

use super::Parameters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Event object sent with the track-event operation.
pub struct AdjustEvent {
    /// Event token from the dashboard.
    pub event_token: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::serialize_amount"
    )]
    /// Revenue amount; meaningful only together with [`AdjustEvent::currency`].
    pub revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// ISO 4217 currency code of the revenue.
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Caller identifier echoed back in event callbacks.
    pub callback_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Identifier used by the backend to drop duplicate events.
    pub deduplication_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Purchased product identifier.
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Parameters::is_empty")]
    /// Parameters forwarded to the app's callback URL.
    pub callback_parameters: Parameters,
    #[serde(default, skip_serializing_if = "Parameters::is_empty")]
    /// Parameters forwarded to network partners.
    pub partner_parameters: Parameters,
}

impl AdjustEvent {
    /// Creates an event for the given token.
    pub fn new(event_token: impl Into<String>) -> Self {
        Self {
            event_token: event_token.into(),
            revenue: None,
            currency: None,
            callback_id: None,
            deduplication_id: None,
            product_id: None,
            callback_parameters: Parameters::new(),
            partner_parameters: Parameters::new(),
        }
    }

    /// Attaches a revenue amount and its currency.
    pub fn with_revenue(mut self, amount: f64, currency: impl Into<String>) -> Self {
        self.revenue = Some(amount);
        self.currency = Some(currency.into());
        self
    }

    /// Sets the callback identifier.
    pub fn with_callback_id(mut self, id: impl Into<String>) -> Self {
        self.callback_id = Some(id.into());
        self
    }

    /// Sets the deduplication identifier.
    pub fn with_deduplication_id(mut self, id: impl Into<String>) -> Self {
        self.deduplication_id = Some(id.into());
        self
    }

    /// Sets the product identifier.
    pub fn with_product_id(mut self, id: impl Into<String>) -> Self {
        self.product_id = Some(id.into());
        self
    }

    /// Adds one callback parameter, replacing any earlier value for the key.
    pub fn add_callback_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.callback_parameters.insert(key.into(), value.into());
        self
    }

    /// Adds one partner parameter, replacing any earlier value for the key.
    pub fn add_partner_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.partner_parameters.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn revenue_event_serializes_money_and_parameters() {
        let event = AdjustEvent::new("g3mfiw")
            .with_revenue(0.99, "EUR")
            .with_deduplication_id("order-17")
            .add_callback_parameter("user_id", "42")
            .add_partner_parameter("sku", "gold-pack");

        assert_eq!(
            serde_json::to_value(&event).expect("serialize"),
            json!({
                "eventToken": "g3mfiw",
                "revenue": 0.99,
                "currency": "EUR",
                "deduplicationId": "order-17",
                "callbackParameters": {"user_id": "42"},
                "partnerParameters": {"sku": "gold-pack"}
            })
        );
    }

    #[test]
    fn bare_event_decodes_with_empty_parameters() {
        let event: AdjustEvent =
            serde_json::from_value(json!({"eventToken": "g3mfiw"})).expect("decode");
        assert_eq!(event, AdjustEvent::new("g3mfiw"));
    }

    #[test]
    fn non_finite_revenue_is_not_encodable() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = serde_json::to_value(AdjustEvent::new("g3mfiw").with_revenue(amount, "EUR"))
                .expect_err("non-finite amount");
            assert!(err.to_string().contains("is not a finite number"), "{err}");
        }
    }
}

use serde::{Deserialize, Serialize};

use super::Parameters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Ad revenue object sent with the track-ad-revenue operation.
pub struct AdjustAdRevenue {
    /// Mediation source, for example `applovin_max_sdk`.
    pub source: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::serialize_amount"
    )]
    /// Revenue amount.
    pub revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// ISO 4217 currency code of the revenue.
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Number of impressions the revenue covers.
    pub ad_impressions_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Ad network that served the impressions.
    pub ad_revenue_network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Ad unit identifier.
    pub ad_revenue_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Placement identifier.
    pub ad_revenue_placement: Option<String>,
    #[serde(default, skip_serializing_if = "Parameters::is_empty")]
    /// Parameters forwarded to the app's callback URL.
    pub callback_parameters: Parameters,
    #[serde(default, skip_serializing_if = "Parameters::is_empty")]
    /// Parameters forwarded to network partners.
    pub partner_parameters: Parameters,
}

impl AdjustAdRevenue {
    /// Creates an ad revenue record for the given mediation source.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            revenue: None,
            currency: None,
            ad_impressions_count: None,
            ad_revenue_network: None,
            ad_revenue_unit: None,
            ad_revenue_placement: None,
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

    /// Sets the impression count.
    pub fn with_impressions(mut self, count: u32) -> Self {
        self.ad_impressions_count = Some(count);
        self
    }

    /// Sets network, unit, and placement in one call.
    pub fn with_placement(
        mut self,
        network: impl Into<String>,
        unit: impl Into<String>,
        placement: impl Into<String>,
    ) -> Self {
        self.ad_revenue_network = Some(network.into());
        self.ad_revenue_unit = Some(unit.into());
        self.ad_revenue_placement = Some(placement.into());
        self
    }

    /// Adds one callback parameter.
    pub fn add_callback_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.callback_parameters.insert(key.into(), value.into());
        self
    }

    /// Adds one partner parameter.
    pub fn add_partner_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.partner_parameters.insert(key.into(), value.into());
        self
    }
}

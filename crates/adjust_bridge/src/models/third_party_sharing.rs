use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Third-party sharing settings sent with the track-third-party-sharing operation.
pub struct AdjustThirdPartySharing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Global sharing switch; `None` leaves the current setting untouched.
    pub is_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    /// Per-partner option strings, keyed by partner name then option key.
    pub granular_options: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    /// Per-partner sharing flags, keyed by partner name then setting key.
    pub partner_sharing_settings: BTreeMap<String, BTreeMap<String, bool>>,
}

impl AdjustThirdPartySharing {
    /// Creates settings with the global switch set, or left untouched for `None`.
    pub fn new(is_enabled: Option<bool>) -> Self {
        Self {
            is_enabled,
            ..Self::default()
        }
    }

    /// Adds a granular option for one partner.
    pub fn add_granular_option(
        mut self,
        partner: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.granular_options
            .entry(partner.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Adds a sharing flag for one partner.
    pub fn add_partner_sharing_setting(
        mut self,
        partner: impl Into<String>,
        key: impl Into<String>,
        value: bool,
    ) -> Self {
        self.partner_sharing_settings
            .entry(partner.into())
            .or_default()
            .insert(key.into(), value);
        self
    }
}

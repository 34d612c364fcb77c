//! Typed payload objects for the `data` field of SDK operations.
//!
//! These mirror the objects script code passes to the bridge. The dispatcher accepts any
//! `Serialize` payload, so using them is optional.

mod ad_revenue;
mod config;
mod event;
mod third_party_sharing;

use std::collections::BTreeMap;

use serde::{ser, Serialize, Serializer};

pub use ad_revenue::AdjustAdRevenue;
pub use config::{AdjustConfig, AdjustEnvironment, AdjustLogLevel, AdjustUrlStrategy};
pub use event::AdjustEvent;
pub use third_party_sharing::AdjustThirdPartySharing;

/// String parameters attached to a package; ordered so the wire form is stable.
pub type Parameters = BTreeMap<String, String>;

// JSON has no NaN or infinity; serde_json would quietly write `null` for them.
fn serialize_amount<S: Serializer>(
    amount: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match amount {
        Some(value) if !value.is_finite() => Err(ser::Error::custom(format!(
            "revenue amount {value} is not a finite number"
        ))),
        _ => amount.serialize(serializer),
    }
}

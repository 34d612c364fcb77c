//! Action identities, their wire tags, and the payload shape each one carries.

/// Payload fields an action places on its envelope next to `action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadShape {
    /// `{ action }` only.
    None,
    /// `{ action, data }`.
    Data,
    /// `{ action, key }`.
    Key,
    /// `{ action, key, value }`.
    KeyValue,
}

impl PayloadShape {
    /// Returns the envelope field names this shape carries, excluding `action`.
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::None => &[],
            Self::Data => &["data"],
            Self::Key => &["key"],
            Self::KeyValue => &["key", "value"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One operation the native Adjust message handler understands.
pub enum Action {
    /// Start the SDK with a configuration object.
    InitSdk,
    /// Track an event object.
    TrackEvent,
    /// Track an ad revenue object.
    TrackAdRevenue,
    /// Report a deeplink URL that opened the app.
    TrackDeeplink,
    /// Report the push notification token.
    TrackPushToken,
    /// Hold outgoing packages until switched back online.
    SwitchToOfflineMode,
    /// Resume sending packages.
    SwitchToOnlineMode,
    /// Disable the SDK.
    InactivateSdk,
    /// Re-enable a previously disabled SDK.
    ReactivateSdk,
    /// Add a callback parameter attached to every event.
    AddGlobalCallbackParameter,
    /// Remove one global callback parameter by key.
    RemoveGlobalCallbackParameter,
    /// Remove all global callback parameters.
    ClearGlobalCallbackParameters,
    /// Add a partner parameter attached to every event.
    AddGlobalPartnerParameter,
    /// Remove one global partner parameter by key.
    RemoveGlobalPartnerParameter,
    /// Remove all global partner parameters.
    ClearGlobalPartnerParameters,
    /// Ask the backend to forget this device (GDPR right to be forgotten).
    GdprForgetMe,
    /// Send third-party sharing settings.
    TrackThirdPartySharing,
}

// (action, wire tag, payload shape). Tags must match the native handler byte for byte.
const ACTION_TABLE: [(Action, &str, PayloadShape); 17] = [
    (Action::InitSdk, "adjust_appDidLaunch", PayloadShape::Data),
    (Action::TrackEvent, "adjust_trackEvent", PayloadShape::Data),
    (Action::TrackAdRevenue, "adjust_trackAdRevenue", PayloadShape::Data),
    (Action::TrackDeeplink, "adjust_trackDeeplink", PayloadShape::Data),
    (Action::TrackPushToken, "adjust_trackPushToken", PayloadShape::Data),
    (
        Action::SwitchToOfflineMode,
        "adjust_switchToOfflineMode",
        PayloadShape::None,
    ),
    (
        Action::SwitchToOnlineMode,
        "adjust_switchToOnlineMode",
        PayloadShape::None,
    ),
    (Action::InactivateSdk, "adjust_inactivateSdk", PayloadShape::None),
    (Action::ReactivateSdk, "adjust_reactivateSdk", PayloadShape::None),
    (
        Action::AddGlobalCallbackParameter,
        "adjust_addGlobalCallbackParameter",
        PayloadShape::KeyValue,
    ),
    (
        Action::RemoveGlobalCallbackParameter,
        "adjust_removeGlobalCallbackParameterByKey",
        PayloadShape::Key,
    ),
    (
        Action::ClearGlobalCallbackParameters,
        "adjust_clearAllGlobalCallbackParameters",
        PayloadShape::None,
    ),
    (
        Action::AddGlobalPartnerParameter,
        "adjust_addGlobalPartnerParameter",
        PayloadShape::KeyValue,
    ),
    (
        Action::RemoveGlobalPartnerParameter,
        "adjust_removeGlobalPartnerParameterByKey",
        PayloadShape::Key,
    ),
    (
        Action::ClearGlobalPartnerParameters,
        "adjust_clearAllGlobalPartnerParameters",
        PayloadShape::None,
    ),
    (Action::GdprForgetMe, "adjust_gdprForgetMe", PayloadShape::None),
    (
        Action::TrackThirdPartySharing,
        "adjust_trackThirdPartySharing",
        PayloadShape::Data,
    ),
];

impl Action {
    /// Every action, in table order.
    pub const ALL: [Action; 17] = [
        Self::InitSdk,
        Self::TrackEvent,
        Self::TrackAdRevenue,
        Self::TrackDeeplink,
        Self::TrackPushToken,
        Self::SwitchToOfflineMode,
        Self::SwitchToOnlineMode,
        Self::InactivateSdk,
        Self::ReactivateSdk,
        Self::AddGlobalCallbackParameter,
        Self::RemoveGlobalCallbackParameter,
        Self::ClearGlobalCallbackParameters,
        Self::AddGlobalPartnerParameter,
        Self::RemoveGlobalPartnerParameter,
        Self::ClearGlobalPartnerParameters,
        Self::GdprForgetMe,
        Self::TrackThirdPartySharing,
    ];

    const fn entry(self) -> (Action, &'static str, PayloadShape) {
        ACTION_TABLE[self as usize]
    }

    /// Returns the wire tag sent in the envelope's `action` field.
    pub const fn tag(self) -> &'static str {
        self.entry().1
    }

    /// Returns the payload shape this action carries.
    pub const fn shape(self) -> PayloadShape {
        self.entry().2
    }

    /// Looks up an action by its wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        ACTION_TABLE
            .iter()
            .find(|(_, candidate, _)| *candidate == tag)
            .map(|(action, _, _)| *action)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

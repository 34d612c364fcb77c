use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Backend environment the SDK reports to.
pub enum AdjustEnvironment {
    /// Test traffic, kept apart from production statistics.
    Sandbox,
    /// Live traffic.
    Production,
}

impl AdjustEnvironment {
    /// Returns the wire token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }

    /// Parses a wire token.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "sandbox" => Some(Self::Sandbox),
            "production" => Some(Self::Production),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Native SDK log verbosity.
pub enum AdjustLogLevel {
    /// Everything, including package contents.
    Verbose,
    /// Debug diagnostics.
    Debug,
    /// Informational messages.
    Info,
    /// Warnings only.
    Warn,
    /// Errors only.
    Error,
    /// Assertion failures only.
    Assert,
    /// No output.
    Suppress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Data residency / endpoint selection.
pub enum AdjustUrlStrategy {
    /// Route traffic to EU endpoints only.
    DataResidencyEu,
    /// Route traffic to Turkish endpoints only.
    DataResidencyTr,
    /// Route traffic to US endpoints only.
    DataResidencyUs,
    /// Prefer Chinese endpoints.
    China,
    /// Prefer Indian endpoints.
    India,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Configuration object sent with the SDK start operation.
pub struct AdjustConfig {
    /// App token from the dashboard.
    pub app_token: String,
    /// Backend environment.
    pub environment: AdjustEnvironment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Native log verbosity.
    pub log_level: Option<AdjustLogLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Tracker token attributed when no other attribution applies.
    pub default_tracker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Caller-supplied device identifier.
    pub external_device_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Keep sending packages while the app is backgrounded.
    pub send_in_background: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Mark traffic as COPPA compliant.
    pub coppa_compliant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Endpoint selection.
    pub url_strategy: Option<AdjustUrlStrategy>,
}

impl AdjustConfig {
    /// Creates a configuration with only the required fields set.
    pub fn new(app_token: impl Into<String>, environment: AdjustEnvironment) -> Self {
        Self {
            app_token: app_token.into(),
            environment,
            log_level: None,
            default_tracker: None,
            external_device_id: None,
            send_in_background: None,
            coppa_compliant: None,
            url_strategy: None,
        }
    }

    /// Sets the native log verbosity.
    pub fn with_log_level(mut self, log_level: AdjustLogLevel) -> Self {
        self.log_level = Some(log_level);
        self
    }

    /// Sets the default tracker token.
    pub fn with_default_tracker(mut self, tracker: impl Into<String>) -> Self {
        self.default_tracker = Some(tracker.into());
        self
    }

    /// Sets the external device identifier.
    pub fn with_external_device_id(mut self, id: impl Into<String>) -> Self {
        self.external_device_id = Some(id.into());
        self
    }

    /// Enables or disables sending while backgrounded.
    pub fn with_send_in_background(mut self, enabled: bool) -> Self {
        self.send_in_background = Some(enabled);
        self
    }

    /// Marks traffic as COPPA compliant or not.
    pub fn with_coppa_compliant(mut self, compliant: bool) -> Self {
        self.coppa_compliant = Some(compliant);
        self
    }

    /// Selects an endpoint strategy.
    pub fn with_url_strategy(mut self, strategy: AdjustUrlStrategy) -> Self {
        self.url_strategy = Some(strategy);
        self
    }
}

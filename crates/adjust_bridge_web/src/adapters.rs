use adjust_bridge::{
    AdjustBridge, BridgeError, Envelope, MemoryMessageChannel, MessageChannel, NoopMessageChannel,
};

use crate::{BridgeConfig, WebkitMessageChannel};

#[cfg(all(feature = "bridge-stub", feature = "bridge-memory"))]
compile_error!("features `bridge-stub` and `bridge-memory` are mutually exclusive; enable only one");

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected message channel strategy.
pub enum ChannelStrategy {
    /// Post to the WebKit message handler registered by the native host.
    Webkit,
    /// Discard every envelope; for builds without a native host.
    Stub,
    /// Record envelopes in memory; for headless hosts and inspection tooling.
    Memory,
}

impl ChannelStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Webkit => "webkit",
            Self::Stub => "stub",
            Self::Memory => "memory",
        }
    }
}

/// Returns the compile-time selected channel strategy for the active build.
pub const fn selected_channel_strategy() -> ChannelStrategy {
    #[cfg(feature = "bridge-stub")]
    {
        ChannelStrategy::Stub
    }

    #[cfg(feature = "bridge-memory")]
    {
        ChannelStrategy::Memory
    }

    #[cfg(not(any(feature = "bridge-stub", feature = "bridge-memory")))]
    {
        ChannelStrategy::Webkit
    }
}

/// Returns the selected channel strategy as a stable string token.
pub fn channel_strategy_name() -> &'static str {
    selected_channel_strategy().as_str()
}

/// Adapter enum that erases the concrete channel behind [`MessageChannel`].
#[derive(Debug, Clone)]
pub enum MessageChannelAdapter {
    /// WebKit message-handler transport.
    Webkit(WebkitMessageChannel),
    /// No-op channel.
    Stub(NoopMessageChannel),
    /// Recording channel.
    Memory(MemoryMessageChannel),
}

impl MessageChannelAdapter {
    /// Returns the recording channel when the memory strategy is active.
    pub fn as_memory(&self) -> Option<&MemoryMessageChannel> {
        match self {
            Self::Memory(channel) => Some(channel),
            _ => None,
        }
    }
}

impl MessageChannel for MessageChannelAdapter {
    fn post_message(&self, envelope: &Envelope) -> Result<(), BridgeError> {
        match self {
            Self::Webkit(channel) => channel.post_message(envelope),
            Self::Stub(channel) => channel.post_message(envelope),
            Self::Memory(channel) => channel.post_message(envelope),
        }
    }
}

/// Builds the channel for the compile-time selected strategy.
pub fn message_channel(config: &BridgeConfig) -> MessageChannelAdapter {
    match selected_channel_strategy() {
        ChannelStrategy::Webkit => {
            MessageChannelAdapter::Webkit(WebkitMessageChannel::from_config(config))
        }
        ChannelStrategy::Stub => MessageChannelAdapter::Stub(NoopMessageChannel),
        ChannelStrategy::Memory => MessageChannelAdapter::Memory(MemoryMessageChannel::default()),
    }
}

/// Builds a dispatcher over the compile-time selected channel.
pub fn build_bridge(config: &BridgeConfig) -> AdjustBridge<MessageChannelAdapter> {
    tracing::debug!(
        strategy = channel_strategy_name(),
        handler = %config.handler_name,
        "adjust bridge: building dispatcher"
    );
    AdjustBridge::new(message_channel(config))
}

thread_local! {
    static SHARED_BRIDGE: AdjustBridge<MessageChannelAdapter> =
        build_bridge(&BridgeConfig::default());
}

/// Runs `op` against this thread's dispatcher, built once from [`BridgeConfig::default`].
///
/// Script exports go through this so a recording channel keeps its envelopes between calls.
pub fn with_shared_bridge<R>(op: impl FnOnce(&AdjustBridge<MessageChannelAdapter>) -> R) -> R {
    SHARED_BRIDGE.with(op)
}

/// Drains the envelopes recorded by the shared dispatcher.
///
/// Always empty unless the `bridge-memory` strategy is selected.
pub fn take_recorded_envelopes() -> Vec<Envelope> {
    with_shared_bridge(|bridge| {
        bridge
            .channel()
            .as_memory()
            .map(MemoryMessageChannel::take)
            .unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(any(feature = "bridge-stub", feature = "bridge-memory")))]
    #[test]
    fn default_build_selects_webkit_channel() {
        assert_eq!(selected_channel_strategy(), ChannelStrategy::Webkit);
        assert_eq!(channel_strategy_name(), "webkit");

        let bridge = build_bridge(&BridgeConfig::default());
        match bridge.channel() {
            MessageChannelAdapter::Webkit(channel) => assert_eq!(channel.handler_name(), "adjust"),
            other => panic!("unexpected adapter {other:?}"),
        }
        assert!(bridge.channel().as_memory().is_none());
    }

    #[cfg(not(any(feature = "bridge-stub", feature = "bridge-memory")))]
    #[test]
    fn shared_webkit_bridge_records_nothing() {
        let err = with_shared_bridge(AdjustBridge::gdpr_forget_me).expect_err("no handler");
        assert!(matches!(err, BridgeError::ChannelUnavailable { .. }));
        assert!(take_recorded_envelopes().is_empty());
    }

    #[cfg(feature = "bridge-memory")]
    #[test]
    fn shared_memory_bridge_keeps_envelopes_between_calls() {
        use adjust_bridge::Action;

        with_shared_bridge(AdjustBridge::gdpr_forget_me).expect("first call");
        with_shared_bridge(|bridge| bridge.track_deeplink("app://open")).expect("second call");

        let actions: Vec<Action> = take_recorded_envelopes()
            .iter()
            .map(Envelope::action)
            .collect();
        assert_eq!(actions, vec![Action::GdprForgetMe, Action::TrackDeeplink]);
        assert!(take_recorded_envelopes().is_empty());
    }

    #[test]
    fn adapter_forwards_to_wrapped_channel() {
        let recorder = MemoryMessageChannel::default();
        let bridge = AdjustBridge::new(MessageChannelAdapter::Memory(recorder.clone()));
        bridge
            .add_global_partner_parameter("sku", "gold-pack")
            .expect("memory post");
        bridge.gdpr_forget_me().expect("memory post");

        assert_eq!(recorder.len(), 2);
        assert_eq!(
            bridge.channel().as_memory().map(MemoryMessageChannel::len),
            Some(2)
        );

        AdjustBridge::new(MessageChannelAdapter::Stub(NoopMessageChannel))
            .reactivate_sdk()
            .expect("stub post");
    }
}

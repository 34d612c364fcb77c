#![cfg(not(target_arch = "wasm32"))]

use adjust_bridge::{
    AdjustBridge, AdjustConfig, AdjustEnvironment, BridgeError, ValidatingChannel,
    ValidationError,
};
use adjust_bridge_web::{BridgeConfig, WebkitMessageChannel};

#[test]
fn every_operation_reports_the_missing_handler() {
    let bridge = AdjustBridge::new(WebkitMessageChannel::from_config(&BridgeConfig::default()));

    let results = [
        bridge.init_sdk(&AdjustConfig::new("token", AdjustEnvironment::Sandbox)),
        bridge.track_deeplink("https://example.com/x"),
        bridge.add_global_callback_parameter("k", "v"),
        bridge.remove_global_partner_parameter("k"),
        bridge.switch_to_online_mode(),
    ];

    for result in results {
        assert!(matches!(
            result,
            Err(BridgeError::ChannelUnavailable { ref handler, .. }) if handler == "adjust"
        ));
    }
}

#[test]
fn validation_runs_before_the_transport() {
    let bridge = AdjustBridge::new(ValidatingChannel::new(WebkitMessageChannel::default()));

    let err = bridge
        .track_push_token("")
        .expect_err("empty token is rejected");
    assert!(matches!(
        err,
        BridgeError::Validation(ValidationError::EmptyString { field: "data", .. })
    ));

    // A valid envelope gets past validation and then hits the missing handler.
    let err = bridge
        .track_push_token("f00d")
        .expect_err("no handler outside wasm32");
    assert!(matches!(err, BridgeError::ChannelUnavailable { .. }));
}

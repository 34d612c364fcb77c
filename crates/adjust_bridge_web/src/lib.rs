//! WebKit transport and script exports for the [`adjust_bridge`] contract.
//!
//! This crate is the concrete webview-side wiring: a [`WebkitMessageChannel`] posting envelopes
//! to `window.webkit.messageHandlers`, compile-time channel strategy selection in [`adapters`],
//! and (on `wasm32`) the script-callable `Adjust` operations in `exports`.
//!
//! Transport bindings live under `bridge/`:
//! - `bridge::interop` (wasm32 / non-wasm split)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time channel strategy selection and adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
#[cfg(target_arch = "wasm32")]
pub mod exports;
pub mod webkit;

pub use adapters::{
    build_bridge, channel_strategy_name, message_channel, selected_channel_strategy,
    take_recorded_envelopes, with_shared_bridge, ChannelStrategy, MessageChannelAdapter,
};
pub use webkit::{BridgeConfig, WebkitMessageChannel, DEFAULT_HANDLER_NAME};

//! This module defines the error types used by the `nav2d-bridge` binary.

/// Error type for bridge setup and runtime.
#[derive(Debug, PartialEq)]
pub enum BridgeError {
    /// Error for an unusable configuration value.
    /// This variant is returned by `BridgeConfig::validate`.
    InvalidConfig(&'static str),
    /// Error for a channel with nobody on the other end.
    /// This variant is returned when publishing to a topic without subscribers.
    ChannelClosed(&'static str),
}

impl core::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BridgeError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            BridgeError::ChannelClosed(msg) => write!(f, "Channel closed: {}", msg),
        }
    }
}

impl core::error::Error for BridgeError {}

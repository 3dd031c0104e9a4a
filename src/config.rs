use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use nav2d_conversions::{Pose2D, Twist2D};
use serde::Deserialize;
use tracing::{error, info};

use crate::error::BridgeError;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Settings for the demo bridge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BridgeConfig {
    /// Frame id stamped on every replayed waypoint and on the planned path.
    pub frame_id: String,
    /// Replay rate for the waypoint stream (Hz).
    #[serde(default = "default_publish_rate_hz")]
    pub publish_rate_hz: f64,
    /// Planar waypoints, in trajectory order.
    #[serde(default)]
    pub waypoints: Vec<Pose2D>,
    /// Planar velocity command to lift and report.
    #[serde(default)]
    pub cmd_vel: Twist2D,
}

fn default_publish_rate_hz() -> f64 {
    10.0
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.frame_id.is_empty() {
            return Err(BridgeError::InvalidConfig("frame_id must not be empty"));
        }
        self.publish_period()?;
        Ok(())
    }

    /// Interval between replayed waypoints, derived from `publish_rate_hz`.
    pub fn publish_period(&self) -> Result<Duration, BridgeError> {
        if !self.publish_rate_hz.is_finite() || self.publish_rate_hz <= 0.0 {
            return Err(BridgeError::InvalidConfig(
                "publish_rate_hz must be positive and finite",
            ));
        }
        Duration::try_from_secs_f64(1.0 / self.publish_rate_hz).map_err(|_| {
            BridgeError::InvalidConfig("publish_rate_hz is too small for a replay period")
        })
    }
}

/// Load the bridge configuration from `path`, overlaid by `NAV2D__*` environment variables.
pub fn load_config(path: &str) -> Result<BridgeConfig, ConfigError> {
    info!("Attempting to load configuration from {}", path);

    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(true))
        .add_source(Environment::with_prefix("NAV2D").separator("__"))
        .build()
        .and_then(|config| config.try_deserialize::<BridgeConfig>());

    match settings {
        Ok(config) => {
            info!(
                frame_id = %config.frame_id,
                waypoints = config.waypoints.len(),
                publish_rate_hz = config.publish_rate_hz,
                "Successfully loaded configuration"
            );
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

use ackermann_kinematics::{AckermannGeometry, KinematicsError};
use ackermann_state::HeadingMode;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "REPLAY";

/// Vehicle dimensions for one playback session.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleSettings {
    pub wheelbase: f64,
    pub track_width: f64,
    /// Footprint handed to renderers along with each pose.
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackSettings {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    /// Sleep `step` seconds between frames.
    #[serde(default)]
    pub realtime: bool,
    #[serde(default)]
    pub heading: HeadingMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub vehicle: VehicleSettings,
    pub playback: PlaybackSettings,
}

impl Settings {
    pub fn geometry(&self) -> Result<AckermannGeometry, KinematicsError> {
        AckermannGeometry::new(self.vehicle.wheelbase, self.vehicle.track_width)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let p = &self.playback;
        for (name, value) in [("start", p.start), ("end", p.end), ("step", p.step)] {
            if !value.is_finite() {
                return Err(ConfigError::Message(format!("playback.{name} must be finite, got {value}")));
            }
        }
        if !(p.step > 0.0) {
            return Err(ConfigError::Message(format!("playback.step must be positive, got {}", p.step)));
        }
        if !(p.end >= p.start) {
            return Err(ConfigError::Message(format!(
                "playback.end ({}) must not precede playback.start ({})",
                p.end, p.start
            )));
        }
        Ok(self)
    }
}

/// Loads `config/default.toml`, then applies `REPLAY_*` environment overrides
/// (e.g. `REPLAY_PLAYBACK__STEP=0.5`).
pub fn load_config() -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let settings = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(|config| config.try_deserialize::<Settings>())
        .and_then(Settings::validate);

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
fn parse(toml: &str) -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize::<Settings>()?
        .validate()
}

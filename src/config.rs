//! Game configuration
//!
//! Tuning values for the window, player physics, scene rules and the flight
//! practice variant. Everything has a default, so the game runs without a
//! config file; a JSON file can override any subset of fields.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that points at an explicit config file
pub const CONFIG_ENV_VAR: &str = "WILD_ADVENTURE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub rules: RulesConfig,
    pub flight: FlightConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "William's Wild Adventure".to_string(),
            width: 800,
            height: 600,
            fps: 60,
        }
    }
}

impl WindowConfig {
    /// Fixed simulation step in seconds
    pub fn frame_seconds(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }
}

/// Player movement constants (per-frame units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub jump_velocity: f32,
    pub fly_velocity: f32,
    pub move_speed: f32,
    /// Horizontal velocity multiplier applied every frame
    pub friction: f32,
    /// Horizontal speeds below this snap to zero
    pub velocity_epsilon: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            gravity: 0.5,
            max_fall_speed: 10.0,
            jump_velocity: -12.0,
            fly_velocity: -6.0,
            move_speed: 5.0,
            friction: 0.9,
            velocity_epsilon: 0.1,
        }
    }
}

/// Scene completion thresholds and damage values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Seconds between a scene's completion and its forward transition
    pub settle_delay: f32,
    pub snake_survival_seconds: f32,
    pub larvae_needed: usize,
    pub flowers_needed: usize,
    pub fall_damage: i32,
    pub snake_damage: i32,
    pub snake_knockback: f32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            settle_delay: 3.0,
            snake_survival_seconds: 15.0,
            larvae_needed: 2,
            flowers_needed: 3,
            fall_damage: 25,
            snake_damage: 10,
            snake_knockback: 30.0,
        }
    }
}

/// Flight practice tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub gravity: f32,
    pub flap_strength: f32,
    /// Landings slower than this (absolute) are safe
    pub safe_landing_speed: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub branch_width: f32,
    pub branch_height: f32,
    pub branch_margin: f32,
    pub branch_min_y: f32,
    pub branch_max_y: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        FlightConfig {
            gravity: 0.5,
            flap_strength: -10.0,
            safe_landing_speed: 5.0,
            bird_width: 60.0,
            bird_height: 45.0,
            branch_width: 200.0,
            branch_height: 40.0,
            branch_margin: 50.0,
            branch_min_y: 200.0,
            branch_max_y: 400.0,
        }
    }
}

impl GameConfig {
    /// Loads a config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate().map_err(|reason| GameError::ConfigInvalid {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(config)
    }

    /// Rejects values that parse but cannot be simulated
    pub fn validate(&self) -> Result<(), String> {
        let flight = &self.flight;
        if !flight.branch_min_y.is_finite() || !flight.branch_max_y.is_finite() {
            return Err("flight branch height range must be finite".to_string());
        }
        if flight.branch_min_y > flight.branch_max_y {
            return Err(format!(
                "flight.branch_min_y ({}) is greater than flight.branch_max_y ({})",
                flight.branch_min_y, flight.branch_max_y
            ));
        }
        Ok(())
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Where the config file is looked up when no override is given
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wild_adventure").join("config.json"))
    }

    /// Loads the config from `WILD_ADVENTURE_CONFIG` or the default location.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read or parsed is an error.
    pub fn load_or_default() -> Result<Self, GameError> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .or_else(Self::default_path);

        match path {
            Some(path) if path.exists() => {
                let config = Self::load_from_file(&path)?;
                tracing::info!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Some(path) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}

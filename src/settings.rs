//! Game settings
//!
//! Loaded from an optional JSON file; every field falls back to its default
//! so a config only needs the values it changes.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_SIZE;
use crate::sim::{BallConfig, FieldConfig, PlayerAiConfig, TimingConfig};

/// Errors raised while loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Scripted opponents and where they line up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Footprint side length
    pub size: f32,
    /// Kickoff spots, also the spots players return to after a stoppage
    pub positions: Vec<Vec2>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            size: PLAYER_SIZE,
            positions: vec![
                Vec2::new(85.0, 70.0),
                Vec2::new(-85.0, 70.0),
                Vec2::new(180.0, 150.0),
                Vec2::new(0.0, 150.0),
                Vec2::new(-180.0, 150.0),
                Vec2::new(85.0, 240.0),
                Vec2::new(0.0, 240.0),
                Vec2::new(-85.0, 240.0),
            ],
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub field: FieldConfig,
    pub ball: BallConfig,
    pub timing: TimingConfig,
    pub ai: PlayerAiConfig,
    pub players: RosterConfig,
    /// Seed for player jitter
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            ball: BallConfig::default(),
            timing: TimingConfig::default(),
            ai: PlayerAiConfig::default(),
            players: RosterConfig::default(),
            seed: 0x5eed,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("field.size_factor", self.field.size_factor)?;
        non_negative("field.tolerance", self.field.tolerance)?;
        non_negative("field.post_offset", self.field.post_offset)?;
        non_negative("field.outer_depth", self.field.outer_depth)?;

        positive("ball.radius", self.ball.radius)?;
        positive("ball.speed", self.ball.speed)?;
        finite("ball.spin_x", self.ball.spin_x)?;
        finite("ball.spin_y", self.ball.spin_y)?;

        non_negative("timing.pause_secs", self.timing.pause_secs)?;
        non_negative("timing.overlay_secs", self.timing.overlay_secs)?;
        non_negative("timing.goal_banner_secs", self.timing.goal_banner_secs)?;

        if !(0.0..=1.0).contains(&self.ai.approach_rate) {
            return Err(invalid("ai.approach_rate", "must be within 0..=1"));
        }
        finite("ai.pull", self.ai.pull)?;
        non_negative("ai.jitter", self.ai.jitter)?;

        positive("players.size", self.players.size)?;
        if !self.players.positions.iter().all(|p| p.is_finite()) {
            return Err(invalid("players.positions", "must be finite"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be finite"))
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: format!("must be positive, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), SettingsError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: format!("must not be negative, got {value}"),
        })
    }
}

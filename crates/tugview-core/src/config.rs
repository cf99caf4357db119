use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pull: PullConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pull: PullConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullConfig {
    /// Pull distance (layout units) required before a release triggers a refresh
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl PullConfig {
    /// Reject non-positive thresholds; nothing else can be invalid here
    pub fn validate(&self) -> crate::Result<()> {
        if self.threshold <= 0.0 {
            return Err(crate::Error::Config(format!(
                "pull.threshold must be positive, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// How many layout units one terminal row is worth when converting a drag
    #[serde(default = "default_units_per_row")]
    pub units_per_row: f64,
    /// Spring-back animation after the pull is released
    #[serde(default)]
    pub spring: SpringConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            units_per_row: default_units_per_row(),
            spring: SpringConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Animate the view back to rest instead of snapping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Spring-back duration in milliseconds
    #[serde(default = "default_spring_duration")]
    pub duration_ms: u64,
    /// Easing curve for the spring-back
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Frame rate while the spring-back is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u8,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            duration_ms: default_spring_duration(),
            easing: default_easing(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Easing curve applied to the spring-back animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

fn default_threshold() -> f64 {
    110.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_units_per_row() -> f64 {
    10.0
}

fn default_true() -> bool {
    true
}

fn default_spring_duration() -> u64 {
    250
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_animation_fps() -> u8 {
    60
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        let config: Self = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/tugview/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("tugview")
            .join("config.toml")
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.pull.validate()?;
        if self.ui.units_per_row <= 0.0 {
            return Err(crate::Error::Config(format!(
                "ui.units_per_row must be positive, got {}",
                self.ui.units_per_row
            )));
        }
        Ok(())
    }
}

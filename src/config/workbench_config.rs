//! Workbench Configuration — presentation-facing knobs as operator-tunable TOML
//!
//! The core model is fixed; what varies between deployments is the input
//! surface the UI offers (slider bounds and step, checkbox polarity, percent
//! rounding) plus the server address. Each struct implements `Default` with
//! values matching the original calculator (slider 1–100 step 1 start 50,
//! whole-percent readout), ensuring zero-change behavior when no config
//! file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::types::RiskParameter;

/// Root configuration for a workbench deployment.
///
/// Load with `WorkbenchConfig::load()` which searches:
/// 1. `$GPOS_CONFIG` env var
/// 2. `./gpos_workbench.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkbenchConfig {
    /// Prospect identification
    #[serde(default)]
    pub prospect: ProspectInfo,

    /// Slider bounds, step, and initial value
    #[serde(default)]
    pub sliders: SlidersConfig,

    /// Enable-checkbox polarity
    #[serde(default)]
    pub toggles: TogglesConfig,

    /// Result display formatting
    #[serde(default)]
    pub display: DisplayConfig,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Prospect / project identification shown in the dashboard header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProspectInfo {
    #[serde(default = "default_prospect_name")]
    pub name: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub operator: String,
}

fn default_prospect_name() -> String {
    "Unnamed Prospect".to_string()
}

impl Default for ProspectInfo {
    fn default() -> Self {
        Self {
            name: default_prospect_name(),
            field: String::new(),
            operator: String::new(),
        }
    }
}

/// Bounds for one probability slider. Raw values are integer percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SliderConfig {
    /// Lowest selectable percent (0 or 1 in observed deployments)
    #[serde(default = "default_slider_min")]
    pub min: u8,
    /// Highest selectable percent (always 100)
    #[serde(default = "default_slider_max")]
    pub max: u8,
    /// Slider step in percent (1 or 10)
    #[serde(default = "default_slider_step")]
    pub step: u8,
    /// Starting value before the user touches the slider
    #[serde(default = "default_slider_initial")]
    pub initial: u8,
}

fn default_slider_min() -> u8 {
    1
}

fn default_slider_max() -> u8 {
    100
}

fn default_slider_step() -> u8 {
    1
}

fn default_slider_initial() -> u8 {
    50
}

impl Default for SliderConfig {
    fn default() -> Self {
        // Original calculator: 1-100 %, step 1, starting at 50
        Self {
            min: default_slider_min(),
            max: default_slider_max(),
            step: default_slider_step(),
            initial: default_slider_initial(),
        }
    }
}

impl SliderConfig {
    /// Whether a raw slider value is acceptable under these bounds.
    pub fn accepts(&self, raw: u8) -> bool {
        (self.min..=self.max).contains(&raw)
    }
}

/// Slider bounds shared by all parameters, with optional per-parameter
/// overrides (`[sliders.presence]` etc.).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SlidersConfig {
    #[serde(flatten)]
    pub base: SliderConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<SliderConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permeability: Option<SliderConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid: Option<SliderConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<SliderConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connectivity: Option<SliderConfig>,
}

impl SlidersConfig {
    /// Effective slider bounds for one parameter.
    pub fn for_parameter(&self, parameter: RiskParameter) -> SliderConfig {
        let overridden = match parameter {
            RiskParameter::Presence => self.presence,
            RiskParameter::Permeability => self.permeability,
            RiskParameter::Fluid => self.fluid,
            RiskParameter::Temperature => self.temperature,
            RiskParameter::Connectivity => self.connectivity,
        };
        overridden.unwrap_or(self.base)
    }

    /// Iterate every configured slider (base plus overrides) for validation.
    pub fn all_effective(&self) -> impl Iterator<Item = (RiskParameter, SliderConfig)> + '_ {
        RiskParameter::ALL.iter().map(|&p| (p, self.for_parameter(p)))
    }
}

/// Polarity of the per-parameter enable checkbox.
///
/// The historical variants disagree on whether a checked box includes or
/// excludes the parameter from the product; the shipped default is
/// "checked means included" and the inverse is a config knob rather than a
/// code change. The core's `enabled` flag always means "participates" —
/// polarity is applied once at the API boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TogglesConfig {
    #[serde(default = "default_true")]
    pub checked_means_included: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TogglesConfig {
    fn default() -> Self {
        Self {
            checked_means_included: true,
        }
    }
}

/// Result display formatting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places in the percent readout (original rounds to whole percent)
    #[serde(default)]
    pub percent_decimals: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { percent_decimals: 0 }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
        }
    }
}

/// Errors from loading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

impl WorkbenchConfig {
    /// Load configuration using the standard search order:
    /// 1. `$GPOS_CONFIG` environment variable
    /// 2. `./gpos_workbench.toml` in the current working directory
    /// 3. Built-in defaults (original calculator values)
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("GPOS_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), prospect = %config.prospect.name, "Loaded config from GPOS_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from GPOS_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "GPOS_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("gpos_workbench.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(prospect = %config.prospect.name, "Loaded config from ./gpos_workbench.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./gpos_workbench.toml, using defaults");
                }
            }
        }

        info!("No gpos_workbench.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    ///
    /// Warns about unknown keys (with suggestions) before deserializing, so
    /// typos surface in the log instead of silently falling back to defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;

        for warning in super::validation::validate_unknown_keys(&raw) {
            warn!(field = %warning.field, "{warning}");
        }

        let config: Self = toml::from_str(&raw)?;
        Ok(config)
    }
}

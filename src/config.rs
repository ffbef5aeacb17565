//! Calculator configuration
//!
//! ```toml
//! contact_counts = [2, 3, 4]
//!
//! [defaults]
//! mass = { value = 2.0, unit = "kg" }
//! gravity = { value = 9.81, unit = "m/s²" }
//! safety_factor = 2.0
//! contact_count = 2
//! friction = { preset = "Steel on steel" }
//! com_offset = { value = 20.0, unit = "mm" }
//! friction_arm = { value = 10.0, unit = "mm" }
//!
//! [[presets]]
//! name = "Steel on steel"
//! coefficient = 0.15
//! ```
//!
//! Without `presets` or `preset_file` the standard preset table is used.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::calculator::{CalculatorError, DEFAULT_CONTACT_COUNTS};
use crate::friction::{
    validate_table, FrictionPreset, FrictionPresetTable, FrictionSelection, PresetError,
    PresetLibrary,
};
use crate::physics::grip::GripRequirementInput;
use crate::types::*;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWriteError(#[from] toml::ser::Error),

    #[error("Unit error: {0}")]
    UnitError(#[from] UnitError),

    #[error("Preset error: {0}")]
    PresetError(#[from] PresetError),

    #[error("Invalid defaults: {0}")]
    InvalidDefaults(#[from] CalculatorError),
}

/// Top-level calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Contact counts a form offers; empty allows any count ≥ 1
    pub contact_counts: Vec<u32>,

    /// Values a new calculation starts from
    pub defaults: InputDefaults,

    /// Inline preset table, in display order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<FrictionPreset>,

    /// Preset table file (TOML or JSON), relative to the config file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_file: Option<PathBuf>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            contact_counts: DEFAULT_CONTACT_COUNTS.to_vec(),
            defaults: InputDefaults::default(),
            presets: Vec::new(),
            preset_file: None,
        }
    }
}

/// Default input values, each tagged with its unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub mass: MassValue,
    pub gravity: AccelerationValue,
    pub vertical_acceleration: AccelerationValue,
    pub safety_factor: f64,
    pub contact_count: u32,
    pub friction: FrictionSelection,
    pub consider_moment: bool,
    pub com_offset: LengthValue,
    pub friction_arm: LengthValue,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            mass: MassValue::new(2.0, "kg"),
            gravity: AccelerationValue::new(STANDARD_GRAVITY, "m/s²"),
            vertical_acceleration: AccelerationValue::new(0.0, "m/s²"),
            safety_factor: 2.0,
            contact_count: 2,
            friction: FrictionSelection::preset("Steel on steel"),
            consider_moment: false,
            com_offset: LengthValue::new(20.0, "mm"),
            friction_arm: LengthValue::new(10.0, "mm"),
        }
    }
}

impl InputDefaults {
    /// Convert to a calculation input using an already resolved μ
    pub fn to_input(&self, friction_coefficient: f64) -> Result<GripRequirementInput, ConfigError> {
        Ok(GripRequirementInput {
            mass: self.mass.to_mass()?,
            gravity: self.gravity.to_acceleration()?,
            vertical_acceleration: self.vertical_acceleration.to_acceleration()?,
            safety_factor: self.safety_factor,
            contact_count: self.contact_count,
            friction_coefficient,
            consider_moment: self.consider_moment,
            com_offset: self.com_offset.to_length()?,
            friction_arm: self.friction_arm.to_length()?,
        })
    }
}

impl CalculatorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file; a relative `preset_file` is resolved against its directory
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = Self::from_toml_str(&fs::read_to_string(path)?)?;

        if let (Some(file), Some(dir)) = (config.preset_file.as_mut(), path.parent()) {
            if file.is_relative() {
                *file = dir.join(&*file);
            }
        }

        info!(file = %path.display(), "Loaded calculator config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Preset table in effect: preset file, then inline presets, then standard
    pub fn preset_table(&self) -> Result<FrictionPresetTable, ConfigError> {
        if let Some(file) = &self.preset_file {
            let mut library = PresetLibrary::default();
            let name = library.load_table_from_file(file)?;
            return Ok(library.require_table(&name)?.clone());
        }

        if self.presets.is_empty() {
            return Ok(FrictionPresetTable::standard());
        }

        let mut table = FrictionPresetTable::new("config");
        for preset in &self.presets {
            table.insert(preset.clone());
        }
        validate_table(&table)?;
        Ok(table)
    }
}

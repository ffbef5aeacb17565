//! Configured force requirement calculator
//!
//! One calculator serves every front end: the friction preset table and the
//! allowed contact counts are injected instead of hard-coded per layout.

use tracing::debug;

use crate::config::{CalculatorConfig, ConfigError};
use crate::friction::{FrictionPresetTable, FrictionSelection};
use crate::physics::grip::{self, GripError, GripRequirementInput, GripRequirementResult};

/// Contact counts offered when none are configured
pub const DEFAULT_CONTACT_COUNTS: [u32; 3] = [2, 3, 4];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatorError {
    #[error("Unknown friction preset: {0}")]
    UnknownPreset(String),

    #[error("Custom friction coefficient must be finite and non-negative, got {0}")]
    InvalidCustomCoefficient(f64),

    #[error("{count} contacts not allowed (allowed: {allowed:?})")]
    ContactCountNotAllowed { count: u32, allowed: Vec<u32> },

    #[error(transparent)]
    Grip(#[from] GripError),
}

/// Grip force calculator with an injectable preset table
#[derive(Debug, Clone)]
pub struct ForceRequirementCalculator {
    presets: FrictionPresetTable,
    contact_counts: Vec<u32>,
    defaults: GripRequirementInput,
}

impl ForceRequirementCalculator {
    pub fn new(presets: FrictionPresetTable, contact_counts: impl Into<Vec<u32>>) -> Self {
        let mut contact_counts = contact_counts.into();
        contact_counts.sort_unstable();
        contact_counts.dedup();

        let mut defaults = GripRequirementInput::default();
        if let Some(first) = presets.first() {
            defaults.friction_coefficient = first.coefficient;
        }
        if let Some(&fewest) = contact_counts.first() {
            defaults.contact_count = fewest;
        }

        Self {
            presets,
            contact_counts,
            defaults,
        }
    }

    /// Standard preset table with 2, 3 or 4 contacts
    pub fn standard() -> Self {
        Self::new(FrictionPresetTable::standard(), DEFAULT_CONTACT_COUNTS)
    }

    /// Build from a loaded configuration, checking its defaults
    pub fn from_config(config: &CalculatorConfig) -> Result<Self, ConfigError> {
        let mut calculator = Self::new(config.preset_table()?, config.contact_counts.clone());

        let coefficient = calculator.resolve_friction(&config.defaults.friction)?;
        let defaults = config.defaults.to_input(coefficient)?;
        calculator.check_contact_count(defaults.contact_count)?;
        defaults.validate().map_err(CalculatorError::from)?;

        calculator.defaults = defaults;
        Ok(calculator)
    }

    pub fn presets(&self) -> &FrictionPresetTable {
        &self.presets
    }

    pub fn contact_counts(&self) -> &[u32] {
        &self.contact_counts
    }

    /// Input a form should start from
    pub fn default_input(&self) -> GripRequirementInput {
        self.defaults.clone()
    }

    /// Friction coefficient for a preset name or custom value
    ///
    /// A custom coefficient of zero is accepted and leads to the
    /// unsatisfiable result.
    pub fn resolve_friction(&self, selection: &FrictionSelection) -> Result<f64, CalculatorError> {
        match selection {
            FrictionSelection::Preset(name) => self
                .presets
                .get(name)
                .map(|p| p.coefficient)
                .ok_or_else(|| CalculatorError::UnknownPreset(name.clone())),
            FrictionSelection::Custom(mu) if mu.is_finite() && *mu >= 0.0 => Ok(*mu),
            FrictionSelection::Custom(mu) => Err(CalculatorError::InvalidCustomCoefficient(*mu)),
        }
    }

    fn check_contact_count(&self, count: u32) -> Result<(), CalculatorError> {
        if self.contact_counts.is_empty() || self.contact_counts.contains(&count) {
            Ok(())
        } else {
            Err(CalculatorError::ContactCountNotAllowed {
                count,
                allowed: self.contact_counts.clone(),
            })
        }
    }

    /// Compute the requirement, enforcing the configured contact counts
    pub fn compute(&self, input: &GripRequirementInput) -> Result<GripRequirementResult, CalculatorError> {
        self.check_contact_count(input.contact_count)?;
        Ok(grip::compute(input)?)
    }

    /// Compute with the friction coefficient taken from `selection`
    pub fn compute_with(
        &self,
        input: &GripRequirementInput,
        selection: &FrictionSelection,
    ) -> Result<GripRequirementResult, CalculatorError> {
        let mu = self.resolve_friction(selection)?;
        debug!(?selection, mu, "Resolved friction coefficient");

        let input = input.clone().with_friction_coefficient(mu);
        self.compute(&input)
    }
}

impl Default for ForceRequirementCalculator {
    fn default() -> Self {
        Self::standard()
    }
}

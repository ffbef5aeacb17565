use serde::{Deserialize, Serialize};

/// Coefficient proposed for a custom material pair
pub const DEFAULT_CUSTOM_COEFFICIENT: f64 = 0.60;

/// A named pad/object material pair with a fixed friction coefficient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrictionPreset {
    /// Label shown to the user, e.g. "Steel on steel"
    pub name: String,

    /// Effective friction coefficient μ used in calculations
    pub coefficient: f64,

    /// Range of μ usually measured for this pair (min, max)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_range: Option<(f64, f64)>,
}

impl FrictionPreset {
    pub fn new(name: impl Into<String>, coefficient: f64) -> Self {
        Self {
            name: name.into(),
            coefficient,
            typical_range: None,
        }
    }

    pub fn with_typical_range(mut self, min: f64, max: f64) -> Self {
        self.typical_range = Some((min, max));
        self
    }

    /// A usable preset has a finite, strictly positive coefficient
    pub fn is_valid(&self) -> bool {
        self.coefficient.is_finite() && self.coefficient > 0.0
    }
}

/// How the friction coefficient is chosen for a calculation
///
/// In config files: `friction = { preset = "Steel on steel" }` or
/// `friction = { custom = 0.6 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionSelection {
    /// Look the coefficient up by preset name
    Preset(String),
    /// User-supplied coefficient
    Custom(f64),
}

impl FrictionSelection {
    pub fn preset(name: impl Into<String>) -> Self {
        Self::Preset(name.into())
    }

    pub fn custom() -> Self {
        Self::Custom(DEFAULT_CUSTOM_COEFFICIENT)
    }
}

/// Ordered table of friction presets
///
/// Order is the order presets were added in, which is the order a form
/// should list them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrictionPresetTable {
    /// Table name used as key when several tables are loaded
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    presets: Vec<FrictionPreset>,
}

impl FrictionPresetTable {
    /// Create a new empty table
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            presets: Vec::new(),
        }
    }

    /// Material pairs commonly found on industrial grippers
    pub fn standard() -> Self {
        let mut table = Self::new("standard");
        table.insert(FrictionPreset::new("Steel on steel", 0.15).with_typical_range(0.15, 0.25));
        table.insert(FrictionPreset::new("Aluminium on steel", 0.30));
        table.insert(
            FrictionPreset::new("Rubber on steel (knurled)", 0.80).with_typical_range(0.7, 0.9),
        );
        table.insert(
            FrictionPreset::new("Polyurethane on steel", 0.50).with_typical_range(0.4, 0.6),
        );
        table.insert(FrictionPreset::new("Sandpaper on steel", 1.00));
        table
    }

    /// Add a preset, replacing any preset with the same name in place
    ///
    /// Returns the replaced preset, if any.
    pub fn insert(&mut self, preset: FrictionPreset) -> Option<FrictionPreset> {
        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => Some(std::mem::replace(existing, preset)),
            None => {
                self.presets.push(preset);
                None
            }
        }
    }

    /// Get a preset by name
    pub fn get(&self, name: &str) -> Option<&FrictionPreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Remove a preset by name
    pub fn remove(&mut self, name: &str) -> Option<FrictionPreset> {
        let index = self.presets.iter().position(|p| p.name == name)?;
        Some(self.presets.remove(index))
    }

    /// Preset names in table order
    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrictionPreset> {
        self.presets.iter()
    }

    /// First preset of the table, the default selection of a form
    pub fn first(&self) -> Option<&FrictionPreset> {
        self.presets.first()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Names of presets with an unusable coefficient
    pub fn invalid_presets(&self) -> Vec<&str> {
        self.presets
            .iter()
            .filter(|p| !p.is_valid())
            .map(|p| p.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_table() {
        let table = FrictionPresetTable::standard();

        assert_eq!(table.len(), 5);
        assert_eq!(table.first().unwrap().name, "Steel on steel");
        assert_relative_eq!(table.get("Rubber on steel (knurled)").unwrap().coefficient, 0.8);
        assert_relative_eq!(table.get("Sandpaper on steel").unwrap().coefficient, 1.0);
        assert!(table.invalid_presets().is_empty());
    }

    #[test]
    fn test_insert_replaces_by_name_and_keeps_order() {
        let mut table = FrictionPresetTable::standard();
        let old = table.insert(FrictionPreset::new("Aluminium on steel", 0.35));

        assert_relative_eq!(old.unwrap().coefficient, 0.30);
        assert_eq!(table.names()[1], "Aluminium on steel");
        assert_relative_eq!(table.get("Aluminium on steel").unwrap().coefficient, 0.35);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_remove() {
        let mut table = FrictionPresetTable::standard();
        assert!(table.remove("Steel on steel").is_some());
        assert!(table.get("Steel on steel").is_none());
        assert!(table.remove("Steel on steel").is_none());
    }

    #[test]
    fn test_invalid_coefficient_detected() {
        let mut table = FrictionPresetTable::new("shop");
        table.insert(FrictionPreset::new("Teflon on glass", 0.0));
        assert_eq!(table.invalid_presets(), vec!["Teflon on glass"]);
    }

    #[test]
    fn test_custom_selection_default() {
        assert_eq!(FrictionSelection::custom(), FrictionSelection::Custom(0.60));
    }
}

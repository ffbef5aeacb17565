use crate::friction::presets::*;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Error types for preset library operations
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Preset table not found: {0}")]
    TableNotFound(String),

    #[error("Preset '{preset}' in table '{table}' has an unusable coefficient {coefficient}")]
    InvalidCoefficient {
        table: String,
        preset: String,
        coefficient: f64,
    },

    #[error("Unsupported preset file: {0}")]
    UnsupportedFormat(String),
}

/// Friction preset tables loaded from disk, keyed by table name
#[derive(Debug, Default)]
pub struct PresetLibrary {
    tables: HashMap<String, FrictionPresetTable>,

    /// Directory the tables were loaded from
    base_path: Option<PathBuf>,
}

impl PresetLibrary {
    /// Create a library holding only the standard table
    pub fn new() -> Self {
        let mut library = Self {
            tables: HashMap::new(),
            base_path: None,
        };
        library.add_table(FrictionPresetTable::standard());
        library
    }

    /// Create a library and load every preset file in a directory
    pub fn from_directory(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let mut library = Self::new();
        library.base_path = Some(path.as_ref().to_path_buf());
        library.load_all_from_directory(path)?;
        Ok(library)
    }

    /// Load all `.toml` and `.json` preset files from a directory
    ///
    /// Files that fail to parse or validate are skipped and logged.
    pub fn load_all_from_directory(&mut self, path: impl AsRef<Path>) -> Result<usize, PresetError> {
        let mut loaded = 0;

        for entry in fs::read_dir(path)? {
            let path = entry?.path();

            match path.extension().and_then(|s| s.to_str()) {
                Some("toml") | Some("json") => match self.load_table_from_file(&path) {
                    Ok(name) => {
                        info!(table = %name, file = %path.display(), "Loaded friction presets");
                        loaded += 1;
                    }
                    Err(e) => warn!(file = %path.display(), error = %e, "Skipped preset file"),
                },
                _ => {}
            }
        }
        Ok(loaded)
    }

    /// Load a preset table from a TOML or JSON file
    ///
    /// A table without a name is named after the file stem. Returns the
    /// key the table was stored under.
    pub fn load_table_from_file(&mut self, path: impl AsRef<Path>) -> Result<String, PresetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        let mut table: FrictionPresetTable = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&text)?,
            Some("json") => serde_json::from_str(&text)?,
            _ => return Err(PresetError::UnsupportedFormat(path.display().to_string())),
        };

        if table.name.is_empty() {
            table.name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
        }

        validate_table(&table)?;

        let name = table.name.clone();
        self.add_table(table);
        Ok(name)
    }

    /// Save a table as pretty JSON
    pub fn save_table_to_json(&self, name: &str, path: impl AsRef<Path>) -> Result<(), PresetError> {
        let table = self.require_table(name)?;
        let json = serde_json::to_string_pretty(table)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Add a table directly, replacing one with the same name
    pub fn add_table(&mut self, table: FrictionPresetTable) {
        self.tables.insert(table.name.clone(), table);
    }

    pub fn get_table(&self, name: &str) -> Option<&FrictionPresetTable> {
        self.tables.get(name)
    }

    /// Get a table or fail with [`PresetError::TableNotFound`]
    pub fn require_table(&self, name: &str) -> Result<&FrictionPresetTable, PresetError> {
        self.get_table(name)
            .ok_or_else(|| PresetError::TableNotFound(name.to_string()))
    }

    /// Table names, sorted
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn remove_table(&mut self, name: &str) -> Option<FrictionPresetTable> {
        self.tables.remove(name)
    }

    /// Directory the library was loaded from
    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

/// Reject tables containing presets with a zero, negative or non-finite μ
pub fn validate_table(table: &FrictionPresetTable) -> Result<(), PresetError> {
    match table.iter().find(|p| !p.is_valid()) {
        Some(bad) => Err(PresetError::InvalidCoefficient {
            table: table.name.clone(),
            preset: bad.name.clone(),
            coefficient: bad.coefficient,
        }),
        None => Ok(()),
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::naming::NamingStrategy;

/// Configuration file layout, e.g. `ormshape.toml`:
///
/// ```toml
/// [shape]
/// naming = "snake_case"
/// on_entity_error = "skip"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeConfig {
    #[serde(default)]
    pub shape: SynthesisOptions,
}

/// Knobs that change how synthesis resolves names and handles failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisOptions {
    /// Conversion applied to names that fall back to a declaration identifier
    #[serde(default)]
    pub naming: NamingStrategy,

    /// What to do when one entity fails to resolve
    #[serde(default)]
    pub on_entity_error: FailurePolicy,
}

/// Handling of a failure scoped to a single entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop the whole run and return the error.
    #[default]
    Abort,
    /// Drop the entity, record it in the report and keep going.
    Skip,
}

impl ShapeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse shape configuration")
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load configuration if the file exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() { Self::load(path) } else { Ok(Self::default()) }
    }
}

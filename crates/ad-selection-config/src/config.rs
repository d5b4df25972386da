// crates/ad-selection-config/src/config.rs
// ============================================================================
// Module: Ad Selection Configuration
// Description: Configuration loading and validation for ad selection.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: ad-selection-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section is optional; an empty file yields strict logic, stderr
//! auditing, and no catalog. Invalid configuration fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use ad_selection_core::FileAuditSink;
use ad_selection_core::LogicMode;
use ad_selection_core::NoopAuditSink;
use ad_selection_core::SelectionAuditSink;
use ad_selection_core::SelectorConfig;
use ad_selection_core::StderrAuditSink;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "ad-selection.toml";
/// Environment variable naming the configuration file.
pub(crate) const CONFIG_ENV_VAR: &str = "AD_SELECTION_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Ad selection configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdSelectionConfig {
    /// Selection behavior.
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Audit sink configuration.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Catalog fixture configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Path the configuration was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl AdSelectionConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        Self::load_resolved(&resolved)
    }

    /// Loads configuration, falling back to defaults when no source exists.
    ///
    /// Explicit paths and the environment variable must point at a readable
    /// file; only a missing default file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        let is_default = path.is_none() && env::var_os(CONFIG_ENV_VAR).is_none();
        if is_default && !resolved.exists() {
            return Ok(Self::default());
        }
        Self::load_resolved(&resolved)
    }

    /// Reads, parses, and validates a resolved configuration path.
    fn load_resolved(resolved: &Path) -> Result<Self, ConfigError> {
        validate_path(resolved)?;
        let bytes = fs::read(resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.source_path = Some(resolved.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.audit.validate()?;
        self.catalog.validate()?;
        Ok(())
    }

    /// Returns the selector configuration.
    #[must_use]
    pub const fn selector_config(&self) -> SelectorConfig {
        SelectorConfig {
            logic_mode: self.selection.logic_mode,
        }
    }

    /// Returns the catalog path, resolved against the config file directory.
    #[must_use]
    pub fn catalog_path(&self) -> Option<PathBuf> {
        Some(self.resolve_relative(self.catalog.path.as_deref()?))
    }

    /// Returns the audit log path, resolved against the config file directory.
    #[must_use]
    pub fn audit_path(&self) -> Option<PathBuf> {
        Some(self.resolve_relative(self.audit.path.as_deref()?))
    }

    /// Builds the configured audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file sink cannot be opened.
    pub fn audit_sink(&self) -> Result<Arc<dyn SelectionAuditSink>, ConfigError> {
        match self.audit.sink {
            AuditSinkKind::Stderr => Ok(Arc::new(StderrAuditSink)),
            AuditSinkKind::None => Ok(Arc::new(NoopAuditSink)),
            AuditSinkKind::File => {
                let path = self.audit_path().ok_or_else(|| {
                    ConfigError::Invalid("audit.path is required when audit.sink=file".to_string())
                })?;
                let sink = FileAuditSink::new(&path)
                    .map_err(|err| ConfigError::Io(format!("audit.path: {err}")))?;
                Ok(Arc::new(sink))
            }
        }
    }

    /// Resolves a configured path against the config file directory unless absolute.
    fn resolve_relative(&self, raw: &str) -> PathBuf {
        let raw = Path::new(raw.trim());
        if raw.is_absolute() {
            return raw.to_path_buf();
        }
        let base = self.source_path.as_deref().and_then(Path::parent);
        base.map_or_else(|| raw.to_path_buf(), |dir| dir.join(raw))
    }
}

/// Selection behavior configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SelectionConfig {
    /// Conjunction table used when combining predicate verdicts.
    #[serde(default)]
    pub logic_mode: LogicMode,
}

/// Audit sink kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// JSON lines on stderr.
    #[default]
    Stderr,
    /// JSON lines appended to `audit.path`.
    File,
    /// Auditing disabled.
    None,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    /// Sink receiving selection events.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Audit log path (JSON lines), required for the file sink.
    #[serde(default)]
    pub path: Option<String>,
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("audit.path", path)?;
        }
        if self.sink == AuditSinkKind::File && self.path.is_none() {
            return Err(ConfigError::Invalid(
                "audit.path is required when audit.sink=file".to_string(),
            ));
        }
        Ok(())
    }
}

/// Catalog fixture configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Optional catalog fixture path.
    #[serde(default)]
    pub path: Option<String>,
}

impl CatalogConfig {
    /// Validates catalog configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("catalog.path", path)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    check_path_limits(path).map_err(|reason| ConfigError::Invalid(format!("config {reason}")))
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    check_path_limits(Path::new(trimmed))
        .map_err(|reason| ConfigError::Invalid(format!("{field} {reason}")))
}

/// Checks total and per-component path lengths.
pub(crate) fn check_path_limits(path: &Path) -> Result<(), &'static str> {
    if path.to_string_lossy().len() > MAX_TOTAL_PATH_LENGTH {
        return Err("path exceeds max length");
    }
    for component in path.components() {
        if component.as_os_str().to_string_lossy().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err("path component too long");
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

//! Configuration management for aliasgen
//!
//! This module provides the configuration system that loads settings from
//! environment variables with sensible defaults. Configuration covers the
//! source tree layout (services, vendors, managers roots) and the output
//! artifact path.
//!
//! # Environment Variables
//!
//! - `ALIASGEN_SOURCE_ROOT`: root of the source tree - default: "src"
//! - `ALIASGEN_SERVICES_DIR`: abstract services directory under the root - default: "services"
//! - `ALIASGEN_VENDORS_DIR`: vendors directory under the root - default: "vendors"
//! - `ALIASGEN_MANAGERS_DIR`: managers directory under the root - default: "managers"
//! - `ALIASGEN_OUTPUT`: generated module path - default: "<source root>/index.js"
//! - `ALIASGEN_LOG_LEVEL`: logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use aliasgen::AliasgenConfig;
//!
//! let config = AliasgenConfig::default();
//! config.validate().expect("Invalid configuration");
//!
//! let vendor_root = config.vendor_root("desktop");
//! ```

use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default values for configuration
const DEFAULT_SOURCE_ROOT: &str = "src";
const DEFAULT_SERVICES_DIR: &str = "services";
const DEFAULT_VENDORS_DIR: &str = "vendors";
const DEFAULT_MANAGERS_DIR: &str = "managers";
const DEFAULT_OUTPUT_FILE: &str = "index.js";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Main configuration structure for aliasgen
///
/// Holds the source tree layout the generator scans and the path of the
/// aggregator module it writes. Constructed via `Default::default()`, which
/// loads from `ALIASGEN_*` environment variables with fallback defaults;
/// individual fields can then be overridden from CLI flags.
#[derive(Debug, Clone)]
pub struct AliasgenConfig {
    /// Root of the source tree; discovered candidate paths and the emitted
    /// import paths are all relative to this directory
    pub source_root: PathBuf,

    /// Abstract services directory name under the source root
    pub services_dir: String,

    /// Vendors directory name under the source root; each profile owns
    /// `<vendors_dir>/<profile>/services`
    pub vendors_dir: String,

    /// Managers directory name under the source root
    pub managers_dir: String,

    /// Path of the generated aggregator module
    pub output: PathBuf,
}

impl Default for AliasgenConfig {
    /// Creates a new configuration by loading from environment variables with defaults
    fn default() -> Self {
        let source_root = env::var("ALIASGEN_SOURCE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SOURCE_ROOT));

        let services_dir =
            env::var("ALIASGEN_SERVICES_DIR").unwrap_or_else(|_| DEFAULT_SERVICES_DIR.to_string());
        let vendors_dir =
            env::var("ALIASGEN_VENDORS_DIR").unwrap_or_else(|_| DEFAULT_VENDORS_DIR.to_string());
        let managers_dir =
            env::var("ALIASGEN_MANAGERS_DIR").unwrap_or_else(|_| DEFAULT_MANAGERS_DIR.to_string());

        let output = env::var("ALIASGEN_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| source_root.join(DEFAULT_OUTPUT_FILE));

        Self {
            source_root,
            services_dir,
            vendors_dir,
            managers_dir,
            output,
        }
    }
}

impl AliasgenConfig {
    /// Root directory holding the abstract service definitions
    pub fn services_root(&self) -> PathBuf {
        self.source_root.join(&self.services_dir)
    }

    /// Root directory holding the vendor overrides for `profile`
    pub fn vendor_root(&self, profile: &str) -> PathBuf {
        self.source_root
            .join(&self.vendors_dir)
            .join(profile)
            .join("services")
    }

    /// Root directory holding the always-included manager modules
    pub fn managers_root(&self) -> PathBuf {
        self.source_root.join(&self.managers_dir)
    }

    /// Validates the configuration
    ///
    /// Checks that directory names are non-empty path segments and that the
    /// output path has a file name. The source root is not required to exist
    /// here - a missing tree is treated as "zero candidates" at discovery
    /// time, not as a configuration error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any validation fails
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_root.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Source root must not be empty".to_string(),
            ));
        }

        for (name, value) in [
            ("services", &self.services_dir),
            ("vendors", &self.vendors_dir),
            ("managers", &self.managers_dir),
        ] {
            if value.is_empty() {
                return Err(ConfigError::ValidationFailed(format!(
                    "{} directory name must not be empty",
                    name
                )));
            }
            if Path::new(value).components().count() != 1 {
                return Err(ConfigError::ValidationFailed(format!(
                    "{} directory name must be a single path segment, got: {}",
                    name, value
                )));
            }
        }

        if self.output.file_name().is_none() {
            return Err(ConfigError::ValidationFailed(format!(
                "Output path has no file name: {}",
                self.output.display()
            )));
        }

        Ok(())
    }
}

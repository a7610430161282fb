//! aliasgen - build-time service locator generator for multi-vendor clients
//!
//! This library resolves, for a given deployment profile, which concrete
//! service implementation backs each logical service alias, and emits a
//! single aggregator module that instantiates and exports one instance per
//! alias. Application code depends only on stable aliases (for example
//! `volumeService`) while the concrete class behind each alias varies per
//! build profile.
//!
//! # Core Concepts
//!
//! - **Alias**: stable logical name application code uses to reference a
//!   service, independent of which concrete class backs it
//! - **Profile**: a named deployment/vendor target selecting which concrete
//!   implementations are bound
//! - **Vendor override**: a profile-specific implementation that takes
//!   precedence over the abstract definition sharing its alias
//! - **Manager**: a module always included regardless of profile
//!
//! # Example Usage
//!
//! ```ignore
//! use aliasgen::config::AliasgenConfig;
//! use aliasgen::generator::Generator;
//!
//! async fn generate(profile: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AliasgenConfig::default();
//!     config.validate()?;
//!
//!     let generator = Generator::new(config);
//!     let report = generator.run(profile).await?;
//!
//!     println!("resolved {} aliases", report.bindings.len());
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`locator`]: candidate discovery across service/vendor/manager trees
//! - [`extractor`]: alias/class metadata extraction from doc blocks
//! - [`resolver`]: origin-priority alias resolution
//! - [`tracker`]: completion barrier over fan-out extraction
//! - [`emitter`]: deterministic aggregator module emission

// Public modules
pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod extractor;
pub mod generator;
pub mod locator;
pub mod resolver;
pub mod tracker;

// Re-export key types for convenient access
pub use config::{AliasgenConfig, ConfigError};
pub use emitter::Emitter;
pub use error::{EmitError, ExtractError, GenerateError};
pub use extractor::ServiceMetadata;
pub use generator::{GenerationReport, Generator};
pub use locator::{CandidateSet, Origin, ServiceCandidate};
pub use resolver::{GenerationState, ResolvedBinding};
pub use tracker::CompletionTracker;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_aliasgen() {
        assert_eq!(NAME, "aliasgen");
    }
}

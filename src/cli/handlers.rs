//! CLI command handler
//!
//! Builds the configuration from environment plus flags, runs the generator,
//! prints the report, and maps outcomes to exit codes: 0 on success, 1 when
//! no services were found for the profile, 2 on fatal errors.

use crate::cli::commands::{CliArgs, OutputFormatArg};
use crate::cli::output::{OutputFormat, ReportFormatter};
use crate::config::AliasgenConfig;
use crate::error::GenerateError;
use crate::generator::Generator;
use tracing::{error, warn};

/// Exit code for a successful generation
pub const EXIT_OK: i32 = 0;
/// Exit code when no services were discovered for the profile
pub const EXIT_NO_SERVICES: i32 = 1;
/// Exit code for fatal errors (invalid config, unwritable artifact)
pub const EXIT_FATAL: i32 = 2;

/// Handles the generate invocation, returning the process exit code
pub async fn handle_generate(args: &CliArgs) -> i32 {
    let config = config_from_args(args);
    if let Err(err) = config.validate() {
        error!("{}", err);
        return EXIT_FATAL;
    }

    let generator = Generator::new(config).with_dry_run(args.dry_run);
    match generator.run(&args.profile).await {
        Ok(report) => {
            let formatter = ReportFormatter::new(output_format(args.format));
            match formatter.format(&report) {
                Ok(text) => {
                    if !args.quiet {
                        println!("{}", text);
                    }
                    EXIT_OK
                }
                Err(err) => {
                    error!("Failed to format report: {:#}", err);
                    EXIT_FATAL
                }
            }
        }
        Err(GenerateError::NoServicesFound { profile }) => {
            warn!(
                "No services found for profile '{}' - check the profile name and the vendor tree",
                profile
            );
            EXIT_NO_SERVICES
        }
        Err(err) => {
            error!("Generation failed: {}", err);
            EXIT_FATAL
        }
    }
}

/// Applies CLI overrides on top of the environment-derived configuration
fn config_from_args(args: &CliArgs) -> AliasgenConfig {
    let mut config = AliasgenConfig::default();
    if let Some(source_root) = &args.source_root {
        // The default output lives under the source root, so it tracks an
        // overridden root unless the output was overridden too.
        if args.output.is_none() && std::env::var("ALIASGEN_OUTPUT").is_err() {
            config.output = source_root.join("index.js");
        }
        config.source_root = source_root.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    config
}

fn output_format(arg: OutputFormatArg) -> OutputFormat {
    match arg {
        OutputFormatArg::Human => OutputFormat::Human,
        OutputFormatArg::Json => OutputFormat::Json,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_source_root_override_moves_default_output() {
        let args = CliArgs::try_parse_from(["aliasgen", "desktop", "--source-root", "client/src"])
            .unwrap();
        let config = config_from_args(&args);
        assert_eq!(config.source_root, PathBuf::from("client/src"));
        assert_eq!(config.output, PathBuf::from("client/src/index.js"));
    }

    #[test]
    fn test_explicit_output_wins_over_source_root() {
        let args = CliArgs::try_parse_from([
            "aliasgen",
            "desktop",
            "--source-root",
            "client/src",
            "-o",
            "build/index.js",
        ])
        .unwrap();
        let config = config_from_args(&args);
        assert_eq!(config.output, PathBuf::from("build/index.js"));
    }
}

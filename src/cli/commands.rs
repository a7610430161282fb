use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Build-time service locator generator for multi-vendor client builds
#[derive(Parser, Debug)]
#[command(
    name = "aliasgen",
    about = "Build-time service locator generator for multi-vendor client builds",
    version,
    author,
    long_about = "aliasgen scans the abstract service tree, the profile's vendor override \
                  tree, and the managers tree, extracts alias metadata from each module's \
                  doc block, and generates the aggregator module binding every logical \
                  service alias to one concrete class for that profile.\n\n\
                  Examples:\n  \
                  aliasgen desktop\n  \
                  aliasgen mobile --source-root client/src\n  \
                  aliasgen desktop --dry-run --format json"
)]
pub struct CliArgs {
    #[arg(value_name = "PROFILE", help = "Deployment profile to generate for")]
    pub profile: String,

    #[arg(
        long,
        value_name = "DIR",
        help = "Root of the source tree (defaults to 'src', or ALIASGEN_SOURCE_ROOT)"
    )]
    pub source_root: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Path of the generated module (defaults to '<source root>/index.js')"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Report output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, help = "Resolve and report without writing the module")]
    pub dry_run: bool,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Human-readable formatted text
    Human,
    /// JSON format (machine-readable)
    Json,
}

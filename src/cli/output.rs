//! Report formatting for the CLI
//!
//! Formats a [`GenerationReport`] as human-readable text or JSON for stdout,
//! after the artifact itself has been written.

use anyhow::{Context, Result};

use crate::generator::GenerationReport;
use crate::locator::Origin;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable formatted text
    Human,
    /// JSON format (machine-readable)
    Json,
}

/// Formatter for generation reports
pub struct ReportFormatter {
    format: OutputFormat,
}

impl ReportFormatter {
    /// Creates a new formatter with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a generation report according to the configured format
    pub fn format(&self, report: &GenerationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("Failed to serialize report as JSON")
            }
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_human(&self, report: &GenerationReport) -> String {
        let mut out = String::new();

        out.push_str(&format!("Profile: {}\n", report.profile));
        out.push_str(&format!(
            "Output:  {} ({})\n",
            report.output.display(),
            if report.written { "written" } else { "dry run" }
        ));
        out.push_str(&format!(
            "Candidates: {} abstract, {} overrides, {} managers ({} skipped, {} failed)\n",
            report.abstract_defs, report.overrides, report.managers, report.skipped, report.failed
        ));

        out.push_str("\nResolved bindings:\n");
        for binding in &report.bindings {
            out.push_str(&format!(
                "  {} -> {} [{}] from {}\n",
                binding.alias,
                binding.class_name,
                origin_label(binding.origin),
                binding.import_path
            ));
        }

        if !report.overridden.is_empty() {
            out.push_str(&format!("\nOverridden: {}\n", report.overridden.join(", ")));
        }

        out
    }
}

fn origin_label(origin: Origin) -> &'static str {
    match origin {
        Origin::Abstract => "abstract",
        Origin::Manager => "manager",
        Origin::VendorOverride => "vendor-override",
    }
}

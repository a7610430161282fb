//! Candidate discovery across the service, vendor, and manager trees
//!
//! Discovery is a pure function of the configured layout and the profile
//! name: it returns candidate file paths tagged with their origin and makes
//! no resolution decisions itself. A missing or unreadable root is treated
//! as "zero candidates in that tree" - a profile with no vendor overrides is
//! valid and falls back entirely to the abstract definitions.

use crate::config::AliasgenConfig;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where a candidate file was discovered
///
/// Precedence between candidates sharing an alias is decided by origin
/// priority, not by discovery or completion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// Generic definition under the services root
    Abstract,
    /// Always-included module under the managers root
    Manager,
    /// Profile-specific implementation under the vendor root
    VendorOverride,
}

impl Origin {
    /// Priority table: vendor-override > manager > abstract
    pub fn priority(&self) -> u8 {
        match self {
            Origin::Abstract => 0,
            Origin::Manager => 1,
            Origin::VendorOverride => 2,
        }
    }
}

/// A file believed to define a service module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCandidate {
    pub path: PathBuf,
    pub origin: Origin,
}

/// The discovered candidates for one profile, grouped by origin
#[derive(Debug, Default)]
pub struct CandidateSet {
    pub abstract_defs: Vec<ServiceCandidate>,
    pub overrides: Vec<ServiceCandidate>,
    pub managers: Vec<ServiceCandidate>,
}

impl CandidateSet {
    /// Total number of discovered candidate files
    pub fn len(&self) -> usize {
        self.abstract_defs.len() + self.overrides.len() + self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens the set into one work list; the resolver's origin priority
    /// table makes the order between groups irrelevant for correctness, but
    /// abstract-first matches the emission order consumers expect
    pub fn into_work_list(self) -> Vec<ServiceCandidate> {
        let mut all = self.abstract_defs;
        all.extend(self.overrides);
        all.extend(self.managers);
        all
    }
}

/// Discovers the candidate files for `profile` under the configured roots
pub fn locate(config: &AliasgenConfig, profile: &str) -> CandidateSet {
    let set = CandidateSet {
        abstract_defs: walk_root(&config.services_root(), Origin::Abstract),
        overrides: walk_root(&config.vendor_root(profile), Origin::VendorOverride),
        managers: walk_root(&config.managers_root(), Origin::Manager),
    };

    debug!(
        profile = profile,
        abstract_defs = set.abstract_defs.len(),
        overrides = set.overrides.len(),
        managers = set.managers.len(),
        "Candidate discovery complete"
    );

    set
}

/// Recursively collects every `.js` file under `root`, in path order
fn walk_root(root: &Path, origin: Origin) -> Vec<ServiceCandidate> {
    if !root.is_dir() {
        debug!(root = %root.display(), ?origin, "Root missing, treating as empty");
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for entry in WalkBuilder::new(root).build() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!(root = %root.display(), "Skipping unreadable entry: {}", err);
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("js") {
            continue;
        }

        candidates.push(ServiceCandidate {
            path: path.to_path_buf(),
            origin,
        });
    }

    // Walk order is filesystem-dependent; sort so repeated runs over the
    // same tree always produce the same work list.
    candidates.sort_by(|a, b| a.path.cmp(&b.path));
    candidates
}

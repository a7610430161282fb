//! Alias resolution with explicit origin priority
//!
//! `resolve` is a pure function of one candidate and its metadata; it makes
//! no precedence decision itself. Precedence lives in `GenerationState`,
//! which keeps at most one binding per alias and applies the origin priority
//! table (vendor-override > manager > abstract) on insertion, so resolution
//! is correct under any completion order of the concurrent extractions.

use crate::extractor::ServiceMetadata;
use crate::locator::{Origin, ServiceCandidate};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// The final decision for one alias in one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBinding {
    /// Logical service name the binding is exported under
    pub alias: String,
    /// Concrete class backing the alias for this profile
    pub class_name: String,
    /// Module path relative to the artifact's directory, extension-less
    pub import_path: String,
    /// Where the winning candidate was discovered
    pub origin: Origin,
}

/// Resolves one candidate plus its metadata into a binding
///
/// The import path is derived from the candidate path by stripping the
/// source root and the `.js` extension, since the artifact lives directly
/// under the source root.
pub fn resolve(
    candidate: &ServiceCandidate,
    metadata: &ServiceMetadata,
    source_root: &Path,
) -> ResolvedBinding {
    ResolvedBinding {
        alias: metadata.alias.clone(),
        class_name: metadata.class_name.clone(),
        import_path: import_path(&candidate.path, source_root),
        origin: candidate.origin,
    }
}

fn import_path(path: &Path, source_root: &Path) -> String {
    let relative = path.strip_prefix(source_root).unwrap_or(path);
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    let trimmed = joined.strip_suffix(".js").unwrap_or(&joined);
    format!("./{}", trimmed)
}

/// Accumulated bindings for one generation run
///
/// Created fresh at the start of a run, mutated as each extraction resolves,
/// consumed exactly once by the emitter. First-seen alias order is preserved
/// so emission is deterministic.
#[derive(Debug, Default)]
pub struct GenerationState {
    bindings: Vec<ResolvedBinding>,
    by_alias: HashMap<String, usize>,
    overridden: Vec<String>,
}

impl GenerationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a binding, keeping at most one per alias
    ///
    /// A new binding replaces an existing one for the same alias when its
    /// origin priority is greater or equal; equal priority means the last
    /// one processed wins. A lower-priority binding arriving after a
    /// higher-priority one is discarded, so an abstract definition can never
    /// clobber its vendor override regardless of completion order.
    pub fn insert(&mut self, binding: ResolvedBinding) {
        match self.by_alias.get(&binding.alias) {
            Some(&index) => {
                let current = &self.bindings[index];
                if binding.origin.priority() >= current.origin.priority() {
                    debug!(
                        alias = binding.alias,
                        winner = binding.class_name,
                        loser = current.class_name,
                        "Alias overridden"
                    );
                    self.overridden.push(current.class_name.clone());
                    self.bindings[index] = binding;
                } else {
                    debug!(
                        alias = binding.alias,
                        winner = current.class_name,
                        loser = binding.class_name,
                        "Alias overridden"
                    );
                    self.overridden.push(binding.class_name);
                }
            }
            None => {
                self.by_alias.insert(binding.alias.clone(), self.bindings.len());
                self.bindings.push(binding);
            }
        }
    }

    /// Number of distinct aliases resolved so far
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in first-seen alias order
    pub(crate) fn bindings(&self) -> &[ResolvedBinding] {
        &self.bindings
    }

    /// Class names that lost an override decision, in decision order
    pub(crate) fn overridden(&self) -> &[String] {
        &self.overridden
    }

    /// Consumes the state for emission
    pub fn into_bindings(self) -> (Vec<ResolvedBinding>, Vec<String>) {
        (self.bindings, self.overridden)
    }
}

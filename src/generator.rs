//! Generation pipeline orchestrator
//!
//! Wires discovery, fan-out extraction, resolution, the completion barrier,
//! and emission into one run. Extraction results are tagged with their
//! work-list index and originating candidate, so arbitrary completion order
//! never misattributes a binding and never leaks into emission order: once
//! the barrier fires, outcomes are replayed in dispatch order before any
//! binding is accumulated. The barrier counts dispatches from the same work
//! list that fed the extractor.

use crate::config::AliasgenConfig;
use crate::emitter::Emitter;
use crate::error::{ExtractError, GenerateError};
use crate::extractor::{self, ServiceMetadata};
use crate::locator::{self, ServiceCandidate};
use crate::resolver::{self, GenerationState, ResolvedBinding};
use crate::tracker::CompletionTracker;
use futures_util::{stream, StreamExt};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// How many extractions are polled concurrently
const EXTRACTION_CONCURRENCY: usize = 16;

/// One finished extraction, attributed to its candidate
type Extraction = (ServiceCandidate, Result<Option<ServiceMetadata>, ExtractError>);

/// Summary of one generation run
#[derive(Debug, Serialize)]
pub struct GenerationReport {
    pub profile: String,
    pub abstract_defs: usize,
    pub overrides: usize,
    pub managers: usize,
    /// Readable candidates with no alias tag (not services)
    pub skipped: usize,
    /// Candidates dropped because extraction failed
    pub failed: usize,
    pub bindings: Vec<ResolvedBinding>,
    /// Class names that lost an override decision
    pub overridden: Vec<String>,
    pub output: PathBuf,
    /// False for dry runs, which leave the artifact untouched
    pub written: bool,
}

/// Runs the resolution-and-codegen pipeline for one profile
pub struct Generator {
    config: AliasgenConfig,
    dry_run: bool,
}

impl Generator {
    pub fn new(config: AliasgenConfig) -> Self {
        Self {
            config,
            dry_run: false,
        }
    }

    /// Resolves without writing the artifact
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Generates the aggregator module for `profile`
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::NoServicesFound` when no candidate yielded a
    /// binding (the skeleton artifact is still written first), and
    /// `GenerateError::Emit` when the artifact cannot be written.
    pub async fn run(&self, profile: &str) -> Result<GenerationReport, GenerateError> {
        let start = Instant::now();
        info!(profile, source_root = %self.config.source_root.display(), "Starting generation");

        let set = locator::locate(&self.config, profile);
        let (abstract_defs, overrides, managers) =
            (set.abstract_defs.len(), set.overrides.len(), set.managers.len());

        let work_list = set.into_work_list();
        let mut tracker = CompletionTracker::new(work_list.len());
        let mut outcomes: Vec<Option<Extraction>> = Vec::new();
        outcomes.resize_with(work_list.len(), || None);

        let mut extractions = stream::iter(work_list.into_iter().enumerate().map(
            |(index, candidate)| async move {
                let outcome = extractor::extract(&candidate.path).await;
                (index, candidate, outcome)
            },
        ))
        .buffer_unordered(EXTRACTION_CONCURRENCY);

        while let Some((index, candidate, outcome)) = extractions.next().await {
            outcomes[index] = Some((candidate, outcome));
            if tracker.complete_one() {
                break;
            }
        }
        drop(extractions);
        debug_assert!(tracker.is_complete());
        debug_assert_eq!(tracker.completed(), tracker.expected());

        // Completion order is arbitrary; replay in dispatch order so the
        // accumulated binding order (and with it the artifact) is the same
        // on every run over the same tree.
        let mut state = GenerationState::new();
        let mut skipped = 0usize;
        let mut failed = 0usize;
        for (candidate, outcome) in outcomes.into_iter().flatten() {
            match outcome {
                Ok(Some(metadata)) => {
                    state.insert(resolver::resolve(
                        &candidate,
                        &metadata,
                        &self.config.source_root,
                    ));
                }
                Ok(None) => {
                    debug!(path = %candidate.path.display(), "Not a service, skipping");
                    skipped += 1;
                }
                Err(err) => {
                    warn!(path = %candidate.path.display(), "Dropping candidate: {}", err);
                    failed += 1;
                }
            }
        }

        let no_services = state.is_empty();
        let resolved = state.len();
        let (bindings, overridden) = state.into_bindings();

        if self.dry_run {
            debug!("Dry run, artifact untouched");
        } else {
            Emitter::new(self.config.output.clone()).emit(&bindings)?;
        }

        info!(
            profile,
            bindings = resolved,
            skipped,
            failed,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Generation complete"
        );

        if no_services {
            return Err(GenerateError::NoServicesFound {
                profile: profile.to_string(),
            });
        }

        Ok(GenerationReport {
            profile: profile.to_string(),
            abstract_defs,
            overrides,
            managers,
            skipped,
            failed,
            bindings,
            overridden,
            output: self.config.output.clone(),
            written: !self.dry_run,
        })
    }
}

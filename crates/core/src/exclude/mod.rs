//! Batch engine that applies or removes sync-exclusion markers.
//!
//! # Overview
//!
//! [`run_exclude`] takes an [`ExcludeConfig`] and processes each target in
//! order: probe the marker state, perform (or, for dry runs, only report)
//! the requested change, and record the outcome. One failing path never
//! stops the batch; the caller inspects the returned
//! [`ExcludeSummary`] for events, failures, and the resulting exit code.
//!
//! # Invariants
//!
//! - Targets are processed in the order supplied and appear in the summary
//!   in that order.
//! - Applying a marker twice is equivalent to applying it once; the second
//!   run records [`ExcludeEventKind::AlreadyMarked`]. Removal behaves the
//!   same way.
//! - A dry run never modifies the filesystem.

mod config;
mod error;
mod summary;

pub use config::{ExcludeConfig, ExcludeConfigBuilder, MarkerAction};
pub use error::ExcludeError;
pub use summary::{ExcludeEvent, ExcludeEventKind, ExcludeFailure, ExcludeSummary};

pub use nosync_marker::{Mechanism, MarkerError, MarkerErrorKind, MarkerState};

use std::path::Path;

use nosync_marker::{MarkerChange, suffix, xattr};

/// Runs the configured batch and returns its summary.
///
/// # Errors
///
/// Returns [`ExcludeError`] only for configuration-level problems: an empty
/// target list or a mechanism missing from this build. Per-target failures
/// are reported through [`ExcludeSummary::failures`] instead.
pub fn run_exclude(config: &ExcludeConfig) -> Result<ExcludeSummary, ExcludeError> {
    if config.targets().is_empty() {
        return Err(ExcludeError::MissingOperands);
    }
    if !config.mechanism().is_available() {
        return Err(ExcludeError::MechanismUnavailable {
            mechanism: config.mechanism(),
        });
    }

    let mut summary = ExcludeSummary::new();
    for target in config.targets() {
        match process_target(config, target) {
            Ok(kind) => {
                tracing::debug!(
                    target: "nosync::exclude",
                    path = %target.display(),
                    action = config.action().label(),
                    outcome = kind.label(),
                    "processed target"
                );
                summary.record_event(ExcludeEvent::new(target.clone(), kind));
            }
            Err(error) => {
                tracing::debug!(
                    target: "nosync::exclude",
                    path = %target.display(),
                    action = config.action().label(),
                    error = %error,
                    "target failed"
                );
                summary.record_failure(ExcludeFailure::new(target.clone(), error));
            }
        }
    }
    Ok(summary)
}

fn process_target(config: &ExcludeConfig, target: &Path) -> Result<ExcludeEventKind, MarkerError> {
    if config.dry_run() {
        let state = probe(config.mechanism(), target)?;
        return Ok(match (config.action(), state.is_marked()) {
            (MarkerAction::Apply, false) => ExcludeEventKind::WouldMark,
            (MarkerAction::Apply, true) => ExcludeEventKind::AlreadyMarked,
            (MarkerAction::Undo, true) => ExcludeEventKind::WouldUnmark,
            (MarkerAction::Undo, false) => ExcludeEventKind::AlreadyUnmarked,
        });
    }

    match config.action() {
        MarkerAction::Apply => {
            let change = match config.mechanism() {
                Mechanism::Suffix => suffix::apply(target, config.compat_symlink())?,
                Mechanism::Xattr => xattr::apply(target)?,
            };
            Ok(match change {
                MarkerChange::Changed => ExcludeEventKind::Marked,
                MarkerChange::Unchanged => ExcludeEventKind::AlreadyMarked,
            })
        }
        MarkerAction::Undo => {
            let change = match config.mechanism() {
                Mechanism::Suffix => suffix::undo(target)?,
                Mechanism::Xattr => xattr::undo(target)?,
            };
            Ok(match change {
                MarkerChange::Changed => ExcludeEventKind::Unmarked,
                MarkerChange::Unchanged => ExcludeEventKind::AlreadyUnmarked,
            })
        }
    }
}

fn probe(mechanism: Mechanism, target: &Path) -> Result<MarkerState, MarkerError> {
    match mechanism {
        Mechanism::Suffix => suffix::state(target),
        Mechanism::Xattr => xattr::state(target),
    }
}

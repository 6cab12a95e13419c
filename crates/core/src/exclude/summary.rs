use std::path::{Path, PathBuf};

use nosync_marker::MarkerError;

use crate::exit_code::{ExitCode, HasExitCode};

/// Outcome recorded for a successfully processed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcludeEventKind {
    /// The marker was added.
    Marked,
    /// The marker was already present; nothing changed.
    AlreadyMarked,
    /// The marker was removed.
    Unmarked,
    /// The marker was already absent; nothing changed.
    AlreadyUnmarked,
    /// Dry run: the marker would have been added.
    WouldMark,
    /// Dry run: the marker would have been removed.
    WouldUnmark,
}

impl ExcludeEventKind {
    /// Returns the phrase used in verbose listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Marked => "marked",
            Self::AlreadyMarked => "already marked",
            Self::Unmarked => "unmarked",
            Self::AlreadyUnmarked => "already unmarked",
            Self::WouldMark => "would mark",
            Self::WouldUnmark => "would unmark",
        }
    }

    /// Returns `true` when the filesystem was modified.
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Marked | Self::Unmarked)
    }

    /// Returns `true` for outcomes reported by a dry run.
    #[must_use]
    pub const fn is_dry_run(self) -> bool {
        matches!(self, Self::WouldMark | Self::WouldUnmark)
    }
}

/// A processed target together with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeEvent {
    path: PathBuf,
    kind: ExcludeEventKind,
}

impl ExcludeEvent {
    pub(crate) fn new(path: PathBuf, kind: ExcludeEventKind) -> Self {
        Self { path, kind }
    }

    /// Returns the target path as supplied by the caller.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the recorded outcome.
    #[must_use]
    pub const fn kind(&self) -> ExcludeEventKind {
        self.kind
    }
}

/// A target that could not be processed.
#[derive(Debug)]
pub struct ExcludeFailure {
    path: PathBuf,
    error: MarkerError,
}

impl ExcludeFailure {
    pub(crate) fn new(path: PathBuf, error: MarkerError) -> Self {
        Self { path, error }
    }

    /// Returns the target path as supplied by the caller.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the error that stopped this target.
    #[must_use]
    pub const fn error(&self) -> &MarkerError {
        &self.error
    }
}

/// Aggregated outcome of a batch run.
///
/// Events and failures keep the order in which targets were supplied, so a
/// front-end can replay the run verbatim. The summary owns the final exit
/// status: [`ExcludeSummary::exit_code`] reports failure when any target
/// failed, success otherwise.
#[derive(Debug, Default)]
pub struct ExcludeSummary {
    events: Vec<ExcludeEvent>,
    failures: Vec<ExcludeFailure>,
}

impl ExcludeSummary {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_event(&mut self, event: ExcludeEvent) {
        self.events.push(event);
    }

    pub(crate) fn record_failure(&mut self, failure: ExcludeFailure) {
        self.failures.push(failure);
    }

    /// Returns the recorded events in processing order.
    #[must_use]
    pub fn events(&self) -> &[ExcludeEvent] {
        &self.events
    }

    /// Returns the recorded failures in processing order.
    #[must_use]
    pub fn failures(&self) -> &[ExcludeFailure] {
        &self.failures
    }

    /// Returns the number of targets whose marker was added.
    #[must_use]
    pub fn marked(&self) -> usize {
        self.count(ExcludeEventKind::Marked)
    }

    /// Returns the number of targets whose marker was removed.
    #[must_use]
    pub fn unmarked(&self) -> usize {
        self.count(ExcludeEventKind::Unmarked)
    }

    /// Returns the number of targets already in the requested state.
    #[must_use]
    pub fn unchanged(&self) -> usize {
        self.events
            .iter()
            .filter(|event| {
                matches!(
                    event.kind(),
                    ExcludeEventKind::AlreadyMarked | ExcludeEventKind::AlreadyUnmarked
                )
            })
            .count()
    }

    /// Returns the number of changes a dry run would have made.
    #[must_use]
    pub fn would_change(&self) -> usize {
        self.events
            .iter()
            .filter(|event| event.kind().is_dry_run())
            .count()
    }

    /// Returns `true` when at least one target failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    fn count(&self, kind: ExcludeEventKind) -> usize {
        self.events
            .iter()
            .filter(|event| event.kind() == kind)
            .count()
    }
}

impl HasExitCode for ExcludeSummary {
    fn exit_code(&self) -> ExitCode {
        if self.has_failures() {
            ExitCode::Failure
        } else {
            ExitCode::Ok
        }
    }
}

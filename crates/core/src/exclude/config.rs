use std::path::PathBuf;

use nosync_marker::Mechanism;

/// Operation requested for each target in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkerAction {
    /// Add the sync-exclusion marker.
    #[default]
    Apply,
    /// Remove the sync-exclusion marker.
    Undo,
}

impl MarkerAction {
    /// Returns the verb used in diagnostics for this action.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apply => "mark",
            Self::Undo => "unmark",
        }
    }
}

/// Settings for a single [`run_exclude`](super::run_exclude) call.
///
/// Constructed through [`ExcludeConfig::builder`]; the compiled-in defaults
/// mirror the command line: apply the `.nosync` rename and leave a
/// compatibility symlink behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeConfig {
    targets: Vec<PathBuf>,
    action: MarkerAction,
    mechanism: Mechanism,
    dry_run: bool,
    compat_symlink: bool,
}

impl ExcludeConfig {
    /// Returns a builder initialised with the defaults.
    #[must_use]
    pub fn builder() -> ExcludeConfigBuilder {
        ExcludeConfigBuilder::default()
    }

    /// Returns the target paths in the order they will be processed.
    #[must_use]
    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }

    /// Returns the requested action.
    #[must_use]
    pub const fn action(&self) -> MarkerAction {
        self.action
    }

    /// Returns the selected marking mechanism.
    #[must_use]
    pub const fn mechanism(&self) -> Mechanism {
        self.mechanism
    }

    /// Returns `true` when the run must not modify the filesystem.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns `true` when suffix renames leave a compatibility symlink.
    #[must_use]
    pub const fn compat_symlink(&self) -> bool {
        self.compat_symlink
    }
}

/// Fluent builder for [`ExcludeConfig`].
#[derive(Debug, Clone)]
pub struct ExcludeConfigBuilder {
    targets: Vec<PathBuf>,
    action: MarkerAction,
    mechanism: Mechanism,
    dry_run: bool,
    compat_symlink: bool,
}

impl Default for ExcludeConfigBuilder {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            action: MarkerAction::default(),
            mechanism: Mechanism::default(),
            dry_run: false,
            compat_symlink: true,
        }
    }
}

impl ExcludeConfigBuilder {
    /// Appends a single target path.
    #[must_use]
    pub fn target(mut self, target: impl Into<PathBuf>) -> Self {
        self.targets.push(target.into());
        self
    }

    /// Appends every target from the iterator, keeping the order.
    #[must_use]
    pub fn targets<I, P>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.targets.extend(targets.into_iter().map(Into::into));
        self
    }

    /// Selects the action performed on each target.
    #[must_use]
    pub const fn action(mut self, action: MarkerAction) -> Self {
        self.action = action;
        self
    }

    /// Selects the marking mechanism.
    #[must_use]
    pub const fn mechanism(mut self, mechanism: Mechanism) -> Self {
        self.mechanism = mechanism;
        self
    }

    /// Enables or disables dry-run reporting.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Controls whether suffix renames leave a compatibility symlink.
    #[must_use]
    pub const fn compat_symlink(mut self, compat_symlink: bool) -> Self {
        self.compat_symlink = compat_symlink;
        self
    }

    /// Finalises the configuration.
    ///
    /// Validation happens in [`run_exclude`](super::run_exclude) so a
    /// config can be assembled incrementally without intermediate errors.
    #[must_use]
    pub fn build(self) -> ExcludeConfig {
        ExcludeConfig {
            targets: self.targets,
            action: self.action,
            mechanism: self.mechanism,
            dry_run: self.dry_run,
            compat_symlink: self.compat_symlink,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_the_command_line() {
        let config = ExcludeConfig::builder().build();
        assert!(config.targets().is_empty());
        assert_eq!(config.action(), MarkerAction::Apply);
        assert_eq!(config.mechanism(), Mechanism::Suffix);
        assert!(!config.dry_run());
        assert!(config.compat_symlink());
    }

    #[test]
    fn builder_keeps_target_order() {
        let config = ExcludeConfig::builder()
            .target("a")
            .targets(["b", "c"])
            .target("d")
            .build();
        let order: Vec<_> = config
            .targets()
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        assert_eq!(order, ["a", "b", "c", "d"]);
    }

    #[test]
    fn builder_applies_every_toggle() {
        let config = ExcludeConfig::builder()
            .action(MarkerAction::Undo)
            .mechanism(Mechanism::Xattr)
            .dry_run(true)
            .compat_symlink(false)
            .build();
        assert_eq!(config.action(), MarkerAction::Undo);
        assert_eq!(config.mechanism(), Mechanism::Xattr);
        assert!(config.dry_run());
        assert!(!config.compat_symlink());
    }

    #[test]
    fn action_labels_are_stable() {
        assert_eq!(MarkerAction::Apply.label(), "mark");
        assert_eq!(MarkerAction::Undo.label(), "unmark");
    }
}

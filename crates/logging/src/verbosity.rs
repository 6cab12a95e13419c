//! Verbosity mapping for repeated `-v` flags.

use tracing_subscriber::filter::LevelFilter;

/// Verbosity selected on the command line.
///
/// Each `-v` raises the level: `0` keeps the tool quiet apart from errors,
/// `1` lists the action taken for every target, `2` adds internal debug
/// events, and `3` or more enables trace output.
///
/// # Examples
///
/// ```
/// use nosync_logging::Verbosity;
///
/// let verbosity = Verbosity::from_verbose_level(1);
/// assert!(verbosity.lists_actions());
/// assert!(!verbosity.traces_internals());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Verbosity {
    level: u8,
}

impl Verbosity {
    /// Creates a verbosity from the number of `-v` flags on the command line.
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        Self { level }
    }

    /// Returns the raw verbose level.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.level
    }

    /// Returns `true` when per-target action lines should be printed.
    #[must_use]
    pub const fn lists_actions(self) -> bool {
        self.level >= 1
    }

    /// Returns `true` when internal debug events should be visible.
    #[must_use]
    pub const fn traces_internals(self) -> bool {
        self.level >= 2
    }

    /// Returns the `tracing` filter matching this verbosity.
    #[must_use]
    pub const fn tracing_filter(self) -> LevelFilter {
        match self.level {
            0 => LevelFilter::ERROR,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

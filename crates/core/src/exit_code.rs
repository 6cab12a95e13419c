//! Centralized exit code definitions for the `nosync` binary.
//!
//! This module provides the unified [`ExitCode`] enum used across the
//! workspace. All error types map into these codes so the process status
//! stays consistent no matter which layer produced the failure.
//!
//! # Examples
//!
//! ```
//! use nosync_core::exit_code::ExitCode;
//!
//! let code = ExitCode::Failure;
//! assert_eq!(code.as_i32(), 1);
//! assert_eq!(code.description(), "general failure");
//! ```

use std::fmt;

/// Exit codes returned by `nosync` invocations.
///
/// The numbering is part of the tool's contract with scripts that wrap it:
/// zero for success, one when any target failed, two for argument problems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful completion.
    Ok = 0,

    /// General failure.
    ///
    /// Returned when at least one target path could not be processed. The
    /// batch still runs to completion; this code reports that some of it
    /// went wrong.
    Failure = 1,

    /// Syntax or usage error.
    ///
    /// Returned for unknown flags, missing path operands, or selecting a
    /// marking mechanism that is not compiled into this build.
    Usage = 2,
}

impl ExitCode {
    /// Returns the numeric value reported to the shell.
    ///
    /// # Examples
    ///
    /// ```
    /// use nosync_core::exit_code::ExitCode;
    ///
    /// assert_eq!(ExitCode::Ok.as_i32(), 0);
    /// assert_eq!(ExitCode::Usage.as_i32(), 2);
    /// ```
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns the short phrase describing this code in diagnostics.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Failure => "general failure",
            Self::Usage => "syntax or usage error",
        }
    }

    /// Returns `true` only for [`ExitCode::Ok`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Looks up the exit code for a raw numeric status.
    ///
    /// Returns `None` when the value is outside the documented contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use nosync_core::exit_code::ExitCode;
    ///
    /// assert_eq!(ExitCode::from_i32(1), Some(ExitCode::Failure));
    /// assert_eq!(ExitCode::from_i32(99), None);
    /// ```
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Ok),
            1 => Some(Self::Failure),
            2 => Some(Self::Usage),
            _ => None,
        }
    }

    /// Classifies a `std::io::Error` into the matching exit code.
    ///
    /// Path-level problems (missing targets, denied access, name
    /// collisions) are reported as [`ExitCode::Failure`]; malformed input
    /// maps to [`ExitCode::Usage`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nosync_core::exit_code::ExitCode;
    /// use std::io::{Error, ErrorKind};
    ///
    /// let err = Error::from(ErrorKind::NotFound);
    /// assert_eq!(ExitCode::from_io_error(&err), ExitCode::Failure);
    ///
    /// let err = Error::from(ErrorKind::InvalidInput);
    /// assert_eq!(ExitCode::from_io_error(&err), ExitCode::Usage);
    /// ```
    #[must_use]
    pub fn from_io_error(error: &std::io::Error) -> Self {
        use std::io::ErrorKind;

        match error.kind() {
            ErrorKind::InvalidInput => Self::Usage,
            _ => Self::Failure,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        // std::process::ExitCode only carries a u8
        let value = code.as_i32().clamp(0, 255) as u8;
        Self::from(value)
    }
}

/// Describes a raw exit status for log lines and assertions.
///
/// Known codes render their contract description; anything else becomes an
/// "unknown error code" placeholder.
///
/// # Examples
///
/// ```
/// use nosync_core::exit_code::exit_code_description;
///
/// assert_eq!(exit_code_description(0), "success");
/// assert_eq!(exit_code_description(99), "unknown error code: 99");
/// ```
#[must_use]
pub fn exit_code_description(code: i32) -> String {
    ExitCode::from_i32(code)
        .map(|c| c.description().to_string())
        .unwrap_or_else(|| format!("unknown error code: {code}"))
}

/// Trait for values that determine the final process status.
///
/// Error and summary types implement this so front-ends never hand-compute
/// status numbers.
pub trait HasExitCode {
    /// Returns the exit code this value maps to.
    fn exit_code(&self) -> ExitCode;
}

use nosync_marker::Mechanism;
use thiserror::Error;

use crate::exit_code::{ExitCode, HasExitCode};

/// Errors that abort a batch before any target is processed.
///
/// Per-target failures never appear here; they are collected in the
/// [`ExcludeSummary`](super::ExcludeSummary) so the batch keeps going.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExcludeError {
    /// No target paths were supplied.
    #[error("missing path operands")]
    MissingOperands,

    /// The selected mechanism is not compiled into this build.
    #[error("the {} marker is not supported in this build", .mechanism.name())]
    MechanismUnavailable {
        /// Mechanism the caller asked for.
        mechanism: Mechanism,
    },
}

impl HasExitCode for ExcludeError {
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::MissingOperands | Self::MechanismUnavailable { .. } => ExitCode::Usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_usage_errors() {
        assert_eq!(ExcludeError::MissingOperands.exit_code(), ExitCode::Usage);
        assert_eq!(
            ExcludeError::MechanismUnavailable {
                mechanism: Mechanism::Xattr
            }
            .exit_code(),
            ExitCode::Usage
        );
    }

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            ExcludeError::MissingOperands.to_string(),
            "missing path operands"
        );
        assert_eq!(
            ExcludeError::MechanismUnavailable {
                mechanism: Mechanism::Xattr
            }
            .to_string(),
            "the extended attribute marker is not supported in this build"
        );
    }
}

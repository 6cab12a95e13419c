use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error produced when a marking operation fails.
///
/// Every variant names the path involved so batch callers can report which
/// operand failed without extra bookkeeping.
#[derive(Debug, Error)]
pub enum MarkerError {
    /// The target path does not exist.
    #[error("path '{}' does not exist", .path.display())]
    NotFound {
        /// Path supplied by the caller.
        path: PathBuf,
    },

    /// The caller lacks the rights to modify the target.
    #[error("permission denied for '{}'", .path.display())]
    PermissionDenied {
        /// Path supplied by the caller.
        path: PathBuf,
    },

    /// An unrelated entry occupies the name a rename needs.
    #[error("'{}' already exists", .path.display())]
    AlreadyExists {
        /// Name that is already taken.
        path: PathBuf,
    },

    /// The path has no final component to mark (for example `/`).
    #[error("'{}' has no file name to mark", .path.display())]
    InvalidTarget {
        /// Path supplied by the caller.
        path: PathBuf,
    },

    /// Any other I/O failure, carrying the operation that was underway.
    #[error("failed to {context} '{}': {source}", .path.display())]
    Io {
        /// Operation being performed when the error occurred.
        context: &'static str,
        /// Path involved in the failing operation.
        path: PathBuf,
        /// Underlying error reported by the OS.
        source: io::Error,
    },
}

/// Discriminant of a [`MarkerError`], used for dispatch and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerErrorKind {
    /// See [`MarkerError::NotFound`].
    NotFound,
    /// See [`MarkerError::PermissionDenied`].
    PermissionDenied,
    /// See [`MarkerError::AlreadyExists`].
    AlreadyExists,
    /// See [`MarkerError::InvalidTarget`].
    InvalidTarget,
    /// See [`MarkerError::Io`].
    Io,
}

impl MarkerError {
    /// Classifies an [`io::Error`] into the matching marker error.
    ///
    /// `NotFound`, `PermissionDenied`, and `AlreadyExists` become their
    /// dedicated variants; anything else keeps the operation context.
    pub(crate) fn classify(context: &'static str, path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            _ => Self::Io {
                context,
                path,
                source,
            },
        }
    }

    /// Returns the discriminant for this error.
    #[must_use]
    pub const fn kind(&self) -> MarkerErrorKind {
        match self {
            Self::NotFound { .. } => MarkerErrorKind::NotFound,
            Self::PermissionDenied { .. } => MarkerErrorKind::PermissionDenied,
            Self::AlreadyExists { .. } => MarkerErrorKind::AlreadyExists,
            Self::InvalidTarget { .. } => MarkerErrorKind::InvalidTarget,
            Self::Io { .. } => MarkerErrorKind::Io,
        }
    }

    /// Returns the path involved in the failing operation.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::AlreadyExists { path }
            | Self::InvalidTarget { path }
            | Self::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_maps_not_found() {
        let error = MarkerError::classify(
            "rename",
            Path::new("missing"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert_eq!(error.kind(), MarkerErrorKind::NotFound);
        assert_eq!(error.path(), Path::new("missing"));
        assert_eq!(error.to_string(), "path 'missing' does not exist");
    }

    #[test]
    fn classify_maps_permission_denied() {
        let error = MarkerError::classify(
            "rename",
            Path::new("locked"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(error.kind(), MarkerErrorKind::PermissionDenied);
        assert_eq!(error.to_string(), "permission denied for 'locked'");
    }

    #[test]
    fn classify_maps_already_exists() {
        let error = MarkerError::classify(
            "rename",
            Path::new("taken"),
            io::Error::from(io::ErrorKind::AlreadyExists),
        );
        assert_eq!(error.kind(), MarkerErrorKind::AlreadyExists);
        assert_eq!(error.to_string(), "'taken' already exists");
    }

    #[test]
    fn classify_keeps_context_for_other_errors() {
        let error = MarkerError::classify(
            "create compatibility symlink for",
            Path::new("entry"),
            io::Error::other("disk full"),
        );
        assert_eq!(error.kind(), MarkerErrorKind::Io);
        assert_eq!(
            error.to_string(),
            "failed to create compatibility symlink for 'entry': disk full"
        );
    }

    #[test]
    fn invalid_target_names_the_path() {
        let error = MarkerError::InvalidTarget {
            path: PathBuf::from("/"),
        };
        assert_eq!(error.to_string(), "'/' has no file name to mark");
    }
}

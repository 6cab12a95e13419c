//! Stub for builds without extended attribute support.
//!
//! On non-Unix targets, or when the `xattr` feature is disabled, the ignore
//! attribute cannot be accessed. This module mirrors the API of the real
//! implementation so callers compile unchanged; every operation reports the
//! mechanism as unsupported. Front-ends reject the mechanism at argument
//! parsing, so these errors only surface when that check is bypassed.

use std::io;
use std::path::Path;

use crate::{MarkerChange, MarkerError, MarkerState};

/// Attribute the file provider consults when deciding whether to sync.
pub const NOSYNC_ATTRIBUTE: &str = "com.apple.fileprovider.ignore#P";

fn unsupported(context: &'static str, path: &Path) -> MarkerError {
    MarkerError::Io {
        context,
        path: path.to_path_buf(),
        source: io::Error::new(
            io::ErrorKind::Unsupported,
            "extended attribute markers are not supported in this build",
        ),
    }
}

/// Always fails: extended attributes are unavailable in this build.
pub fn state(path: &Path) -> Result<MarkerState, MarkerError> {
    Err(unsupported("read extended attribute on", path))
}

/// Always fails: extended attributes are unavailable in this build.
pub fn apply(path: &Path) -> Result<MarkerChange, MarkerError> {
    Err(unsupported("write extended attribute on", path))
}

/// Always fails: extended attributes are unavailable in this build.
pub fn undo(path: &Path) -> Result<MarkerChange, MarkerError> {
    Err(unsupported("remove extended attribute on", path))
}

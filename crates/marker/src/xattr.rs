//! Extended-attribute marking.
//!
//! File-provider era macOS reads the `com.apple.fileprovider.ignore#P`
//! attribute when deciding whether to sync an entry, so setting it excludes
//! the path without changing its visible name. Attribute access goes through
//! the non-dereferencing calls: marking a symlink marks the link itself.

use std::io;
use std::path::Path;

use crate::{MarkerChange, MarkerError, MarkerState};

/// Attribute the file provider consults when deciding whether to sync.
pub const NOSYNC_ATTRIBUTE: &str = "com.apple.fileprovider.ignore#P";

/// Value stored under [`NOSYNC_ATTRIBUTE`].
const ATTRIBUTE_VALUE: &[u8] = b"1";

fn map_attribute_error(context: &'static str, path: &Path, error: io::Error) -> MarkerError {
    MarkerError::classify(context, path, error)
}

/// Probes the marker state of `path`.
///
/// # Errors
///
/// Returns [`MarkerError::NotFound`] when the path does not exist. Reading
/// an absent attribute is not an error; it means the path is unmarked.
pub fn state(path: &Path) -> Result<MarkerState, MarkerError> {
    let value = xattr::get(path, NOSYNC_ATTRIBUTE)
        .map_err(|error| map_attribute_error("read extended attribute on", path, error))?;
    Ok(if value.is_some() {
        MarkerState::Marked
    } else {
        MarkerState::Unmarked
    })
}

/// Sets the ignore attribute on `path`.
///
/// Returns [`MarkerChange::Unchanged`] when the attribute is already
/// present.
pub fn apply(path: &Path) -> Result<MarkerChange, MarkerError> {
    if state(path)?.is_marked() {
        return Ok(MarkerChange::Unchanged);
    }
    xattr::set(path, NOSYNC_ATTRIBUTE, ATTRIBUTE_VALUE)
        .map_err(|error| map_attribute_error("write extended attribute on", path, error))?;
    Ok(MarkerChange::Changed)
}

/// Removes the ignore attribute from `path`.
///
/// Returns [`MarkerChange::Unchanged`] when the attribute is absent.
pub fn undo(path: &Path) -> Result<MarkerChange, MarkerError> {
    if !state(path)?.is_marked() {
        return Ok(MarkerChange::Unchanged);
    }
    xattr::remove(path, NOSYNC_ATTRIBUTE)
        .map_err(|error| map_attribute_error("remove extended attribute on", path, error))?;
    Ok(MarkerChange::Changed)
}

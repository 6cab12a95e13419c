//! `.nosync` extension marking.
//!
//! Renaming an entry so its final component ends in `.nosync` is the
//! original convention for keeping it out of iCloud sync. The rename is
//! paired with an optional compatibility symlink at the original name so
//! paths recorded elsewhere keep resolving; the sync daemon never uploads
//! symlinks, so the link stays local.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{MarkerChange, MarkerError, MarkerState};

/// Extension appended to marked entries.
pub const NOSYNC_EXTENSION: &str = "nosync";

fn map_suffix_error(context: &'static str, path: &Path, error: io::Error) -> MarkerError {
    MarkerError::classify(context, path, error)
}

/// Returns `true` when the final component carries the `.nosync` extension.
#[must_use]
pub fn has_marked_name(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension == NOSYNC_EXTENSION)
}

/// Returns the marked sibling for `path` (`notes` becomes `notes.nosync`).
///
/// Existing extensions are kept: `report.pdf` becomes `report.pdf.nosync`.
pub fn marked_name(path: &Path) -> Result<PathBuf, MarkerError> {
    let Some(name) = path.file_name() else {
        return Err(MarkerError::InvalidTarget {
            path: path.to_path_buf(),
        });
    };
    let mut marked = name.to_os_string();
    marked.push(".");
    marked.push(NOSYNC_EXTENSION);
    Ok(path.parent().unwrap_or(Path::new("")).join(marked))
}

/// Returns the original sibling for a marked path (`notes.nosync` becomes
/// `notes`).
fn original_name(marked: &Path) -> Result<PathBuf, MarkerError> {
    let Some(stem) = marked.file_stem() else {
        return Err(MarkerError::InvalidTarget {
            path: marked.to_path_buf(),
        });
    };
    Ok(marked.parent().unwrap_or(Path::new("")).join(stem))
}

/// Reports whether `path` is the compatibility symlink for `marked`.
///
/// Accepts both the bare sibling name this crate creates and a full path to
/// the marked entry, so links made by earlier tool versions still count.
fn is_compat_symlink(path: &Path, marked: &Path) -> bool {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return false;
    };
    if !metadata.file_type().is_symlink() {
        return false;
    }
    let Ok(target) = fs::read_link(path) else {
        return false;
    };
    marked
        .file_name()
        .is_some_and(|name| target.as_os_str() == name)
        || target == marked
}

/// Probes the marker state of `path`.
///
/// A path counts as marked when its own name carries the `.nosync`
/// extension, when it is the compatibility symlink pointing at its marked
/// sibling, or when only the marked sibling exists (a rename performed
/// without a compatibility link).
///
/// # Errors
///
/// Returns [`MarkerError::NotFound`] when neither the path nor its marked
/// sibling exists.
pub fn state(path: &Path) -> Result<MarkerState, MarkerError> {
    if has_marked_name(path) {
        return match fs::symlink_metadata(path) {
            Ok(_) => Ok(MarkerState::Marked),
            Err(error) => Err(map_suffix_error("inspect", path, error)),
        };
    }
    let marked = marked_name(path)?;
    match fs::symlink_metadata(path) {
        Ok(_) if is_compat_symlink(path, &marked) => Ok(MarkerState::Marked),
        Ok(_) => Ok(MarkerState::Unmarked),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            if fs::symlink_metadata(&marked).is_ok() {
                Ok(MarkerState::Marked)
            } else {
                Err(map_suffix_error("inspect", path, error))
            }
        }
        Err(error) => Err(map_suffix_error("inspect", path, error)),
    }
}

/// Adds the `.nosync` marker to `path` by renaming it.
///
/// When `compat_symlink` is set, a symlink to the bare marked name is left
/// at the original path so existing references keep resolving; the bare
/// name keeps the pair valid when the parent directory moves. Symlinks are
/// a Unix concept, so other targets rename without leaving one.
///
/// The operation acts on the entry itself: applying to a symlink renames
/// the link, not its target. Returns [`MarkerChange::Unchanged`] when the
/// path is already marked. The rename is not rolled back when creating the
/// compatibility symlink fails afterwards.
///
/// # Errors
///
/// Returns [`MarkerError::AlreadyExists`] when an unrelated entry occupies
/// the marked name, and [`MarkerError::NotFound`] when `path` is missing.
pub fn apply(path: &Path, compat_symlink: bool) -> Result<MarkerChange, MarkerError> {
    if state(path)?.is_marked() {
        return Ok(MarkerChange::Unchanged);
    }
    let marked = marked_name(path)?;
    if fs::symlink_metadata(&marked).is_ok() {
        return Err(MarkerError::AlreadyExists { path: marked });
    }
    fs::rename(path, &marked).map_err(|error| map_suffix_error("rename", path, error))?;
    if compat_symlink {
        create_compat_symlink(path, &marked)?;
    }
    Ok(MarkerChange::Changed)
}

#[cfg(unix)]
fn create_compat_symlink(original: &Path, marked: &Path) -> Result<(), MarkerError> {
    let target = marked.file_name().map_or(marked, Path::new);
    std::os::unix::fs::symlink(target, original)
        .map_err(|error| map_suffix_error("create compatibility symlink at", original, error))
}

#[cfg(not(unix))]
fn create_compat_symlink(_original: &Path, _marked: &Path) -> Result<(), MarkerError> {
    Ok(())
}

/// Removes the `.nosync` marker, restoring the original name.
///
/// Accepts either the original name or the marked name. The compatibility
/// symlink is removed first when present. Returns
/// [`MarkerChange::Unchanged`] when the path is not marked.
///
/// # Errors
///
/// Returns [`MarkerError::AlreadyExists`] when an unrelated entry occupies
/// the original name, and [`MarkerError::NotFound`] when nothing to unmark
/// exists at either name.
pub fn undo(path: &Path) -> Result<MarkerChange, MarkerError> {
    if !state(path)?.is_marked() {
        return Ok(MarkerChange::Unchanged);
    }
    let (original, marked) = if has_marked_name(path) {
        (original_name(path)?, path.to_path_buf())
    } else {
        (path.to_path_buf(), marked_name(path)?)
    };
    match fs::symlink_metadata(&original) {
        Ok(_) if is_compat_symlink(&original, &marked) => {
            fs::remove_file(&original).map_err(|error| {
                map_suffix_error("remove compatibility symlink at", &original, error)
            })?;
        }
        Ok(_) => return Err(MarkerError::AlreadyExists { path: original }),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => return Err(map_suffix_error("inspect", &original, error)),
    }
    fs::rename(&marked, &original).map_err(|error| map_suffix_error("rename", &marked, error))?;
    Ok(MarkerChange::Changed)
}

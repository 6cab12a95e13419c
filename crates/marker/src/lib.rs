#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `nosync-marker` implements the filesystem markers that tell the iCloud
//! file provider to skip a path during synchronisation. Two mechanisms are
//! supported:
//!
//! - [`suffix`]: rename the entry so its final component carries the
//!   `.nosync` extension, the convention the sync daemon has honoured since
//!   its first release. A compatibility symlink can be left at the original
//!   name so existing references keep resolving; the daemon never uploads
//!   symlinks, so the link itself stays local.
//! - [`xattr`]: set the `com.apple.fileprovider.ignore#P` extended attribute
//!   on the entry, the file-provider era equivalent that keeps the visible
//!   name unchanged. Compiled on Unix targets with the `xattr` feature; other
//!   builds expose the same API through a stub that reports the mechanism as
//!   unsupported.
//!
//! # Design
//!
//! Both mechanisms expose the same three operations: [`suffix::state`] probes
//! the current [`MarkerState`], [`suffix::apply`] adds the marker, and
//! [`suffix::undo`] removes it. Apply and undo are idempotent and report
//! whether they changed anything through [`MarkerChange`], so callers can
//! retry freely and batch drivers can distinguish "marked" from "was already
//! marked" when summarising a run.
//!
//! All operations act on the entry named by the caller and never dereference
//! it: marking a symlink marks the link, not its target.
//!
//! # Errors
//!
//! Failures surface as [`MarkerError`] values that always name the offending
//! path. Underlying [`std::io::Error`]s are classified into the specific
//! variants (`NotFound`, `PermissionDenied`, `AlreadyExists`) that callers
//! dispatch on; everything else is carried verbatim with the operation that
//! failed.

mod error;
pub mod suffix;

#[cfg(all(unix, feature = "xattr"))]
pub mod xattr;
#[cfg(not(all(unix, feature = "xattr")))]
#[path = "xattr_stub.rs"]
pub mod xattr;

pub use error::{MarkerError, MarkerErrorKind};

/// Marking mechanism selected by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mechanism {
    /// Rename the entry with a `.nosync` extension.
    #[default]
    Suffix,
    /// Set the file-provider ignore extended attribute.
    Xattr,
}

impl Mechanism {
    /// Returns `true` when the mechanism can operate in this build.
    ///
    /// The suffix rename only needs the standard filesystem API and is
    /// always available. The extended-attribute marker needs a Unix target
    /// compiled with the `xattr` feature.
    #[must_use]
    pub const fn is_available(self) -> bool {
        match self {
            Self::Suffix => true,
            Self::Xattr => cfg!(all(unix, feature = "xattr")),
        }
    }

    /// Returns the mechanism name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Suffix => "nosync extension",
            Self::Xattr => "extended attribute",
        }
    }
}

/// Whether a path currently carries the sync-exclusion marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    /// The marker is present; the path is excluded from sync.
    Marked,
    /// The marker is absent; the path syncs normally.
    Unmarked,
}

impl MarkerState {
    /// Returns `true` when the marker is present.
    #[must_use]
    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Marked)
    }
}

/// Outcome of an apply or undo call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerChange {
    /// The call changed the marker state.
    Changed,
    /// The path was already in the requested state.
    Unchanged,
}

impl MarkerChange {
    /// Returns `true` when the call modified the filesystem.
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

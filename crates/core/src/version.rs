//! Version constants and capability reporting for `--version` output.
//!
//! The banner lists the marking mechanisms compiled into the running binary
//! so support requests can tell at a glance which build produced it.
//! [`VersionInfoConfig::new`] reflects the compile-time defaults;
//! [`VersionInfoReport`] renders the user-visible text.

/// Program name rendered in banners and diagnostics.
pub const PROGRAM_NAME: &str = "nosync";

/// Workspace version rendered by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upstream project page rendered under the version line.
pub const UPSTREAM_URL: &str = "https://github.com/peterbrain/icloud-nosync";

/// Configuration describing which capabilities the current build exposes.
///
/// Higher layers normally use the compile-time defaults from
/// [`VersionInfoConfig::new`]; the fields stay public so embedding callers
/// can render a banner for a different configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VersionInfoConfig {
    /// Whether suffix renames leave a compatibility symlink behind.
    pub supports_compat_symlinks: bool,
    /// Whether the extended-attribute marker is compiled in.
    pub supports_xattr_markers: bool,
}

impl VersionInfoConfig {
    /// Creates a configuration reflecting the capabilities compiled into
    /// this build.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            supports_compat_symlinks: cfg!(unix),
            supports_xattr_markers: cfg!(all(unix, feature = "xattr")),
        }
    }
}

impl Default for VersionInfoConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the human-readable `--version` banner.
///
/// # Examples
///
/// ```
/// use nosync_core::version::VersionInfoReport;
///
/// let banner = VersionInfoReport::default().human_readable();
/// assert!(banner.starts_with("nosync version "));
/// assert!(banner.contains("Capabilities:"));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VersionInfoReport {
    config: VersionInfoConfig,
}

impl VersionInfoReport {
    /// Creates a report for the supplied capability configuration.
    #[must_use]
    pub const fn new(config: VersionInfoConfig) -> Self {
        Self { config }
    }

    /// Returns the banner text, ending in a newline.
    ///
    /// Unavailable capabilities are listed with a `no` prefix rather than
    /// omitted, so the line always names every mechanism the tool knows.
    #[must_use]
    pub fn human_readable(&self) -> String {
        let compat = if self.config.supports_compat_symlinks {
            "compat symlinks"
        } else {
            "no compat symlinks"
        };
        let xattrs = if self.config.supports_xattr_markers {
            "xattr markers"
        } else {
            "no xattr markers"
        };
        format!(
            "{PROGRAM_NAME} version {VERSION}\n{UPSTREAM_URL}\n\nCapabilities:\n    nosync extension, {compat}, {xattrs}\n"
        )
    }
}

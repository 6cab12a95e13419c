//! Message formatting for user-facing diagnostics.
//!
//! Every line `nosync` prints about its own operation follows the classic
//! sync-tool pattern: the program name, a severity label, the text, and for
//! failures the exit code that accompanies it:
//!
//! ```text
//! nosync error: path 'notes' does not exist (code 1)
//! ```
//!
//! Front-ends build [`Message`] values (directly or through the
//! [`nosync_error!`](crate::nosync_error), [`nosync_warning!`](crate::nosync_warning),
//! and [`nosync_info!`](crate::nosync_info) macros) and stream them through a
//! sink so output stays uniform across stdout and stderr.

use std::fmt;
use std::io::{self, Write};

use crate::version::PROGRAM_NAME;

/// Severity prefix attached to a rendered [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Progress and informational output.
    Info,
    /// Conditions worth noting that do not fail the run.
    Warning,
    /// Failures that contribute to a non-zero exit code.
    Error,
}

impl Severity {
    /// Returns the label rendered after the program name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single user-facing diagnostic line.
///
/// # Examples
///
/// ```
/// use nosync_core::message::Message;
///
/// let message = Message::error(1, "path 'notes' does not exist");
/// assert_eq!(
///     message.to_string(),
///     "nosync error: path 'notes' does not exist (code 1)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    severity: Severity,
    text: String,
    code: Option<i32>,
}

impl Message {
    /// Creates an informational message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
            code: None,
        }
    }

    /// Creates a warning message.
    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
            code: None,
        }
    }

    /// Creates an error message carrying the exit code it will produce.
    #[must_use]
    pub fn error(code: i32, text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
            code: Some(code),
        }
    }

    /// Attaches an exit code rendered as a `(code N)` suffix.
    #[must_use]
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    /// Returns the severity of this message.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text without prefix or code suffix.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the attached exit code, if any.
    #[must_use]
    pub const fn code(&self) -> Option<i32> {
        self.code
    }

    /// Renders the message into `writer` without a trailing newline.
    pub fn render_to_writer<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    /// Renders the message into `writer` followed by a newline.
    pub fn render_line_to_writer<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{self}")
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PROGRAM_NAME} {}: {}", self.severity.label(), self.text)?;
        if let Some(code) = self.code {
            write!(f, " (code {code})")?;
        }
        Ok(())
    }
}

/// Builds an error [`Message`] from an exit code and format arguments.
///
/// # Examples
///
/// ```
/// use nosync_core::nosync_error;
///
/// let message = nosync_error!(1, "cannot process '{}'", "notes");
/// assert_eq!(message.to_string(), "nosync error: cannot process 'notes' (code 1)");
/// ```
#[macro_export]
macro_rules! nosync_error {
    ($code:expr, $($arg:tt)*) => {
        $crate::message::Message::error($code, format!($($arg)*))
    };
}

/// Builds a warning [`Message`] from format arguments.
#[macro_export]
macro_rules! nosync_warning {
    ($($arg:tt)*) => {
        $crate::message::Message::warning(format!($($arg)*))
    };
}

/// Builds an informational [`Message`] from format arguments.
#[macro_export]
macro_rules! nosync_info {
    ($($arg:tt)*) => {
        $crate::message::Message::info(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_renders_without_code() {
        let message = Message::info("ready");
        assert_eq!(message.to_string(), "nosync info: ready");
        assert_eq!(message.severity(), Severity::Info);
        assert_eq!(message.code(), None);
    }

    #[test]
    fn error_renders_code_suffix() {
        let message = Message::error(1, "path 'a' does not exist");
        assert_eq!(
            message.to_string(),
            "nosync error: path 'a' does not exist (code 1)"
        );
        assert_eq!(message.code(), Some(1));
    }

    #[test]
    fn warning_accepts_a_code() {
        let message = Message::warning("marker already present").with_code(0);
        assert_eq!(
            message.to_string(),
            "nosync warning: marker already present (code 0)"
        );
    }

    #[test]
    fn render_line_appends_newline() {
        let mut buffer = Vec::new();
        Message::info("done")
            .render_line_to_writer(&mut buffer)
            .expect("render succeeds");
        assert_eq!(buffer, b"nosync info: done\n");
    }

    #[test]
    fn render_without_newline_preserves_output() {
        let mut buffer = Vec::new();
        Message::info("done")
            .render_to_writer(&mut buffer)
            .expect("render succeeds");
        assert_eq!(buffer, b"nosync info: done");
    }

    #[test]
    fn macros_format_their_arguments() {
        let error = nosync_error!(2, "unknown option '{}'", "--bogus");
        assert_eq!(
            error.to_string(),
            "nosync error: unknown option '--bogus' (code 2)"
        );

        let warning = nosync_warning!("skipping '{}'", "notes");
        assert_eq!(warning.to_string(), "nosync warning: skipping 'notes'");

        let info = nosync_info!("processed {} targets", 3);
        assert_eq!(info.to_string(), "nosync info: processed 3 targets");
    }
}

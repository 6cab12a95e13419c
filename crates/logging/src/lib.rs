#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `nosync_logging` provides the diagnostic plumbing shared by the `nosync`
//! front-end: a [`MessageSink`] that streams
//! [`Message`](nosync_core::message::Message) values into arbitrary writers,
//! a [`Verbosity`] type that interprets repeated `-v` flags, and
//! [`init_tracing`] to route the workspace's `tracing` events to stderr.
//!
//! # Design
//!
//! The sink wraps any [`io::Write`](std::io::Write) implementor and renders
//! each message with the configured [`LineMode`]. Diagnostics about the
//! program itself always go through [`Message`] so stdout and stderr stay
//! uniform; `tracing` is reserved for internal debug output that only appears
//! at raised verbosity.
//!
//! # Errors
//!
//! All sink operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! Stream two diagnostics into an in-memory buffer and inspect the output:
//!
//! ```
//! use nosync_core::{message::Message, nosync_error, nosync_warning};
//! use nosync_logging::{LineMode, MessageSink};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! let skipped = nosync_warning!("skipping 'notes'");
//! let failed = nosync_error!(1, "path 'gone' does not exist");
//!
//! sink.write(&skipped).unwrap();
//! sink.write(&failed).unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert!(output.lines().all(|line| line.starts_with("nosync")));
//!
//! // Render a final message without appending a newline.
//! let mut final_sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
//! final_sink.write(&Message::info("completed")).unwrap();
//! let buffer = final_sink.into_inner();
//! assert!(buffer.ends_with(b"completed"));
//! ```

mod tracing_bridge;
mod verbosity;

pub use tracing_bridge::{LOG_ENV_VAR, init_tracing};
pub use verbosity::Verbosity;

use std::borrow::Borrow;
use std::io::{self, Write};

use nosync_core::message::Message;

/// Controls whether a [`MessageSink`] appends a trailing newline when writing messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered message.
    WithNewline,
    /// Emit the rendered message without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

/// Streaming sink that renders [`Message`] values into an [`io::Write`] target.
///
/// Each call to [`write`](Self::write) renders the supplied message using the
/// configured [`LineMode`]; line-oriented output is the default so batches of
/// diagnostics read like classic command-line tool output.
///
/// # Examples
///
/// Collect diagnostics into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use nosync_core::message::Message;
/// use nosync_logging::MessageSink;
///
/// let mut sink = MessageSink::new(Vec::new());
///
/// sink.write(&Message::warning("marker already present"))?;
/// sink.write(&Message::error(1, "permission denied for 'notes'"))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(output.ends_with('\n'));
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Render a message without appending a newline:
///
/// ```
/// use nosync_core::message::Message;
/// use nosync_logging::{LineMode, MessageSink};
///
/// let mut sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.write(&Message::info("ready"))?;
///
/// assert_eq!(sink.into_inner(), b"nosync info: ready".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct MessageSink<W> {
    writer: W,
    line_mode: LineMode,
}

impl<W> MessageSink<W> {
    /// Creates a new sink that appends a newline after each rendered message.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self { writer, line_mode }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for MessageSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes a single message to the underlying writer.
    pub fn write(&mut self, message: &Message) -> io::Result<()> {
        if self.line_mode.append_newline() {
            message.render_line_to_writer(&mut self.writer)
        } else {
            message.render_to_writer(&mut self.writer)
        }
    }

    /// Writes each message from the iterator to the underlying writer.
    ///
    /// The iterator may yield borrowed or owned [`Message`] values; items that
    /// implement [`Borrow<Message>`] are accepted so callers batching
    /// diagnostics in a [`Vec<Message>`] or array need no intermediate
    /// references.
    ///
    /// # Examples
    ///
    /// ```
    /// use nosync_core::message::Message;
    /// use nosync_logging::MessageSink;
    ///
    /// let mut sink = MessageSink::new(Vec::new());
    /// let messages = [
    ///     Message::info("marked 'notes'"),
    ///     Message::error(1, "path 'gone' does not exist"),
    /// ];
    ///
    /// sink.write_all(messages.iter())?;
    /// let buffer = String::from_utf8(sink.into_inner()).unwrap();
    /// assert_eq!(buffer.lines().count(), messages.len());
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_all<I, M>(&mut self, messages: I) -> io::Result<()>
    where
        I: IntoIterator<Item = M>,
        M: Borrow<Message>,
    {
        for message in messages {
            self.write(message.borrow())?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nosync_core::message::Message;

    #[test]
    fn sink_appends_newlines_by_default() {
        let mut sink = MessageSink::new(Vec::new());
        sink.write(&Message::warning("marker already present"))
            .expect("write succeeds");
        sink.write(&Message::error(1, "path 'gone' does not exist"))
            .expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("nosync warning: marker already present"));
        assert_eq!(
            lines.next(),
            Some("nosync error: path 'gone' does not exist (code 1)")
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn sink_without_newline_preserves_output() {
        let mut sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        sink.write(&Message::info("ready")).expect("write succeeds");

        let output = sink.into_inner();
        assert_eq!(output, b"nosync info: ready".to_vec());
    }

    #[test]
    fn write_all_streams_every_message() {
        let mut sink = MessageSink::new(Vec::new());
        let messages = [
            Message::info("marked 'a'"),
            Message::warning("skipping 'b'"),
            Message::error(1, "permission denied for 'c'"),
        ];
        let expected = messages.len();
        sink.write_all(messages.iter()).expect("batch write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output.lines().count(), expected);
    }

    #[test]
    fn write_all_accepts_owned_messages() {
        let mut sink = MessageSink::new(Vec::new());
        let messages = vec![Message::info("marked 'a'"), Message::info("marked 'b'")];
        let expected = messages.len();

        sink.write_all(messages).expect("batch write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output.lines().count(), expected);
    }

    #[test]
    fn line_mode_can_change_between_writes() {
        let mut sink = MessageSink::new(Vec::new());
        assert_eq!(sink.line_mode(), LineMode::WithNewline);

        sink.write(&Message::info("first")).expect("write succeeds");
        sink.set_line_mode(LineMode::WithoutNewline);
        sink.write(&Message::info("second")).expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output, "nosync info: first\nnosync info: second");
    }
}

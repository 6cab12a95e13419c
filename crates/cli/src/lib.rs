#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `nosync_cli` implements the thin command-line front-end for the `nosync`
//! workspace. The crate is intentionally small: it recognises the supported
//! switches (`--help`/`-h`, `--version`/`-V`, `--dry-run`/`-n`, `--undo`/`-u`,
//! `--verbose`/`-v`, `--xattr`, and `--no-symlink`) and delegates all marker
//! work to [`nosync_core::exclude::run_exclude`].
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts
//! an iterator of arguments together with handles for standard output and
//! error, so tests can drive the complete front-end in process with `Vec<u8>`
//! buffers. Internally a [`clap`](https://docs.rs/clap/) command definition
//! performs the parse; the built-in help and version flags are disabled in
//! favour of a deterministic help snapshot and the banner from
//! [`nosync_core::version::VersionInfoReport`].
//!
//! # Invariants
//!
//! - `run` never panics; unexpected I/O failures surface as non-zero exit
//!   codes.
//! - Version output is delegated to [`VersionInfoReport`] so the CLI stays
//!   byte-identical with the canonical banner used elsewhere.
//! - Diagnostics are rendered through [`nosync_core::message::Message`] and a
//!   [`MessageSink`], keeping the `nosync error: … (code N)` format uniform.
//!
//! # Errors
//!
//! Argument-parsing failures and configuration-level problems (no operands,
//! mechanism missing from the build) exit with code `2`. Per-path failures
//! are printed individually and produce exit code `1` after the whole batch
//! has been processed.
//!
//! # Examples
//!
//! ```
//! use nosync_cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["nosync", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use nosync_core::{
    exclude::{ExcludeConfig, ExcludeSummary, MarkerAction, Mechanism, run_exclude},
    exit_code::{ExitCode, HasExitCode},
    message::Message,
    nosync_error,
    version::{PROGRAM_NAME, VersionInfoReport},
};
use nosync_logging::{MessageSink, Verbosity, init_tracing};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Deterministic help text describing the CLI surface supported by this build.
const HELP_TEXT: &str = concat!(
    "nosync ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "https://github.com/peterbrain/icloud-nosync\n",
    "\n",
    "Usage: nosync [-h] [-V] [-n] [-u] [-v] [--xattr] [--no-symlink] PATH...\n",
    "\n",
    "Prevent a file or directory from syncing with iCloud by adding the\n",
    "nosync extension. The following options are recognised:\n",
    "  -h, --help       Show this help message and exit.\n",
    "  -V, --version    Output version information and exit.\n",
    "  -n, --dry-run    Report the changes without modifying the filesystem.\n",
    "  -u, --undo       Remove the exclusion marker instead of adding it.\n",
    "  -v, --verbose    List each path as it is processed; repeat for debug output.\n",
    "      --xattr      Set the exclusion extended attribute instead of renaming.\n",
    "      --no-symlink Do not leave a compatibility symlink after renaming.\n",
    "\n",
    "Each PATH is processed independently; a failure on one path does not stop\n",
    "the remaining paths. The exit code is 0 when every path succeeded, 1 when\n",
    "any path failed, and 2 for usage errors.\n",
);

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    dry_run: bool,
    undo: bool,
    verbose: u8,
    xattr: bool,
    no_symlink: bool,
    paths: Vec<OsString>,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('n')
                .help("Report the changes without modifying the filesystem.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("undo")
                .long("undo")
                .short('u')
                .help("Remove the exclusion marker instead of adding it.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("List each path as it is processed; repeat for debug output.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("xattr")
                .long("xattr")
                .help("Set the exclusion extended attribute instead of renaming.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-symlink")
                .long("no-symlink")
                .help("Do not leave a compatibility symlink after renaming.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .action(ArgAction::Append)
                .num_args(0..)
                .value_parser(OsStringValueParser::new()),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let show_help = matches.get_flag("help");
    let show_version = matches.get_flag("version");
    let dry_run = matches.get_flag("dry-run");
    let undo = matches.get_flag("undo");
    let verbose = matches.get_count("verbose");
    let xattr = matches.get_flag("xattr");
    let no_symlink = matches.get_flag("no-symlink");
    let paths = matches
        .remove_many::<OsString>("paths")
        .map(|values| values.collect())
        .unwrap_or_default();

    Ok(ParsedArgs {
        show_help,
        show_version,
        dry_run,
        undo,
        verbose,
        xattr,
        no_symlink,
        paths,
    })
}

/// Renders the help text describing the currently supported options.
fn render_help() -> String {
    HELP_TEXT.to_string()
}

/// Extracts the single-line summary from a `clap` diagnostic.
///
/// The rendered error carries a usage block and a help hint; only the first
/// line belongs in the `nosync error:` message.
fn usage_error_text(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string()
}

/// Writes a [`Message`] to the supplied sink, appending a newline.
fn write_message<W: Write>(message: &Message, sink: &mut MessageSink<W>) -> io::Result<()> {
    sink.write(message)
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller. On success, `0` is returned. All diagnostics are rendered using
/// the central [`nosync_core::message`] utilities so the formatting stays
/// consistent with the rest of the workspace.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let mut stderr_sink = MessageSink::new(stderr);
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdout, &mut stderr_sink),
        Err(error) => {
            let code = ExitCode::Usage;
            let message = nosync_error!(code.as_i32(), "{}", usage_error_text(&error));
            if write_message(&message, &mut stderr_sink).is_err() {
                let _ = writeln!(stderr_sink.get_mut(), "{error}");
            }
            code.as_i32()
        }
    }
}

fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, stderr: &mut MessageSink<Err>) -> i32
where
    Out: Write,
    Err: Write,
{
    let ParsedArgs {
        show_help,
        show_version,
        dry_run,
        undo,
        verbose,
        xattr,
        no_symlink,
        paths,
    } = parsed;

    if show_help {
        let help = render_help();
        if stdout.write_all(help.as_bytes()).is_err() {
            return ExitCode::Failure.as_i32();
        }
        return ExitCode::Ok.as_i32();
    }

    if show_version {
        let banner = VersionInfoReport::default().human_readable();
        if stdout.write_all(banner.as_bytes()).is_err() {
            return ExitCode::Failure.as_i32();
        }
        return ExitCode::Ok.as_i32();
    }

    let verbosity = Verbosity::from_verbose_level(verbose);
    init_tracing(verbosity);

    let config = ExcludeConfig::builder()
        .targets(paths.into_iter().map(PathBuf::from))
        .action(if undo {
            MarkerAction::Undo
        } else {
            MarkerAction::Apply
        })
        .mechanism(if xattr {
            Mechanism::Xattr
        } else {
            Mechanism::Suffix
        })
        .dry_run(dry_run)
        .compat_symlink(!no_symlink)
        .build();

    let summary = match run_exclude(&config) {
        Ok(summary) => summary,
        Err(error) => {
            let code = error.exit_code();
            let message = nosync_error!(code.as_i32(), "{error}");
            if write_message(&message, stderr).is_err() {
                let _ = writeln!(stderr.get_mut(), "{error}");
            }
            return code.as_i32();
        }
    };

    if report_events(&summary, dry_run, verbosity, stdout).is_err() {
        return ExitCode::Failure.as_i32();
    }

    for failure in summary.failures() {
        let message = nosync_error!(ExitCode::Failure.as_i32(), "{}", failure.error());
        if write_message(&message, stderr).is_err() {
            let _ = writeln!(stderr.get_mut(), "{}", failure.error());
        }
    }

    summary.exit_code().as_i32()
}

/// Prints one action line per processed target when requested.
///
/// Dry runs always report their would-be changes; otherwise the listing is
/// gated on the verbose flag.
fn report_events<Out: Write>(
    summary: &ExcludeSummary,
    dry_run: bool,
    verbosity: Verbosity,
    stdout: &mut Out,
) -> io::Result<()> {
    if !dry_run && !verbosity.lists_actions() {
        return Ok(());
    }
    for event in summary.events() {
        writeln!(
            stdout,
            "{} '{}'",
            event.kind().label(),
            event.path().display()
        )?;
    }
    Ok(())
}

/// Converts the status returned by [`run`] into a [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `nosync-core` holds the pieces shared by the `nosync` front-end: the
//! process [`exit codes`](exit_code), the user-facing [`message`] type, the
//! [`version`] banner, and the [`exclude`] engine that walks a batch of
//! target paths and applies or removes the sync-exclusion marker on each.
//!
//! # Design
//!
//! The engine treats every target independently. A failing path is recorded
//! in the [`ExcludeSummary`](exclude::ExcludeSummary) and processing moves on
//! to the next operand; only configuration-level problems (no operands, a
//! mechanism missing from the build) abort the run. The summary owns the
//! mapping to the final process exit code so front-ends never hand-compute
//! status values.
//!
//! The marking mechanisms themselves live in `nosync-marker`; this crate
//! re-exports the types callers need through [`exclude`].

pub mod exclude;
pub mod exit_code;
pub mod message;
pub mod version;

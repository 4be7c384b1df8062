// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Summaries, markdown tables and failure reports for UI test-run logs.
//!
//! A log is cut into summary [`LogBlock`]s, each headed by a line like
//! ```text
//! ==== Summary app: Demo | code version: 1.99.0 | os: macOS ====
//! ```
//! and followed by mocha-style `N passing`, `N failing` and `N pending`
//! lines, with soft (non-blocking) failures tagged as `[SOFT FAIL]`.
//!
//! Each block is scanned into [`TestCounts`], turned into pass-rate
//! [`Metrics`] and rendered by one of the [`writer`]s:
//! ```rust
//! use test_log_digest::{writer, Table};
//!
//! let log = "\
//! ==== Summary app: App A | code version: 1.0 | os: macOS ====
//!   10 passing (3m)
//!   2 failing
//! ";
//! let table = writer::render(log, Table::new());
//!
//! assert!(table.contains("| App A | 1.0 | macOS | 10 | 2 | 0 | 🟠 83.33% |"));
//! ```

#![deny(
    macro_use_extern_crate,
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    trivial_casts,
    trivial_numeric_casts
)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_results
)]

pub mod block;
pub mod cli;
pub mod error;
pub mod metrics;
pub mod stats;
pub mod status;
pub mod writer;

#[doc(inline)]
pub use self::{
    block::{blocks, Blocks, Delimiter, Header, LogBlock},
    error::{Error, Result},
    metrics::{Metrics, Percentage},
    stats::TestCounts,
    status::Status,
    writer::{render, Failures, Summary, Table, Writer},
};

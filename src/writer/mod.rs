// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for rendering [`LogBlock`]s into reports.
//!
//! Every report is produced by a [`Writer`], fed with the [`LogBlock`]s of a
//! log by [`render()`]:
//! - [`Summary`]: plain-text summary of every block;
//! - [`Table`]: markdown table with a row per block;
//! - [`Failures`]: markdown details of critical and soft failures.

pub mod failures;
pub mod out;
pub mod summary;
pub mod table;

use crate::block::{Blocks, Delimiter, LogBlock};

#[doc(inline)]
pub use self::{
    failures::Failures,
    out::{Sink, Styles},
    summary::Summary,
    table::Table,
};

/// Message rendered instead of a report when a log has no summary blocks.
pub const NO_SUMMARIES: &str = "No test summaries found in the log.";

/// Renderer of [`LogBlock`]s into a report.
pub trait Writer {
    /// Returns the [`Delimiter`] a log should be cut with for this [`Writer`].
    fn delimiter(&self) -> Delimiter;

    /// Handles the given [`LogBlock`].
    fn handle_block(&mut self, block: &LogBlock<'_>);

    /// Finishes the report, returning its full text.
    fn finish(self) -> String;
}

/// Renders the given log `text` with the given [`Writer`].
pub fn render<W: Writer>(text: &str, mut writer: W) -> String {
    let mut count = 0_usize;
    for block in Blocks::new(text, writer.delimiter()) {
        let header = block.header();
        tracing::debug!(
            app = header.app,
            version = header.version,
            os = header.os,
            "rendering summary block",
        );
        writer.handle_block(&block);
        count += 1;
    }
    tracing::debug!(blocks = count, "log rendered");
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Apps(Vec<String>);

    impl Writer for Apps {
        fn delimiter(&self) -> Delimiter {
            Delimiter::Separator
        }

        fn handle_block(&mut self, block: &LogBlock<'_>) {
            self.0.push(block.header().app.to_owned());
        }

        fn finish(self) -> String {
            self.0.join(",")
        }
    }

    #[test]
    fn render_feeds_blocks_in_order() {
        let log = "\
==== Summary app: A | code version: 1 | os: mac ====
============
garbage
============
==== Summary app: B | code version: 2 | os: linux ====
";

        assert_eq!(render(log, Apps::default()), "A,B");
    }

    #[test]
    fn render_of_empty_log_finishes_empty_writer() {
        assert_eq!(render("", Apps::default()), "");
    }
}

// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Writer`] for the plain-text summary.

use crate::{
    block::{Delimiter, LogBlock, SEPARATOR},
    metrics::Metrics,
    stats::{soft_fail_lines, TestCounts},
};

use super::{
    out::{push_line, Styles},
    Writer, NO_SUMMARIES,
};

/// Substrings of lines which are never copied into a summary.
pub const NOISE: [&str; 2] = ["==========", "WebSocket server closed"];

/// Rule framing the soft fails details section.
const RULE: &str = "------------------------------";

/// [`Writer`] rendering each block as a plain-text summary.
///
/// The block is copied line by line starting from its header, with the count
/// lines replaced by labeled values:
/// ```text
/// ==== Summary app: Demo | code version: 1.0 | os: macOS ====
///   [CRITICAL PASSING PERCENTAGE]: 83.33%
///   [PASSING PERCENTAGE WITH SOFT FAILS]: 83.33%
///   [PASSING]: 10
///   [FAILS]: 2
///   [SOFT FAILS]: 0
/// ```
#[derive(Debug)]
pub struct Summary {
    styles: Styles,
    out: String,
    blocks: usize,
}

impl Summary {
    /// Creates a new [`Summary`] writer styled with the given [`Styles`].
    #[must_use]
    pub fn new(styles: Styles) -> Self {
        Self {
            styles,
            out: String::new(),
            blocks: 0,
        }
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::new(Styles::plain())
    }
}

impl Writer for Summary {
    fn delimiter(&self) -> Delimiter {
        Delimiter::Separator
    }

    fn handle_block(&mut self, block: &LogBlock<'_>) {
        let counts = TestCounts::scan(block.text());
        let metrics = Metrics::from_counts(&counts);
        let (out, styles) = (&mut self.out, &self.styles);

        let mut lines = block
            .from_header()
            .lines()
            .filter(|l| !NOISE.iter().any(|n| l.contains(n)));

        if let Some(header) = lines.next() {
            push_line(out, styles.header(header));
            push_line(
                out,
                format!(
                    "  [CRITICAL PASSING PERCENTAGE]: {}",
                    styles.rate(metrics.critical),
                ),
            );
            push_line(
                out,
                format!(
                    "  [PASSING PERCENTAGE WITH SOFT FAILS]: {}",
                    styles.rate(metrics.soft),
                ),
            );

            let mut soft_printed = false;
            for line in lines {
                if line.contains("passing") {
                    push_line(out, format!("  [PASSING]: {}", counts.passing));
                } else if line.contains("pending") {
                    let skipped = counts.skipped();
                    if skipped > 0 {
                        push_line(out, format!("  [SKIPPED]: {skipped}"));
                    }
                } else if line.contains("failing") {
                    push_line(out, format!("  [FAILS]: {}", counts.failing));
                    push_line(
                        out,
                        format!("  [SOFT FAILS]: {}", counts.soft_fails),
                    );
                    soft_printed = true;
                } else {
                    push_line(out, line);
                }
            }
            if !soft_printed && counts.soft_fails > 0 {
                push_line(out, format!("  [SOFT FAILS]: {}", counts.soft_fails));
            }
        }

        let mut soft = soft_fail_lines(block.text()).peekable();
        if soft.peek().is_some() {
            push_line(out, format!("\n{RULE}"));
            push_line(out, "Soft Fails Details:");
            for (i, line) in soft.enumerate() {
                push_line(out, format!("{}) {}", i + 1, line.trim()));
            }
            push_line(out, RULE);
        }

        push_line(out, format!("\n{SEPARATOR}\n"));
        self.blocks += 1;
    }

    fn finish(self) -> String {
        if self.blocks == 0 {
            return NO_SUMMARIES.to_owned();
        }
        self.out
    }
}

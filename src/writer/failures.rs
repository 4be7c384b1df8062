// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Writer`] for the markdown failure details.

use lazy_regex::{regex, Lazy};
use regex::Regex;

use crate::block::{Delimiter, Header, LogBlock};

use super::{out::push_line, Writer};

/// Markers of lines ending a list of critical failures.
pub const TERMINATORS: [&str; 3] =
    ["INFO: Screenshots", "Test suit numbers", "Soft Fails Details:"];

/// [`Regex`] matching an enumerated failure entry, like `  1) crashes`.
static FAILURE_ENTRY: &Lazy<Regex> = regex!(r"^\s+\d+\) ");

/// [`Regex`] matching an enumerated soft fail, like `2) [SOFT FAIL] flaky`.
static SOFT_FAIL_ENTRY: &Lazy<Regex> = regex!(r"\d+\) \[SOFT FAIL\].*");

/// State of critical failures capturing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Capture {
    /// Lines are ignored.
    #[default]
    Idle,

    /// Lines are collected as critical failures.
    CapturingCritical,
}

impl Capture {
    /// Advances this [`Capture`] state with the given `line`.
    ///
    /// An enumerated failure entry starts capturing, any of [`TERMINATORS`]
    /// stops it. A line matching both leaves the machine [`Capture::Idle`].
    #[must_use]
    pub fn step(self, line: &str) -> Self {
        let mut next = self;
        if FAILURE_ENTRY.is_match(line) {
            next = Self::CapturingCritical;
        }
        if TERMINATORS.iter().any(|t| line.contains(t)) {
            next = Self::Idle;
        }
        next
    }
}

/// Failures found in a single [`LogBlock`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlockFailures<'a> {
    /// [`Header`] of the block.
    pub header: Header<'a>,

    /// Captured critical failures text, trimmed.
    pub critical: Option<String>,

    /// Enumerated soft fail lines, trimmed.
    pub soft: Vec<&'a str>,
}

impl<'a> BlockFailures<'a> {
    /// Collects [`BlockFailures`] of the given [`LogBlock`].
    #[must_use]
    pub fn collect(block: &LogBlock<'a>) -> Self {
        let mut state = Capture::Idle;
        let captured = block
            .lines()
            .filter(|line| {
                state = state.step(line);
                state == Capture::CapturingCritical
            })
            .collect::<Vec<_>>()
            .join("\n");
        let critical = Some(captured.trim())
            .filter(|c| !c.is_empty())
            .map(ToOwned::to_owned);

        let soft = SOFT_FAIL_ENTRY
            .find_iter(block.text())
            .map(|m| m.as_str().trim())
            .collect();

        Self {
            header: block.header(),
            critical,
            soft,
        }
    }

    /// Returns `true` if the block has neither critical nor soft failures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.critical.is_none() && self.soft.is_empty()
    }

    fn render_into(&self, out: &mut String) {
        let Header { app, version, os } = self.header;
        push_line(
            out,
            format!("### Failure Details: {app} ({os}) (VSCode {version})\n"),
        );
        if let Some(critical) = &self.critical {
            push_line(out, "**Critical Failures:**");
            push_line(out, "```text");
            push_line(out, critical);
            push_line(out, "```\n");
        }
        if !self.soft.is_empty() {
            push_line(out, "**Soft Fails:**");
            for line in &self.soft {
                push_line(out, format!("- {line}"));
            }
            out.push('\n');
        }
        push_line(out, "---");
    }
}

/// [`Writer`] rendering markdown details of every block having failures.
///
/// Renders nothing at all if no block has any failure.
#[derive(Clone, Debug, Default)]
pub struct Failures {
    sections: String,
}

impl Failures {
    /// Creates a new [`Failures`] writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Writer for Failures {
    fn delimiter(&self) -> Delimiter {
        Delimiter::Separator
    }

    fn handle_block(&mut self, block: &LogBlock<'_>) {
        let failures = BlockFailures::collect(block);
        if failures.is_empty() {
            return;
        }
        tracing::debug!(
            app = failures.header.app,
            soft = failures.soft.len(),
            critical = failures.critical.is_some(),
            "block has failures",
        );
        failures.render_into(&mut self.sections);
    }

    fn finish(self) -> String {
        if self.sections.is_empty() {
            return String::new();
        }
        format!("## Detailed Failure Logs\n{}", self.sections)
    }
}

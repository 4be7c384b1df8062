// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Test counts extracted from a summary block.

use lazy_regex::{regex, Lazy};
use regex::Regex;

/// Literal tag marking a soft (non-blocking) failure in a log line.
pub const SOFT_FAIL_TAG: &str = "[SOFT FAIL]";

/// Counts of a single test run, as reported in its summary block.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TestCounts {
    /// Number of passed tests.
    pub passing: usize,

    /// Number of failed tests.
    pub failing: usize,

    /// Number of pending tests.
    pub pending: usize,

    /// Number of lines tagged with [`SOFT_FAIL_TAG`].
    pub soft_fails: usize,
}

impl TestCounts {
    /// Scans the given block `text` for its counts.
    ///
    /// Each of `passing`, `failing` and `pending` is the first integer
    /// immediately preceding the respective keyword, or `0` if there is none.
    #[must_use]
    pub fn scan(text: &str) -> Self {
        static PASSING: &Lazy<Regex> = regex!(r"(\d+)\s+passing");
        static FAILING: &Lazy<Regex> = regex!(r"(\d+)\s+failing");
        static PENDING: &Lazy<Regex> = regex!(r"(\d+)\s+pending");

        Self {
            passing: first_count(PASSING, text),
            failing: first_count(FAILING, text),
            pending: first_count(PENDING, text),
            soft_fails: soft_fail_lines(text).count(),
        }
    }

    /// Returns the number of tests with a definite outcome: passed plus
    /// failed.
    ///
    /// Neither pending tests nor soft fails are included. Saturates at
    /// [`usize::MAX`].
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passing.saturating_add(self.failing)
    }

    /// Returns the number of skipped tests: pending ones that aren't soft
    /// fails.
    ///
    /// May be negative, when a log reports more soft fails than pending tests.
    #[must_use]
    pub fn skipped(&self) -> i64 {
        to_i64(self.pending) - to_i64(self.soft_fails)
    }
}

/// Iterates over the lines of `text` carrying the [`SOFT_FAIL_TAG`].
pub fn soft_fail_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|l| l.contains(SOFT_FAIL_TAG))
}

fn first_count(re: &Regex, text: &str) -> usize {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_default()
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

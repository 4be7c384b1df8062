// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pass rates derived from [`TestCounts`].

use std::fmt;

use crate::{stats::TestCounts, status::Status};

/// Percentage value in the `0..=100` range.
///
/// Kept unrounded, [`Display`]ed with two decimals.
///
/// [`Display`]: fmt::Display
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Wraps the given raw `value`.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns `part / whole * 100`, or [`Percentage::ZERO`] if `whole` is
    /// zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            Self::ZERO
        } else {
            Self(part as f64 / whole as f64 * 100.0)
        }
    }

    /// Raw (unrounded) value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the [`Status`] of this [`Percentage`].
    #[must_use]
    pub fn status(self) -> Status {
        Status::of(self)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Pass rates of a single summary block.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Metrics {
    /// Share of passed tests among passed and failed ones.
    pub critical: Percentage,

    /// Share of passed tests among passed, failed and soft-failed ones.
    pub soft: Percentage,
}

impl Metrics {
    /// Derives [`Metrics`] from the given [`TestCounts`].
    ///
    /// Both rates are zero when nothing passed or failed, even if soft fails
    /// were reported.
    #[must_use]
    pub fn from_counts(counts: &TestCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self::default();
        }
        Self {
            critical: Percentage::ratio(counts.passing, total),
            soft: Percentage::ratio(
                counts.passing,
                total.saturating_add(counts.soft_fails),
            ),
        }
    }
}

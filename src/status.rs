// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Status icons of pass rates.

use derive_more::with_trait::Display;

use crate::metrics::Percentage;

/// Traffic-light status of a pass rate.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Status {
    /// Everything passed.
    #[display("🟢")]
    Green,

    /// Above 90%.
    #[display("🟡")]
    Yellow,

    /// Above 80%.
    #[display("🟠")]
    Orange,

    /// Anything lower.
    #[display("🔴")]
    Red,
}

impl Status {
    /// Returns the [`Status`] of the given [`Percentage`].
    ///
    /// The value is bucketed exactly as [`Display`]ed, so the icon always
    /// agrees with the number printed next to it.
    ///
    /// [`Display`]: std::fmt::Display
    #[must_use]
    pub fn of(rate: Percentage) -> Self {
        Self::parse(&rate.to_string()).unwrap_or(Self::Red)
    }

    /// Parses a displayed percentage (like `83.33`) and returns its
    /// [`Status`].
    ///
    /// Returns [`None`] if the `input` isn't a number.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        input
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .map(Self::of_value)
    }

    fn of_value(value: f64) -> Self {
        if value == 100.0 {
            Self::Green
        } else if value > 90.0 {
            Self::Yellow
        } else if value > 80.0 {
            Self::Orange
        } else {
            Self::Red
        }
    }
}

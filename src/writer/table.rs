// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Writer`] for the markdown results table.

use std::fmt;

use itertools::Itertools as _;

use crate::{
    block::{Delimiter, Header, LogBlock},
    metrics::Metrics,
    stats::TestCounts,
};

use super::{Writer, NO_SUMMARIES};

/// Heading and column header lines of the results table.
const TABLE_HEAD: &str = "\
### Test Results Overview

| App | Version | OS | Passing | Failing | Soft Fails | Critical % | Soft % |
| :--- | :--- | :--- | :---: | :---: | :---: | :---: | :---: |
";

/// Single data row of a [`Table`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Row<'a> {
    /// [`Header`] of the summarized block.
    pub header: Header<'a>,

    /// [`TestCounts`] of the summarized block.
    pub counts: TestCounts,

    /// [`Metrics`] derived from the `counts`.
    pub metrics: Metrics,
}

impl<'a> Row<'a> {
    /// Creates a new [`Row`] out of the given [`LogBlock`].
    #[must_use]
    pub fn of(block: &LogBlock<'a>) -> Self {
        let counts = TestCounts::scan(block.text());
        Self {
            header: block.header(),
            counts,
            metrics: Metrics::from_counts(&counts),
        }
    }
}

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            header,
            counts,
            metrics,
        } = self;
        write!(
            f,
            "| {} | {} | {} | {} | {} | {} | {} {}% | {} {}% |",
            header.app,
            header.version,
            header.os,
            counts.passing,
            counts.failing,
            counts.soft_fails,
            metrics.critical.status(),
            metrics.critical,
            metrics.soft.status(),
            metrics.soft,
        )
    }
}

/// [`Writer`] rendering a markdown table with a [`Row`] per block.
#[derive(Clone, Debug, Default)]
pub struct Table {
    rows: Vec<String>,
}

impl Table {
    /// Creates a new empty [`Table`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of data rows rendered so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no data row has been rendered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Writer for Table {
    fn delimiter(&self) -> Delimiter {
        Delimiter::SummaryMarker
    }

    fn handle_block(&mut self, block: &LogBlock<'_>) {
        self.rows.push(Row::of(block).to_string());
    }

    fn finish(self) -> String {
        if self.rows.is_empty() {
            return NO_SUMMARIES.to_owned();
        }
        format!(
            "{TABLE_HEAD}{}\n",
            self.rows.iter().format("\n"),
        )
    }
}

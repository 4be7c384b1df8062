// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Extraction of summary [`LogBlock`]s from a raw test-run log.
//!
//! A log is cut into segments by a [`Delimiter`], and only the segments
//! carrying a summary header line survive:
//! ```text
//! ==== Summary app: <name> | code version: <version> | os: <os> ====
//! ```

use std::{iter::FusedIterator, str};

use lazy_regex::{regex, Lazy};
use regex::Regex;

/// Fixed separator line the test runner prints between summaries.
pub const SEPARATOR: &str = "============";

/// Prefix of a summary header line.
pub const SUMMARY_MARKER: &str = "==== Summary";

/// [`Regex`] matching a summary header line.
///
/// The `==== Summary` prefix is optional, so segments cut right after the
/// marker still match.
static HEADER_REGEX: &Lazy<Regex> = regex!(
    r"(?:==== Summary\s+)?app:\s*(.*?)\s*\|\s*code version:\s*(.*?)\s*\|\s*os:\s*(.*?)\s*===="
);

/// Way a log is cut into segments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Delimiter {
    /// Split on every [`SEPARATOR`], dropping the separator itself.
    Separator,

    /// Cut right before every [`SUMMARY_MARKER`], so each segment starts with
    /// its own header.
    SummaryMarker,
}

impl Delimiter {
    fn segments(self, text: &str) -> Segments<'_> {
        match self {
            Self::Separator => Segments::Split(text.split(SEPARATOR)),
            Self::SummaryMarker => Segments::Marked(text),
        }
    }
}

/// Raw text segments of a log, before any header filtering.
#[derive(Debug)]
enum Segments<'a> {
    Split(str::Split<'a, &'static str>),
    Marked(&'a str),
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Split(split) => split.next(),
            Self::Marked(rest) => {
                let text: &'a str = *rest;
                if text.is_empty() {
                    return None;
                }
                // Skip the marker the segment starts with, so the search
                // finds the next one.
                let from = if text.starts_with(SUMMARY_MARKER) {
                    SUMMARY_MARKER.len()
                } else {
                    0
                };
                let end = text[from..]
                    .find(SUMMARY_MARKER)
                    .map_or(text.len(), |at| at + from);
                let (segment, tail) = text.split_at(end);
                *rest = tail;
                Some(segment)
            }
        }
    }
}

/// Identification of a tested build, taken from a summary header line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Header<'a> {
    /// Name of the tested application.
    pub app: &'a str,

    /// Version of the code under test.
    pub version: &'a str,

    /// Operating system the run happened on.
    pub os: &'a str,
}

/// Segment of a log which carries a summary header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogBlock<'a> {
    text: &'a str,
    header: Header<'a>,
    header_start: usize,
    header_end: usize,
}

impl<'a> LogBlock<'a> {
    /// Parses a [`LogBlock`] out of the given log `segment`.
    ///
    /// Returns [`None`] if the `segment` has no summary header.
    #[must_use]
    pub fn parse(segment: &'a str) -> Option<Self> {
        let caps = HEADER_REGEX.captures(segment)?;
        let whole = caps.get(0)?;
        let field = |i| caps.get(i).map_or("", |m| m.as_str().trim());

        Some(Self {
            text: segment,
            header: Header {
                app: field(1),
                version: field(2),
                os: field(3),
            },
            header_start: whole.start(),
            header_end: whole.end(),
        })
    }

    /// Whole raw text of this [`LogBlock`].
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// [`Header`] of this [`LogBlock`].
    #[must_use]
    pub const fn header(&self) -> Header<'a> {
        self.header
    }

    /// Header line exactly as it appears in the log.
    #[must_use]
    pub fn header_line(&self) -> &'a str {
        &self.text[self.header_start..self.header_end]
    }

    /// Text of this [`LogBlock`] starting at its header line.
    #[must_use]
    pub fn from_header(&self) -> &'a str {
        &self.text[self.header_start..]
    }

    /// Lines of this [`LogBlock`], in order.
    pub fn lines(&self) -> str::Lines<'a> {
        self.text.lines()
    }
}

/// Lazy sequence of the [`LogBlock`]s of a log.
///
/// Segments without a summary header are silently dropped.
#[derive(Debug)]
pub struct Blocks<'a> {
    segments: Segments<'a>,
}

impl<'a> Blocks<'a> {
    /// Creates new [`Blocks`] of the given log `text`, cut by the given
    /// [`Delimiter`].
    #[must_use]
    pub fn new(text: &'a str, delimiter: Delimiter) -> Self {
        Self {
            segments: delimiter.segments(text),
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = LogBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for segment in self.segments.by_ref() {
            if let Some(block) = LogBlock::parse(segment) {
                return Some(block);
            }
            if !segment.trim().is_empty() {
                tracing::debug!(
                    len = segment.len(),
                    "segment has no summary header, skipping",
                );
            }
        }
        None
    }
}

impl FusedIterator for Blocks<'_> {}

/// Shortcut for [`Blocks::new()`].
#[must_use]
pub fn blocks(text: &str, delimiter: Delimiter) -> Blocks<'_> {
    Blocks::new(text, delimiter)
}

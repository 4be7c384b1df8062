// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for writing output.

use std::{
    borrow::Cow,
    fs,
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use console::Style;

use crate::{
    cli::Coloring,
    error::{Error, Result},
    metrics::Percentage,
    status::Status,
};

/// [`Style`]s for terminal output.
#[derive(Debug)]
pub struct Styles {
    /// [`Style`] for rendering good rates.
    pub ok: Style,

    /// [`Style`] for rendering rates which are neither good nor bad.
    pub warn: Style,

    /// [`Style`] for rendering bad rates.
    pub err: Style,

    /// [`Style`] for rendering __bold__ headers.
    pub header: Style,

    /// Indicates whether the output should be styled at all.
    pub is_present: bool,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            err: Style::new().red(),
            header: Style::new().blue().bold(),
            is_present: console::Term::stdout().is_term()
                && console::colors_enabled(),
        }
    }
}

impl Styles {
    /// Creates new [`Styles`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates new [`Styles`] honoring the given [`Coloring`] policy.
    #[must_use]
    pub fn with_coloring(coloring: Coloring) -> Self {
        let mut styles = Self::new();
        match coloring {
            Coloring::Auto => {}
            Coloring::Always => styles.is_present = true,
            Coloring::Never => styles.is_present = false,
        }
        styles
    }

    /// Creates new [`Styles`] never applying any style.
    #[must_use]
    pub fn plain() -> Self {
        Self::with_coloring(Coloring::Never)
    }

    /// If styling is enabled colors `input` with [`Styles::header`] color and
    /// makes it __bold__, or leaves "as is" otherwise.
    #[must_use]
    pub fn header<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.header, input)
    }

    /// Renders the given [`Percentage`] followed by a `%` sign, colored by its
    /// [`Status`] if styling is enabled.
    #[must_use]
    pub fn rate(&self, rate: Percentage) -> Cow<'static, str> {
        let style = match rate.status() {
            Status::Green => &self.ok,
            Status::Yellow | Status::Orange => &self.warn,
            Status::Red => &self.err,
        };
        self.apply(style, format!("{rate}%"))
    }

    fn apply<'a>(
        &self,
        style: &Style,
        input: impl Into<Cow<'a, str>>,
    ) -> Cow<'a, str> {
        if self.is_present {
            style
                .clone()
                .force_styling(true)
                .apply_to(input.into())
                .to_string()
                .into()
        } else {
            input.into()
        }
    }
}

/// Destination of a rendered report.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Sink {
    /// Standard output.
    Stdout,

    /// Step-summary file, appended to.
    StepSummary(PathBuf),
}

impl Sink {
    /// Picks the [`Sink::StepSummary`] if its path is given and isn't blank,
    /// or the [`Sink::Stdout`] otherwise.
    #[must_use]
    pub fn resolve(step_summary: Option<&Path>) -> Self {
        match step_summary {
            Some(path) if !path.as_os_str().is_empty() => {
                Self::StepSummary(path.to_owned())
            }
            _ => Self::Stdout,
        }
    }

    /// Writes the given `report` into this [`Sink`].
    ///
    /// The standard output always receives a trailing newline, while the
    /// step-summary file gets the `report` unchanged.
    ///
    /// # Errors
    ///
    /// If the standard output or the step-summary file can't be written to.
    pub fn emit(&self, report: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(report.as_bytes())?;
                if !report.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
            Self::StepSummary(path) => {
                tracing::info!(path = %path.display(), "appending to step summary");
                fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .and_then(|mut f| f.write_all(report.as_bytes()))
                    .map_err(|e| Error::sink(path, e))?;
            }
        }
        Ok(())
    }
}

/// Appends the given `line` and a newline to `out`.
pub(crate) fn push_line(out: &mut String, line: impl AsRef<str>) {
    out.push_str(line.as_ref());
    out.push('\n');
}

// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI (command line interface) of the tools.
//!
//! All the tools share the same [`Opts`]; a [`Tool`] decides which report is
//! rendered and where it goes.

use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
    str::FromStr,
};

use clap::{CommandFactory as _, FromArgMatches as _};
use smart_default::SmartDefault;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt as _,
    util::SubscriberInitExt as _, Layer as _,
};

use crate::{
    error::{self, Error},
    writer::{self, Failures, Sink, Styles, Summary, Table},
};

/// CLI options shared by all the tools.
#[derive(clap::Parser, Clone, Debug, SmartDefault)]
#[command(version)]
pub struct Opts {
    /// Test-run log to read.
    #[arg(value_name = "LOGFILE")]
    pub log_file: PathBuf,

    /// File to append the report to instead of printing it.
    ///
    /// Ignored by `make-summary`, which always prints.
    #[arg(long, value_name = "path", env = "GITHUB_STEP_SUMMARY")]
    pub step_summary: Option<PathBuf>,

    /// Coloring policy for a console output.
    #[arg(long, value_name = "auto|always|never", default_value = "auto")]
    #[default(Coloring::Auto)]
    pub color: Coloring,

    /// Verbosity of diagnostic logs on stderr.
    ///
    /// `-v` shows info, `-vv` debug, `-vvv` trace messages.
    #[arg(short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Opts {
    /// Returns the [`LevelFilter`] of diagnostic logs requested by
    /// [`Opts::verbose`].
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Initializes a global [`tracing::Subscriber`] writing to stderr, with a
    /// default [`fmt::Layer`] filtered by [`Opts::log_level()`].
    ///
    /// Does nothing if a global subscriber is set already.
    ///
    /// [`fmt::Layer`]: tracing_subscriber::fmt::Layer
    pub fn init_tracing(&self) {
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false);
        if let Err(e) = tracing_subscriber::registry()
            .with(self.log_level().and_then(layer))
            .try_init()
        {
            tracing::trace!(error = %e, "global subscriber is set already");
        }
    }
}

/// Possible policies of a [`console`] output coloring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Coloring {
    /// Coloring only if the output is a terminal supporting colors.
    Auto,

    /// Forcing of a colored output.
    Always,

    /// Forcing of a non-colored output.
    Never,
}

impl FromStr for Coloring {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err("possible options: auto, always, never"),
        }
    }
}

/// Command-line tool, one per report kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tool {
    /// Plain-text summary of every block, always printed.
    MakeSummary,

    /// Markdown results table.
    SummaryTable,

    /// Markdown failure details.
    ReviewFailures,
}

impl Tool {
    /// Binary name of this [`Tool`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MakeSummary => "make-summary",
            Self::SummaryTable => "summary-table",
            Self::ReviewFailures => "review-failures",
        }
    }

    /// One-line description of this [`Tool`].
    #[must_use]
    pub const fn about(self) -> &'static str {
        match self {
            Self::MakeSummary => {
                "Print a plain-text summary of every test run in a log"
            }
            Self::SummaryTable => {
                "Render a markdown table of the test runs in a log"
            }
            Self::ReviewFailures => {
                "Render markdown details of the failures in a log"
            }
        }
    }

    /// Parses [`Opts`] of this [`Tool`] from the given `args`.
    ///
    /// # Errors
    ///
    /// If the `args` are invalid, or help or version was requested.
    pub fn try_parse_from<I, T>(self, args: I) -> Result<Opts, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Opts::command()
            .name(self.name())
            .bin_name(self.name())
            .about(self.about())
            .try_get_matches_from(args)?;
        Opts::from_arg_matches(&matches)
    }

    /// Renders the report of this [`Tool`] for the given log `text`.
    #[must_use]
    pub fn render(self, text: &str, styles: Styles) -> String {
        match self {
            Self::MakeSummary => writer::render(text, Summary::new(styles)),
            Self::SummaryTable => writer::render(text, Table::new()),
            Self::ReviewFailures => writer::render(text, Failures::new()),
        }
    }

    /// Returns the [`Sink`] the report of this [`Tool`] goes to.
    #[must_use]
    pub fn sink(self, step_summary: Option<&Path>) -> Sink {
        match self {
            Self::MakeSummary => Sink::Stdout,
            Self::SummaryTable | Self::ReviewFailures => {
                Sink::resolve(step_summary)
            }
        }
    }

    /// Runs this [`Tool`] with the given [`Opts`].
    ///
    /// # Errors
    ///
    /// If the log can't be read, or the report can't be written.
    pub fn run(self, opts: &Opts) -> error::Result<()> {
        let text = read_log(&opts.log_file)?;
        let sink = self.sink(opts.step_summary.as_deref());
        let styles = match sink {
            Sink::Stdout => Styles::with_coloring(opts.color),
            Sink::StepSummary(_) => Styles::plain(),
        };
        let report = self.render(&text, styles);

        if report.is_empty() {
            tracing::info!("nothing to report");
            return Ok(());
        }
        sink.emit(&report)
    }

    /// Entry point of this [`Tool`]'s binary.
    ///
    /// Exits with `2` on invalid arguments and `1` on any [`Error`].
    #[must_use]
    pub fn main(self) -> ExitCode {
        let opts = match self.try_parse_from(std::env::args_os()) {
            Ok(opts) => opts,
            Err(e) => e.exit(),
        };
        opts.init_tracing();

        match self.run(&opts) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::debug!(error = ?e, "run failed");
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

/// Reads the whole log at `path`, decoding it lossily as UTF-8.
///
/// # Errors
///
/// [`Error::NotFound`] if there is no such file, [`Error::Read`] on any other
/// failure.
pub fn read_log(path: &Path) -> error::Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::reading(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "log read");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

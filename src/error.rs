// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of the command-line tools.
//!
//! Only reading the log and writing the report can fail. Anything odd inside
//! a log (a block without a header, a missing count) is never an error: such
//! blocks are skipped or their counts default to zero.

use std::{io, path::PathBuf};

use derive_more::with_trait::{Display, Error as StdError};

/// Fatal errors of a tool invocation.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// The log file doesn't exist.
    #[display("file '{}' not found.", path.display())]
    NotFound {
        /// Path that was requested.
        #[error(not(source))]
        path: PathBuf,
    },

    /// The log file exists, but couldn't be read.
    #[display("failed to read '{}': {source}", path.display())]
    Read {
        /// Path of the log file.
        #[error(not(source))]
        path: PathBuf,

        /// Underlying I/O error.
        source: io::Error,
    },

    /// The step-summary file couldn't be opened or appended to.
    #[display("failed to write step summary '{}': {source}", path.display())]
    Sink {
        /// Path of the step-summary file.
        #[error(not(source))]
        path: PathBuf,

        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing to the standard output failed.
    #[display("failed to write output: {_0}")]
    Output(io::Error),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classifies an [`io::Error`] which happened while reading the log at
    /// `path`.
    #[must_use]
    pub fn reading(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }

    /// Creates a new [`Error::Sink`].
    #[must_use]
    pub fn sink(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Sink {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is an [`Error::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Output(err)
    }
}

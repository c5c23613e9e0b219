//! Error types for corpus reading, training and reporting.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the fallible parts of this crate.
/// The probability arithmetic itself never fails;
/// degenerate models produce `NaN` or `-inf` instead.
#[derive(Debug, Error)]
pub enum NBayesError {
    /// Reading a file or directory of the corpus failed.
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `<root>/<split>/<label>` is missing.
    #[error("label directory `{}` does not exist", .0.display())]
    MissingLabelDirectory(PathBuf),

    /// A string could not be parsed into a [`Label`](crate::Label).
    #[error("unknown label `{0}`. expected `pos` or `neg`")]
    UnknownLabel(String),

    /// A bag of words carried a negative or non-finite count.
    #[error("token `{token}` has an invalid count {count}. counts must be finite and non-negative")]
    NegativeCount { token: String, count: f64 },

    /// The evaluation corpus has no documents.
    #[error("cannot evaluate a classifier over an empty corpus")]
    EmptyCorpus,

    /// The sweep records could not be serialized.
    #[error("failed to write the sweep log: {0}")]
    Serialize(#[from] serde_json::Error),

    /// `plotters` failed to render the chart.
    #[error("failed to draw the chart: {0}")]
    Plot(String),
}

impl NBayesError {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Result type used across this crate.
pub type Result<T> = std::result::Result<T, NBayesError>;

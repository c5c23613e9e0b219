//! This directory provides some features for research
//! on a trained classifier.
//! - Accuracy over a test corpus, with one retained misclassification
//! - Accuracy for each smoothing parameter in a list (alpha sweep)
//! - Accuracy-vs-alpha chart

/// Provides the accuracy evaluation loop.
pub mod evaluation;

/// Provides a sweep over smoothing parameters with logging.
pub mod alpha_sweep;

/// Draws the accuracy-vs-alpha chart.
pub mod chart;

pub use evaluation::{
    Evaluation,
    EvaluationReport,
    Misclassified,
};

pub use alpha_sweep::{
    AlphaSweep,
    SweepRecord,
};

pub use chart::plot_accuracy;

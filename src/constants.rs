//! Default values and fixed names used across the crate.

pub const DEFAULT_ALPHA:               f64 = 1f64;
pub const DEFAULT_MISCLASSIFIED_INDEX: usize = 50;

pub const POSITIVE_DIR: &str = "pos";
pub const NEGATIVE_DIR: &str = "neg";
pub const TRAIN_DIR:    &str = "train";
pub const TEST_DIR:     &str = "test";

pub const SWEEP_CSV_HEADER: &str = "Alpha,Accuracy,Correct,Total,Time\n";
pub const CHART_SIZE: (u32, u32) = (800, 600);

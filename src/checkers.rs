//! This file defines some functions that checks some pre-conditions
//! E.g., the range of the smoothing parameter.

/// Check whether the smoothing parameter `alpha` is valid or not.
#[inline(always)]
pub fn smoothing_parameter(alpha: f64) {
    assert!(
        alpha.is_finite() && alpha >= 0f64,
        "smoothing parameter `alpha` must be a finite non-negative number. \
        got `alpha = {alpha}.`"
    );
}

/// Check the minimum number of documents per worker.
#[inline(always)]
pub fn chunk_size(n: usize) {
    assert!(n > 0, "the chunk size must be positive. got {n}.");
}

/// Check the (1-based) index of the retained misclassified document.
#[inline(always)]
pub fn misclassified_index(index: usize) {
    assert!(
        index > 0,
        "the index of the retained misclassification is 1-based. got {index}."
    );
}

//! The seam between a trained model and the code that evaluates it.
//!
//! Evaluation and the alpha sweep in [`research`](crate::research)
//! only need something that maps a bag-of-words to a [`Label`],
//! so they are written against this trait rather than
//! against [`NBayesClassifier`](crate::NBayesClassifier).
use rayon::prelude::*;

use crate::{BagOfWords, Label};


/// A trait that defines the decision rule of a binary text classifier.
pub trait Classifier {

    /// Predicts the label of the given document
    /// under the smoothing parameter `alpha`.
    fn classify(&self, bag: &BagOfWords, alpha: f64) -> Label;


    /// Predicts the labels of the given documents.
    /// The `i`-th prediction corresponds to `bags[i]`.
    fn classify_all(&self, bags: &[BagOfWords], alpha: f64) -> Vec<Label>
        where Self: Sync
    {
        bags.par_iter()
            .map(|bag| self.classify(bag, alpha))
            .collect()
    }
}

use colored::Colorize;
use rayon::prelude::*;
use serde::{
    Serialize,
    Deserialize,
};
use tracing::debug;

use std::fmt;

use crate::{
    Classifier,
    Corpus,
    Label,
    Tokenizer,
};
use crate::checkers;
use crate::constants::{DEFAULT_ALPHA, DEFAULT_MISCLASSIFIED_INDEX};
use crate::error::{NBayesError, Result};


/// A misclassified document kept for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misclassified {
    /// The raw text.
    pub text: String,
    /// The true label (the classifier predicted the other one).
    pub label: Label,
}


impl fmt::Display for Misclassified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            "One misclassified review which is actually a".bold(),
            self.label.to_string().bold().yellow(),
        )?;
        write!(f, "{}", self.text)
    }
}


/// The result of [`Evaluation::run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// The smoothing parameter used for classification.
    pub alpha: f64,
    /// Number of correctly classified documents.
    pub n_correct: usize,
    /// Number of classified documents.
    pub n_total: usize,
    /// The retained misclassified document, if there were enough errors.
    pub misclassified: Option<Misclassified>,
}


impl EvaluationReport {
    /// Accuracy as a percentage in `[0, 100]`.
    pub fn accuracy(&self) -> f64 {
        100f64 * self.n_correct as f64 / self.n_total as f64
    }


    /// Number of misclassified documents.
    pub fn n_incorrect(&self) -> usize {
        self.n_total - self.n_correct
    }
}


/// Measures the accuracy of a classifier over a labeled corpus.
///
/// Documents are classified in parallel and then scanned in corpus order,
/// so the retained misclassification is the same as in a sequential run.
/// # Example
/// ```no_run
/// use textbayes::prelude::*;
/// use textbayes::research::Evaluation;
///
/// # let (train, test) = (Corpus::default(), Corpus::default());
/// let nbayes = TextNB::init();
/// let f = nbayes.train(&train).unwrap();
///
/// let report = Evaluation::new(&f, nbayes.tokenizer())
///     .alpha(1.0)
///     .retain_misclassified(50)
///     .run(&test)
///     .unwrap();
/// println!("accuracy: {:.2}%", report.accuracy());
/// if let Some(review) = report.misclassified {
///     println!("{review}");
/// }
/// ```
pub struct Evaluation<'a, H, T: ?Sized> {
    classifier: &'a H,
    tokenizer: &'a T,
    alpha: f64,
    misclassified_index: usize,
}


impl<'a, H, T: ?Sized> Evaluation<'a, H, T> {
    /// Construct a new instance of `Evaluation.`
    pub fn new(classifier: &'a H, tokenizer: &'a T) -> Self {
        Self {
            classifier,
            tokenizer,
            alpha: DEFAULT_ALPHA,
            misclassified_index: DEFAULT_MISCLASSIFIED_INDEX,
        }
    }


    /// Set the smoothing parameter.
    /// Default value is `1.0`.
    pub fn alpha(mut self, alpha: f64) -> Self {
        checkers::smoothing_parameter(alpha);
        self.alpha = alpha;
        self
    }


    /// Keep the `index`-th (1-based) misclassified document.
    /// Default value is `50`.
    pub fn retain_misclassified(mut self, index: usize) -> Self {
        checkers::misclassified_index(index);
        self.misclassified_index = index;
        self
    }
}


impl<H, T> Evaluation<'_, H, T>
    where H: Classifier + Sync,
          T: Tokenizer + Sync + ?Sized,
{
    /// Classifies every document of `corpus` and counts the hits.
    pub fn run(&self, corpus: &Corpus) -> Result<EvaluationReport> {
        if corpus.is_empty() {
            return Err(NBayesError::EmptyCorpus);
        }

        let predictions = corpus.documents()
            .par_iter()
            .map(|doc| {
                let bag = self.tokenizer.tokenize(doc.text());
                self.classifier.classify(&bag, self.alpha)
            })
            .collect::<Vec<Label>>();

        let mut n_correct = 0_usize;
        let mut n_incorrect = 0_usize;
        let mut misclassified = None;
        for (doc, predicted) in corpus.iter().zip(predictions) {
            if predicted == doc.label() {
                n_correct += 1;
                continue;
            }
            n_incorrect += 1;
            if n_incorrect == self.misclassified_index {
                misclassified = Some(Misclassified {
                    text: doc.text().to_string(),
                    label: doc.label(),
                });
            }
        }

        let report = EvaluationReport {
            alpha: self.alpha,
            n_correct,
            n_total: corpus.len(),
            misclassified,
        };
        debug!(
            alpha = self.alpha,
            n_correct,
            n_total = report.n_total,
            "evaluated classifier"
        );
        Ok(report)
    }
}

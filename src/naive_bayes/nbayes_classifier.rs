use std::cmp::Ordering;

use crate::{
    BagOfWords,
    Classifier,
    Label,
};
use crate::checkers;

use super::count_store::CountStore;
use super::statistics::CorpusStatistics;


/// Naive Bayes text classifier.
///
/// This is the read-only (trained) side of the model.
/// It never mutates its statistics, so it can be shared
/// across threads once training is over.
///
/// A classifier built from a store that has no document for a class
/// still answers queries, but the answers are degenerate
/// (`NaN` or `-inf`). Use [`NBayesClassifier::is_trained`] to guard.
#[derive(Debug, Clone, PartialEq)]
pub struct NBayesClassifier {
    pub(super) store: CountStore,
}


impl From<CountStore> for NBayesClassifier {
    fn from(store: CountStore) -> Self {
        Self { store }
    }
}


impl NBayesClassifier {
    /// Freezes `store` into a classifier.
    pub fn new(store: CountStore) -> Self {
        Self { store }
    }


    /// Returns `true` if both classes have at least one training document.
    pub fn is_trained(&self) -> bool {
        Label::ALL.iter()
            .all(|&label| self.store.total_doc_count(label) > 0)
    }


    /// The underlying statistics.
    #[inline]
    pub fn counts(&self) -> &CountStore {
        &self.store
    }


    /// Returns `P(word | label)` without smoothing.
    /// Words never seen in `label` get `0`.
    #[inline]
    pub fn p_word_given_label(&self, word: &str, label: Label) -> f64 {
        self.store.word_counts(label).count_or_zero(word)
            / self.store.total_word_count(label)
    }


    /// Returns `P(word | label)` with `alpha` pseudo-counts per
    /// vocabulary word:
    ///
    /// `(count(word, label) + alpha) / (total(label) + alpha * |V|)`
    #[inline]
    pub fn p_word_given_label_and_alpha(
        &self,
        word: &str,
        label: Label,
        alpha: f64,
    ) -> f64
    {
        checkers::smoothing_parameter(alpha);
        let n_vocab = self.store.vocabulary_size() as f64;
        (self.store.word_counts(label).count_or_zero(word) + alpha)
            / (self.store.total_word_count(label) + alpha * n_vocab)
    }


    /// Computes the smoothed log-likelihood of `bag` given `label`.
    ///
    /// Tokens outside the vocabulary are skipped.
    /// Each distinct token contributes its log-probability once,
    /// whatever its count in `bag` is.
    pub fn log_likelihood(&self, bag: &BagOfWords, label: Label, alpha: f64)
        -> f64
    {
        let vocab = self.store.vocabulary();
        bag.tokens()
            .filter(|token| vocab.contains(*token))
            .map(|token| {
                self.p_word_given_label_and_alpha(token, label, alpha).ln()
            })
            .sum::<f64>()
    }


    /// Returns the log of the fraction of training documents
    /// labeled `label`.
    pub fn log_prior(&self, label: Label) -> f64 {
        let n_docs = self.store.n_documents() as f64;
        (self.store.total_doc_count(label) as f64 / n_docs).ln()
    }


    /// Returns `log P(bag | label) + log P(label)`.
    /// The marginal `log P(bag)` is omitted
    /// since it does not depend on the label.
    #[inline]
    pub fn unnormalized_log_posterior(
        &self,
        bag: &BagOfWords,
        label: Label,
        alpha: f64,
    ) -> f64
    {
        self.log_likelihood(bag, label, alpha) + self.log_prior(label)
    }


    /// Computes the unnormalized log-posteriors of the classes +/-
    /// for the given document.
    pub fn log_posteriors(&self, bag: &BagOfWords, alpha: f64) -> (f64, f64) {
        let ln_p = self.unnormalized_log_posterior(bag, Label::Positive, alpha);
        let ln_n = self.unnormalized_log_posterior(bag, Label::Negative, alpha);
        (ln_p, ln_n)
    }


    /// Returns the ratio `P(word | pos) / P(word | neg)` with smoothing.
    /// Values above `1` mean `word` leans positive.
    pub fn likelihood_ratio(&self, word: &str, alpha: f64) -> f64 {
        self.p_word_given_label_and_alpha(word, Label::Positive, alpha)
            / self.p_word_given_label_and_alpha(word, Label::Negative, alpha)
    }


    /// Returns the `n` most frequent tokens of `label`
    /// with their raw counts, in descending order of count.
    /// Equal counts are ordered lexicographically by token.
    pub fn top_n(&self, label: Label, n: usize) -> Vec<(&str, f64)> {
        let mut counts = self.store.word_counts(label)
            .iter()
            .collect::<Vec<_>>();
        counts.sort_by(|(t1, c1), (t2, c2)| {
            c2.partial_cmp(c1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| t1.cmp(t2))
        });
        counts.truncate(n);
        counts
    }


    /// Number of distinct word types seen during training.
    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.store.vocabulary_size()
    }


    /// Returns the five-field summary of the training corpus.
    pub fn statistics(&self) -> CorpusStatistics {
        self.store.statistics()
    }
}


impl Classifier for NBayesClassifier {
    /// Positive only if its posterior is strictly greater.
    /// Ties (and `NaN`s) go to the negative class.
    fn classify(&self, bag: &BagOfWords, alpha: f64) -> Label {
        let (ln_p, ln_n) = self.log_posteriors(bag, alpha);
        if ln_p > ln_n { Label::Positive } else { Label::Negative }
    }
}

use std::collections::HashSet;

use crate::{
    BagOfWords,
    Label,
    Tokenizer,
};
use crate::error::{NBayesError, Result};

use super::statistics::CorpusStatistics;


/// The sufficient statistics of the Naive Bayes model.
///
/// A `CountStore` is the writable (untrained) side of the model.
/// Feed it one bag-of-words per training document via
/// [`CountStore::update`] and turn it into a read-only
/// [`NBayesClassifier`](crate::NBayesClassifier) once training is done.
/// Accumulation is commutative, so the order of the documents
/// does not matter and partial stores can be [merged](CountStore::merge).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountStore {
    pub(super) vocab: HashSet<String>,
    pub(super) word_counts: [BagOfWords; 2],
    pub(super) total_word_counts: [f64; 2],
    pub(super) total_doc_counts: [usize; 2],
}


impl CountStore {
    /// Construct an empty store.
    pub fn new() -> Self {
        Self::default()
    }


    /// Adds the document `bag` of class `label` to the statistics.
    ///
    /// Every `(token, count)` pair is added to the word counts and
    /// the total word count of `label`, the token joins the vocabulary,
    /// and the document count of `label` goes up by exactly one.
    ///
    /// A bag holding a negative or non-finite count is rejected
    /// and leaves the store untouched.
    pub fn update(&mut self, bag: &BagOfWords, label: Label) -> Result<()> {
        let invalid = bag.iter()
            .find(|(_, count)| !count.is_finite() || *count < 0f64);
        if let Some((token, count)) = invalid {
            return Err(NBayesError::NegativeCount {
                token: token.to_string(),
                count,
            });
        }

        let k = label.index();
        for (token, count) in bag.iter() {
            self.word_counts[k].add(token, count);
            self.total_word_counts[k] += count;
            if !self.vocab.contains(token) {
                self.vocab.insert(token.to_string());
            }
        }
        self.total_doc_counts[k] += 1;
        Ok(())
    }


    /// Tokenizes `doc` with `tokenizer` and adds it to the statistics.
    pub fn tokenize_and_update<T>(
        &mut self,
        doc: &str,
        label: Label,
        tokenizer: &T,
    ) -> Result<()>
        where T: Tokenizer + ?Sized
    {
        let bag = tokenizer.tokenize(doc);
        self.update(&bag, label)
    }


    /// Merges two partial stores by per-label, per-token summation.
    /// The result equals the store obtained by
    /// feeding both document sets into a single store.
    pub fn merge(mut self, other: Self) -> Self {
        self.merge_from(other);
        self
    }


    /// In-place version of [`CountStore::merge`].
    pub fn merge_from(&mut self, other: Self) {
        let CountStore {
            vocab,
            word_counts,
            total_word_counts,
            total_doc_counts,
        } = other;

        self.vocab.extend(vocab);
        for (k, counts) in word_counts.into_iter().enumerate() {
            counts.into_iter()
                .for_each(|(token, count)| self.word_counts[k].add(token, count));
            self.total_word_counts[k] += total_word_counts[k];
            self.total_doc_counts[k] += total_doc_counts[k];
        }
    }


    /// Cumulative word counts of the documents labeled `label`.
    #[inline]
    pub fn word_counts(&self, label: Label) -> &BagOfWords {
        &self.word_counts[label.index()]
    }


    /// Total number of word tokens seen for `label`.
    #[inline]
    pub fn total_word_count(&self, label: Label) -> f64 {
        self.total_word_counts[label.index()]
    }


    /// Number of training documents labeled `label`.
    #[inline]
    pub fn total_doc_count(&self, label: Label) -> usize {
        self.total_doc_counts[label.index()]
    }


    /// Number of training documents over both labels.
    #[inline]
    pub fn n_documents(&self) -> usize {
        self.total_doc_counts.iter().sum::<usize>()
    }


    /// The set of all tokens seen during training.
    #[inline]
    pub fn vocabulary(&self) -> &HashSet<String> {
        &self.vocab
    }


    /// Number of distinct word types seen during training.
    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.vocab.len()
    }


    /// Returns the five-field summary of the training corpus.
    pub fn statistics(&self) -> CorpusStatistics {
        CorpusStatistics::from(self)
    }
}

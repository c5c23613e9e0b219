use rayon::prelude::*;
use tracing::info;

use crate::{
    BagOfWords,
    Corpus,
    Tokenizer,
    WhitespaceTokenizer,
};
use crate::checkers;
use crate::error::Result;

use super::count_store::CountStore;
use super::nbayes_classifier::NBayesClassifier;


/// A factory that produces an `NBayesClassifier`
/// from a labeled training corpus.
///
/// Training is a single batch pass:
/// every document is tokenized and added to a [`CountStore`],
/// which is then frozen into the classifier.
/// # Example
/// ```no_run
/// use textbayes::prelude::*;
///
/// let train = CorpusReader::default()
///     .root("/path/to/corpus")
///     .split(Split::Train)
///     .read()
///     .unwrap();
///
/// let nbayes = TextNB::init();
/// let f = nbayes.train(&train).unwrap();
/// f.statistics().print_report();
///
/// let bag = nbayes.tokenize("A wonderful, moving film");
/// let label = f.classify(&bag, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct TextNB<T> {
    tokenizer: T,
    min_chunk_len: Option<usize>,
}


impl TextNB<WhitespaceTokenizer> {
    /// Initializes the `TextNB` instance
    /// with the whitespace tokenizer.
    pub fn init() -> Self {
        Self::with_tokenizer(WhitespaceTokenizer)
    }
}


impl<T: Tokenizer> TextNB<T> {
    /// Initializes the `TextNB` instance with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self { tokenizer, min_chunk_len: None }
    }


    /// Set the minimum number of documents each worker handles
    /// in [`TextNB::train_parallel`].
    /// By default, `rayon` decides.
    pub fn chunk_size(mut self, size: usize) -> Self {
        checkers::chunk_size(size);
        self.min_chunk_len = Some(size);
        self
    }


    /// The tokenizer used for training.
    /// Classify with the same tokenizer.
    #[inline]
    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }


    /// Tokenizes `doc` with the tokenizer of this trainer.
    #[inline]
    pub fn tokenize(&self, doc: &str) -> BagOfWords {
        self.tokenizer.tokenize(doc)
    }


    /// Accumulates the statistics of `corpus` sequentially.
    pub fn count(&self, corpus: &Corpus) -> Result<CountStore> {
        let mut store = CountStore::new();
        for doc in corpus {
            store.tokenize_and_update(doc.text(), doc.label(), &self.tokenizer)?;
        }
        Ok(store)
    }


    /// Trains a classifier on `corpus` in one sequential pass.
    pub fn train(&self, corpus: &Corpus) -> Result<NBayesClassifier> {
        let store = self.count(corpus)?;
        Ok(finish(store))
    }
}


impl<T: Tokenizer + Sync> TextNB<T> {
    /// Accumulates the statistics of `corpus` in parallel.
    /// Every worker fills a private `CountStore`;
    /// the partial stores are merged at the end.
    pub fn count_parallel(&self, corpus: &Corpus) -> Result<CountStore> {
        corpus.documents()
            .par_iter()
            .with_min_len(self.min_chunk_len.unwrap_or(1))
            .try_fold(CountStore::new, |mut store, doc| -> Result<CountStore> {
                store.tokenize_and_update(doc.text(), doc.label(), &self.tokenizer)?;
                Ok(store)
            })
            .try_reduce(CountStore::new, |a, b| Ok(a.merge(b)))
    }


    /// Trains a classifier on `corpus` with `rayon`.
    /// The result equals [`TextNB::train`] for integral counts.
    pub fn train_parallel(&self, corpus: &Corpus) -> Result<NBayesClassifier> {
        let store = self.count_parallel(corpus)?;
        Ok(finish(store))
    }
}


fn finish(store: CountStore) -> NBayesClassifier {
    let stats = store.statistics();
    info!(
        n_pos_docs = stats.n_pos_docs,
        n_neg_docs = stats.n_neg_docs,
        n_pos_tokens = stats.n_pos_tokens,
        n_neg_tokens = stats.n_neg_tokens,
        vocabulary_size = stats.vocabulary_size,
        "finished training"
    );
    NBayesClassifier::new(store)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Document, Label, Classifier};

    fn toy_corpus() -> Corpus {
        Corpus::new(vec![
            Document::new("good good great", Label::Positive),
            Document::new("bad bad terrible", Label::Negative),
        ])
    }

    #[test]
    fn test_train_toy() {
        let nbayes = TextNB::init();
        let f = nbayes.train(&toy_corpus()).unwrap();
        assert_eq!(f.vocabulary_size(), 4);
        let bag = nbayes.tokenize("Good");
        assert_eq!(f.classify(&bag, 1f64), Label::Positive);
    }

    #[test]
    fn test_train_parallel_matches_sequential() {
        let corpus = (0..200)
            .map(|i| {
                let label = if i % 2 == 0 { Label::Positive } else { Label::Negative };
                Document::new(format!("word{} shared word{}", i % 7, i % 13), label)
            })
            .collect::<Corpus>();
        let nbayes = TextNB::init().chunk_size(16);
        let sequential = nbayes.count(&corpus).unwrap();
        let parallel = nbayes.count_parallel(&corpus).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_custom_tokenizer() {
        let chars = |doc: &str| {
            doc.chars()
                .filter(|c| c.is_alphabetic())
                .map(|c| (c.to_lowercase().to_string(), 1f64))
                .collect::<BagOfWords>()
        };
        let nbayes = TextNB::with_tokenizer(chars);
        let f = nbayes.train(&toy_corpus()).unwrap();
        assert!(f.counts().vocabulary().contains("g"));
        assert_eq!(f.counts().word_counts(Label::Positive).count_or_zero("g"), 3f64);
    }
}

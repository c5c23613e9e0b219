//! Exports the standard types and traits.
//!
pub use crate::{
    // Data
    Label,
    BagOfWords,
    Document,
    Corpus,
    CorpusReader,
    Split,


    // Tokenizers
    Tokenizer,
    WhitespaceTokenizer,


    // Naive Bayes
    CountStore,
    TextNB,
    NBayesClassifier,
    CorpusStatistics,


    // Classifier trait
    Classifier,
};

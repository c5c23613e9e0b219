#![warn(missing_docs)]

//!
//! A crate that provides a bag-of-words Naive Bayes text classifier
//! for two classes (positive/negative),
//! e.g., the sentiment of movie reviews.
//!
//! The model keeps, for each class,
//! the number of times every word occurs,
//! the total number of words and the number of documents.
//! A document is classified by comparing
//!
//! - the log prior of the class, and
//! - the log likelihood of the document under additive
//!     (Laplace/Lidstone) smoothing with parameter `alpha`
//!
//! over the two classes.
//!
//! Training is split into two phases.
//! A [`CountStore`] accumulates the statistics (single writer),
//! and is then frozen into an [`NBayesClassifier`] that only answers
//! queries and can be shared between threads.
//!
//! ```no_run
//! use textbayes::prelude::*;
//! use textbayes::research::Evaluation;
//!
//! let train = CorpusReader::default()
//!     .root("aclImdb")
//!     .split(Split::Train)
//!     .read()
//!     .unwrap();
//! let test = CorpusReader::default()
//!     .root("aclImdb")
//!     .split(Split::Test)
//!     .read()
//!     .unwrap();
//!
//! let nbayes = TextNB::init();
//! let f = nbayes.train_parallel(&train).unwrap();
//! f.statistics().print_report();
//!
//! for (word, count) in f.top_n(Label::Positive, 10) {
//!     println!("{word}\t{count}");
//! }
//! println!("LR(fantastic) = {}", f.likelihood_ratio("fantastic", 1.0));
//!
//! let report = Evaluation::new(&f, nbayes.tokenizer())
//!     .alpha(1.0)
//!     .run(&test)
//!     .unwrap();
//! println!("accuracy: {:.2}%", report.accuracy());
//! ```

pub mod constants;
pub mod checkers;
pub mod error;
pub mod label;
pub mod bag;
pub mod tokenizer;
pub mod corpus;
pub mod classifier;
pub mod naive_bayes;
pub mod research;
pub mod prelude;


pub use error::{NBayesError, Result};

pub use label::Label;

pub use bag::{
    BagOfWords,
    n_word_types,
    n_word_tokens,
};

pub use tokenizer::{
    Tokenizer,
    WhitespaceTokenizer,
};

pub use corpus::{
    Document,
    Corpus,
    CorpusReader,
    Split,
};

pub use classifier::Classifier;

pub use naive_bayes::{
    CountStore,
    TextNB,
    NBayesClassifier,
    CorpusStatistics,
};

/// Defines the sufficient statistics of the model.
mod count_store;
/// Defines the trainer of Naive Bayes classifiers.
mod nbayes;
/// Defines Naive Bayes Classifiers returned by `TextNB`.
mod nbayes_classifier;
/// Defines the summary reported after training.
mod statistics;

pub use count_store::CountStore;
pub use nbayes::TextNB;
pub use nbayes_classifier::NBayesClassifier;
pub use statistics::CorpusStatistics;

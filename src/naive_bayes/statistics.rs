use colored::Colorize;
use serde::{
    Serialize,
    Deserialize,
};

use std::fmt;

use crate::{Label, n_word_tokens};
use super::count_store::CountStore;

const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// The fixed five-field summary reported after training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStatistics {
    /// Number of documents in the positive class.
    pub n_pos_docs: usize,
    /// Number of documents in the negative class.
    pub n_neg_docs: usize,
    /// Number of word tokens in the positive class.
    pub n_pos_tokens: u64,
    /// Number of word tokens in the negative class.
    pub n_neg_tokens: u64,
    /// Number of distinct word types in the training corpus.
    pub vocabulary_size: usize,
}


impl From<&CountStore> for CorpusStatistics {
    fn from(store: &CountStore) -> Self {
        Self {
            n_pos_docs: store.total_doc_count(Label::Positive),
            n_neg_docs: store.total_doc_count(Label::Negative),
            n_pos_tokens: n_word_tokens(store.word_counts(Label::Positive)),
            n_neg_tokens: n_word_tokens(store.word_counts(Label::Negative)),
            vocabulary_size: store.vocabulary_size(),
        }
    }
}


impl CorpusStatistics {
    /// Prints the summary to the standard output.
    pub fn print_report(&self) {
        println!("{self}");
    }
}


impl fmt::Display for CorpusStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("# of docs (pos)", self.n_pos_docs.to_string()),
            ("# of docs (neg)", self.n_neg_docs.to_string()),
            ("# of tokens (pos)", self.n_pos_tokens.to_string()),
            ("# of tokens (neg)", self.n_neg_tokens.to_string()),
            ("Vocabulary size", self.vocabulary_size.to_string()),
        ];
        writeln!(
            f,
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "CORPUS STATISTICS".bold(), "",
        )?;
        for (key, val) in rows {
            writeln!(
                f,
                "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
                key.bold(),
                val.bold().green(),
            )?;
        }
        write!(f, "{:=^FULL_WIDTH$}", "")
    }
}

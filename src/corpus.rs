//! Labeled documents and the reader that loads them from disk.
//!
//! The expected layout is
//! ```text
//! <root>/train/pos/*   <root>/train/neg/*
//! <root>/test/pos/*    <root>/test/neg/*
//! ```

/// Defines `Document` and `Corpus`.
mod document;
/// Defines `CorpusReader`.
mod reader;

pub use document::{
    Document,
    Corpus,
};

pub use reader::{
    CorpusReader,
    Split,
};

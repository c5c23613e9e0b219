//! Tokenizers that turn a raw document into a [`BagOfWords`].
//!
//! Any closure `Fn(&str) -> BagOfWords` is a [`Tokenizer`],
//! so a custom tokenizer does not need its own type.
//! Tokenizers must lower-case tokens before counting them.
use crate::BagOfWords;


/// A function from a document to its bag-of-words representation.
pub trait Tokenizer {
    /// Tokenizes `doc`.
    fn tokenize(&self, doc: &str) -> BagOfWords;
}


impl<F> Tokenizer for F
    where F: Fn(&str) -> BagOfWords
{
    #[inline]
    fn tokenize(&self, doc: &str) -> BagOfWords {
        self(doc)
    }
}


/// Splits a document on whitespace and lower-cases every token.
/// Punctuation stays attached to its token (`"great!"` and `"great"`
/// are different words).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceTokenizer;


impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, doc: &str) -> BagOfWords {
        doc.split_whitespace()
            .map(|token| (token.to_lowercase(), 1f64))
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer_01() {
        let bag = WhitespaceTokenizer.tokenize("Good good\tGREAT\n great!");
        assert_eq!(bag.count_or_zero("good"), 2f64);
        assert_eq!(bag.count_or_zero("great"), 1f64);
        assert_eq!(bag.count_or_zero("great!"), 1f64);
        assert_eq!(bag.len(), 3);
    }

    #[test]
    fn test_whitespace_tokenizer_empty() {
        assert!(WhitespaceTokenizer.tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_closure_tokenizer() {
        let by_comma = |doc: &str| {
            doc.split(',')
                .map(|t| (t.trim().to_lowercase(), 1f64))
                .collect::<BagOfWords>()
        };
        let bag = by_comma.tokenize("A, b,a");
        assert_eq!(bag.count_or_zero("a"), 2f64);
        assert_eq!(bag.count_or_zero("b"), 1f64);
    }
}

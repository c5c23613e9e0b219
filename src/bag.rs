use std::collections::HashMap;
use std::collections::hash_map;


/// A bag-of-words: an order-free mapping from a token
/// to the number of times it occurs.
/// Counts are `f64` so that fractional weights are representable.
///
/// The same type holds the per-class cumulative word counts
/// of [`CountStore`](crate::CountStore).
/// Absent tokens are read through [`BagOfWords::count_or_zero`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BagOfWords {
    counts: HashMap<String, f64>,
}


impl BagOfWords {
    /// Construct an empty bag.
    pub fn new() -> Self {
        Self { counts: HashMap::new() }
    }


    /// Adds `count` to the entry of `token`,
    /// creating the entry at `0` if absent.
    #[inline]
    pub fn add<S: Into<String>>(&mut self, token: S, count: f64) {
        *self.counts.entry(token.into()).or_insert(0f64) += count;
    }


    /// Returns the count of `token`, or `0` if it never occured.
    #[inline]
    pub fn count_or_zero(&self, token: &str) -> f64 {
        self.counts.get(token).copied().unwrap_or(0f64)
    }


    /// Returns `true` if `token` has an entry.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }


    /// Number of distinct tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }


    /// Returns `true` if the bag has no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }


    /// Iterates over `(token, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }


    /// Iterates over the tokens in arbitrary order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }


    /// Sum of all counts.
    pub fn total(&self) -> f64 {
        self.counts.values().sum::<f64>()
    }
}


impl IntoIterator for BagOfWords {
    type Item = (String, f64);
    type IntoIter = hash_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}


impl<S: Into<String>> FromIterator<(S, f64)> for BagOfWords {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut bag = Self::new();
        iter.into_iter()
            .for_each(|(token, count)| bag.add(token, count));
        bag
    }
}


impl<S: Into<String>, const N: usize> From<[(S, f64); N]> for BagOfWords {
    fn from(pairs: [(S, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}


/// Returns the number of word types (distinct tokens) in `counts`.
#[inline]
pub fn n_word_types(counts: &BagOfWords) -> usize {
    counts.len()
}


/// Returns the number of word tokens in `counts`,
/// i.e., the sum of all counts rounded to the nearest integer.
#[inline]
pub fn n_word_tokens(counts: &BagOfWords) -> u64 {
    counts.total().round() as u64
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_or_zero() {
        let bag = BagOfWords::from([("good", 2f64), ("great", 1f64)]);
        assert_eq!(bag.count_or_zero("good"), 2f64);
        assert_eq!(bag.count_or_zero("great"), 1f64);
        assert_eq!(bag.count_or_zero("bad"), 0f64);
        assert!(!bag.contains("bad"));
    }

    #[test]
    fn test_add_accumulates() {
        let mut bag = BagOfWords::new();
        bag.add("movie", 1f64);
        bag.add("movie", 2.5);
        assert_eq!(bag.count_or_zero("movie"), 3.5);
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn test_from_iter_merges_duplicates() {
        let bag = vec![("a", 1f64), ("b", 1f64), ("a", 1f64)]
            .into_iter()
            .collect::<BagOfWords>();
        assert_eq!(bag.count_or_zero("a"), 2f64);
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn test_word_types_and_tokens() {
        let bag = BagOfWords::from([("x", 1.4), ("y", 2f64), ("z", 0.4)]);
        assert_eq!(n_word_types(&bag), 3);
        assert_eq!(n_word_tokens(&bag), 4);
        assert_eq!(n_word_tokens(&BagOfWords::new()), 0);
    }
}

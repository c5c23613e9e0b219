use rand::prelude::*;

use crate::Label;


/// A single labeled document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    label: Label,
}


impl Document {
    /// Construct a new document.
    pub fn new<S: Into<String>>(text: S, label: Label) -> Self {
        Self { text: text.into(), label }
    }


    /// The raw text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }


    /// The true label.
    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }
}


/// An ordered collection of labeled documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}


impl Corpus {
    /// Construct a corpus from `documents`, keeping their order.
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }


    /// All documents in order.
    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents[..]
    }


    /// Iterates over the documents in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }


    /// Number of documents.
    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }


    /// Returns `true` if there is no document.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }


    /// Number of documents labeled `label`.
    pub fn n_documents(&self, label: Label) -> usize {
        self.documents.iter()
            .filter(|doc| doc.label() == label)
            .count()
    }


    /// Shuffles the documents with a seeded random generator.
    /// The same seed always gives the same order.
    pub fn shuffle(mut self, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        self.documents.shuffle(&mut rng);
        self
    }
}


impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}


impl Extend<Document> for Corpus {
    fn extend<I: IntoIterator<Item = Document>>(&mut self, iter: I) {
        self.documents.extend(iter);
    }
}


impl IntoIterator for Corpus {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}


impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        (0..20)
            .map(|i| {
                let label = if i % 3 == 0 { Label::Positive } else { Label::Negative };
                Document::new(format!("doc {i}"), label)
            })
            .collect()
    }

    #[test]
    fn test_n_documents() {
        let corpus = corpus();
        assert_eq!(corpus.len(), 20);
        assert_eq!(corpus.n_documents(Label::Positive), 7);
        assert_eq!(corpus.n_documents(Label::Negative), 13);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = corpus().shuffle(777);
        let b = corpus().shuffle(777);
        assert_eq!(a, b);

        let mut texts = a.iter().map(|d| d.text().to_string()).collect::<Vec<_>>();
        let mut original = corpus().iter().map(|d| d.text().to_string()).collect::<Vec<_>>();
        texts.sort();
        original.sort();
        assert_eq!(texts, original);
    }
}

use rayon::prelude::*;
use tracing::debug;

use std::fs;
use std::path::{Path, PathBuf};

use crate::Label;
use crate::constants::{TRAIN_DIR, TEST_DIR};
use crate::error::{NBayesError, Result};

use super::document::{Document, Corpus};


/// Which half of the corpus to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    /// `<root>/train`
    Train,
    /// `<root>/test`
    Test,
}


impl Split {
    /// Returns the directory name of this split.
    #[inline(always)]
    pub fn dir_name(&self) -> &'static str {
        match self {
            Split::Train => TRAIN_DIR,
            Split::Test => TEST_DIR,
        }
    }
}


/// A struct that returns [`Corpus`].
/// Documents are read from `<root>/<split>/pos` and `<root>/<split>/neg`,
/// positive documents first. Within a label directory
/// files are read in ascending order of their names.
/// Every regular file is treated as one UTF-8 document.
/// # Example
/// ```no_run
/// use textbayes::{CorpusReader, Split};
/// let corpus = CorpusReader::default()
///     .root("/path/to/large_movie_review_dataset")
///     .split(Split::Train)
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CorpusReader<P> {
    root: Option<P>,
    split: Split,
}


impl<P> Default for CorpusReader<P> {
    fn default() -> Self {
        Self { root: None, split: Split::Train }
    }
}


impl<P> CorpusReader<P> {
    /// Set the split to read.
    /// Default is `Split::Train`.
    pub fn split(mut self, split: Split) -> Self {
        self.split = split;
        self
    }
}


impl<P> CorpusReader<P>
    where P: AsRef<Path>
{
    /// Set the root directory of the corpus.
    pub fn root(mut self, root: P) -> Self {
        self.root = Some(root);
        self
    }


    /// Reads the documents based on the arguments,
    /// and returns `Result<Corpus>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Corpus> {
        let root = match self.root {
            Some(root) => root,
            None => panic!(
                "The root directory of the corpus is not set. \
                Use `CorpusReader::root`."
            ),
        };
        let dir = root.as_ref().join(self.split.dir_name());

        let mut corpus = Corpus::default();
        for label in Label::ALL {
            let docs = read_label_dir(&dir.join(label.dir_name()), label)?;
            corpus.extend(docs);
        }
        debug!(
            split = self.split.dir_name(),
            n_pos = corpus.n_documents(Label::Positive),
            n_neg = corpus.n_documents(Label::Negative),
            "read corpus"
        );
        Ok(corpus)
    }
}


/// Reads every regular file under `dir` as a document labeled `label`.
fn read_label_dir(dir: &Path, label: Label) -> Result<Vec<Document>> {
    if !dir.is_dir() {
        return Err(NBayesError::MissingLabelDirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    let entries = fs::read_dir(dir)
        .map_err(|e| NBayesError::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| NBayesError::io(dir, e))?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    files.into_par_iter()
        .map(|path: PathBuf| {
            fs::read_to_string(&path)
                .map(|text| Document::new(text, label))
                .map_err(|e| NBayesError::io(path, e))
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, text: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), text).unwrap();
    }

    #[test]
    fn test_read_order() {
        let tmp = tempfile::tempdir().unwrap();
        let train = tmp.path().join("train");
        write(&train.join("neg"), "b.txt", "neg b");
        write(&train.join("neg"), "a.txt", "neg a");
        write(&train.join("pos"), "2.txt", "pos 2");
        write(&train.join("pos"), "1.txt", "pos 1");

        let corpus = CorpusReader::default()
            .root(tmp.path())
            .read()
            .unwrap();

        let got = corpus.iter()
            .map(|doc| (doc.text(), doc.label()))
            .collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![
                ("pos 1", Label::Positive),
                ("pos 2", Label::Positive),
                ("neg a", Label::Negative),
                ("neg b", Label::Negative),
            ]
        );
    }

    #[test]
    fn test_read_test_split_skips_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        let test = tmp.path().join("test");
        write(&test.join("pos"), "1.txt", "fun");
        write(&test.join("pos").join("nested"), "x.txt", "ignored");
        write(&test.join("neg"), "1.txt", "dull");

        let corpus = CorpusReader::default()
            .root(tmp.path())
            .split(Split::Test)
            .read()
            .unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.n_documents(Label::Positive), 1);
    }

    #[test]
    fn test_missing_label_directory() {
        let tmp = tempfile::tempdir().unwrap();
        write(&tmp.path().join("train").join("pos"), "1.txt", "fun");

        let result = CorpusReader::default()
            .root(tmp.path())
            .read();
        match result {
            Err(NBayesError::MissingLabelDirectory(path)) => {
                assert!(path.ends_with("train/neg"), "got {path:?}");
            },
            other => panic!("expected a missing directory, got {other:?}"),
        }
    }

    #[test]
    #[should_panic]
    fn test_root_not_set() {
        let _ = CorpusReader::<&Path>::default().read();
    }
}

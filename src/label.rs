use serde::{
    Serialize,
    Deserialize,
};

use std::fmt;
use std::str::FromStr;

use crate::constants::{POSITIVE_DIR, NEGATIVE_DIR};
use crate::error::NBayesError;


/// The two classes a document can belong to.
/// The classifier is fixed to exactly these two labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// The positive class (`pos`).
    Positive,
    /// The negative class (`neg`).
    Negative,
}


impl Label {
    /// Both labels, positive first.
    pub const ALL: [Label; 2] = [Label::Positive, Label::Negative];


    /// Returns the name of the corpus directory holding this label.
    #[inline(always)]
    pub fn dir_name(&self) -> &'static str {
        match self {
            Label::Positive => POSITIVE_DIR,
            Label::Negative => NEGATIVE_DIR,
        }
    }


    /// Slot of this label in per-class arrays.
    #[inline(always)]
    pub(crate) fn index(&self) -> usize {
        match self {
            Label::Positive => 0,
            Label::Negative => 1,
        }
    }
}


impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}


impl FromStr for Label {
    type Err = NBayesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pos" | "positive" => Ok(Label::Positive),
            "neg" | "negative" => Ok(Label::Negative),
            _ => Err(NBayesError::UnknownLabel(s.to_string())),
        }
    }
}

//! Frame of discernment and the bitmask subset codec.

mod display;
mod subset;

pub use display::SubsetDisplay;
pub use subset::Subset;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::{KEY_SEPARATOR, MAX_FRAME_SIZE};
use crate::errors::FrameError;

/// An ordered set of distinct, mutually exclusive hypothesis labels.
///
/// Position in the frame is the bit index used by [`Subset`]. A frame is
/// immutable once built.
///
/// # Examples
///
/// ```
/// use shafer_core::Frame;
///
/// let frame = Frame::new(["A", "B", "C"]).unwrap();
/// let ab = frame.parse_key("B,A").unwrap();
/// assert_eq!(frame.key(ab), "A,B");
/// assert_eq!(frame.format(ab).to_string(), "{A, B}");
/// assert_eq!(frame.enumerate_non_empty_subsets().len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Frame {
    labels: Vec<String>,
}

impl Frame {
    /// Build a frame, rejecting empty, oversized, duplicate or malformed labels.
    pub fn new<I, S>(labels: I) -> Result<Self, FrameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(FrameError::EmptyFrame);
        }
        if labels.len() > MAX_FRAME_SIZE {
            return Err(FrameError::TooLarge {
                size: labels.len(),
                max: MAX_FRAME_SIZE,
            });
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if label.trim().is_empty() {
                return Err(FrameError::InvalidLabel {
                    label: label.clone(),
                    reason: "label is blank".to_string(),
                });
            }
            if label.trim() != label.as_str() {
                return Err(FrameError::InvalidLabel {
                    label: label.clone(),
                    reason: "label has surrounding whitespace".to_string(),
                });
            }
            if label.contains(KEY_SEPARATOR) {
                return Err(FrameError::InvalidLabel {
                    label: label.clone(),
                    reason: format!("label contains the key separator '{KEY_SEPARATOR}'"),
                });
            }
            if !seen.insert(label.as_str()) {
                return Err(FrameError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }

        Ok(Self { labels })
    }

    /// Number of atomic hypotheses.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a constructed frame; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// The full frame, Θ.
    pub fn theta(&self) -> Subset {
        Subset::full(self.labels.len())
    }

    /// True when every member of `subset` is a position of this frame.
    pub fn contains(&self, subset: Subset) -> bool {
        subset.is_subset_of(self.theta())
    }

    /// The singleton subset for `label`.
    pub fn singleton(&self, label: &str) -> Result<Subset, FrameError> {
        self.index_of(label)
            .map(Subset::singleton)
            .ok_or_else(|| FrameError::UnknownLabel {
                label: label.to_string(),
            })
    }

    /// Resolve a set of labels into a subset. Order and repetition do not matter.
    pub fn subset_of<I, S>(&self, labels: I) -> Result<Subset, FrameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .try_fold(Subset::EMPTY, |acc, label| {
                Ok(acc.union(self.singleton(label.as_ref())?))
            })
    }

    /// Parse a comma-separated key such as `"A,B"`. Whitespace around labels
    /// is ignored and `""` is the empty subset.
    pub fn parse_key(&self, key: &str) -> Result<Subset, FrameError> {
        if key.trim().is_empty() {
            return Ok(Subset::EMPTY);
        }
        self.subset_of(key.split(KEY_SEPARATOR).map(str::trim))
    }

    /// Canonical serialization key: member labels sorted and comma-joined.
    /// The empty subset encodes as `""`.
    pub fn key(&self, subset: Subset) -> String {
        let mut members = self.member_labels(subset);
        members.sort_unstable();
        let separator = KEY_SEPARATOR.to_string();
        members.join(separator.as_str())
    }

    /// Member labels in frame order.
    pub fn member_labels(&self, subset: Subset) -> Vec<&str> {
        subset
            .indices()
            .filter_map(|i| self.label(i))
            .collect()
    }

    /// Cosmetic rendering: `A` for singletons, `{A, B}` otherwise.
    pub fn format(&self, subset: Subset) -> SubsetDisplay<'_> {
        SubsetDisplay::new(self, subset)
    }

    /// All `2^n - 1` non-empty subsets, in ascending mask order.
    pub fn enumerate_non_empty_subsets(&self) -> Vec<Subset> {
        (1..=self.theta().bits()).map(Subset::from_bits).collect()
    }
}

impl TryFrom<Vec<String>> for Frame {
    type Error = FrameError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Frame::new(labels)
    }
}

impl From<Frame> for Vec<String> {
    fn from(frame: Frame) -> Self {
        frame.labels
    }
}

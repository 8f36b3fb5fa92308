use std::fmt;

use super::{Frame, Subset};
use crate::constants::EMPTY_SET_SYMBOL;

/// Display adapter pairing a subset with the frame that names its members.
pub struct SubsetDisplay<'a> {
    frame: &'a Frame,
    subset: Subset,
}

impl<'a> SubsetDisplay<'a> {
    pub fn new(frame: &'a Frame, subset: Subset) -> Self {
        Self { frame, subset }
    }
}

impl fmt::Display for SubsetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut members = self.frame.member_labels(self.subset);
        members.sort_unstable();
        match members.as_slice() {
            [] => f.write_str(EMPTY_SET_SYMBOL),
            [single] => f.write_str(single),
            many => write!(f, "{{{}}}", many.join(", ")),
        }
    }
}

use crate::sentiment::Label;

/// Per-label row counts in [`Label::DISPLAY_ORDER`].  Absent labels are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountTable {
    counts: [usize; 3],
}

impl CountTable {
    pub fn from_labels<I: IntoIterator<Item = Label>>(labels: I) -> Self {
        let mut counts = [0usize; 3];
        for label in labels {
            counts[label.display_index()] += 1;
        }
        CountTable { counts }
    }

    pub fn get(&self, label: Label) -> usize {
        self.counts[label.display_index()]
    }

    /// `(label, count)` pairs, always Negative, Neutral, Positive.
    pub fn entries(&self) -> [(Label, usize); 3] {
        Label::DISPLAY_ORDER.map(|label| (label, self.get(label)))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Count the labels of the rows in `indices`.
pub fn count_labels(labels: &[Label], indices: &[usize]) -> CountTable {
    CountTable::from_labels(indices.iter().filter_map(|&i| labels.get(i).copied()))
}

use std::fmt;

/// Canonical sentiment of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Negative,
    Neutral,
    Positive,
}

impl Label {
    /// Order used by count tables and the chart's x-axis.
    pub const DISPLAY_ORDER: [Label; 3] = [Label::Negative, Label::Neutral, Label::Positive];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
            Label::Positive => "Positive",
        }
    }

    /// Position in [`Label::DISPLAY_ORDER`].
    pub fn display_index(self) -> usize {
        match self {
            Label::Negative => 0,
            Label::Neutral => 1,
            Label::Positive => 2,
        }
    }

    /// Map a raw model label onto a canonical one by substring match on the
    /// uppercased label.  `POSITIVE` wins over `NEGATIVE` when both appear.
    pub fn from_raw(raw: &str) -> Label {
        let upper = raw.to_uppercase();
        if upper.contains("POSITIVE") {
            Label::Positive
        } else if upper.contains("NEGATIVE") {
            Label::Negative
        } else {
            Label::Neutral
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_labels_map_by_substring() {
        assert_eq!(Label::from_raw("POSITIVE"), Label::Positive);
        assert_eq!(Label::from_raw("negative"), Label::Negative);
        assert_eq!(Label::from_raw("Very Positive"), Label::Positive);
        assert_eq!(Label::from_raw("LABEL_0"), Label::Neutral);
        assert_eq!(Label::from_raw("neutral"), Label::Neutral);
        assert_eq!(Label::from_raw(""), Label::Neutral);
        // "NON-NEGATIVE" still contains NEGATIVE.
        assert_eq!(Label::from_raw("non-negative"), Label::Negative);
    }

    #[test]
    fn display_order_matches_index() {
        for (i, label) in Label::DISPLAY_ORDER.iter().enumerate() {
            assert_eq!(label.display_index(), i);
        }
        assert_eq!(Label::Neutral.to_string(), "Neutral");
    }
}

//! Pure mappings from an analysis result to display values.
//!
//! Every function here is total: labels other than `POS` and `NEG` fall back
//! to the neutral presentation instead of being reported as errors.

use crate::SentimentLabel;

/// Visual style class for a sentiment badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentStyle {
    Positive,
    Negative,
    Neutral,
}

impl SentimentStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            SentimentStyle::Positive => "positive-style",
            SentimentStyle::Negative => "negative-style",
            SentimentStyle::Neutral => "neutral-style",
        }
    }
}

pub fn color_class_for(label: &SentimentLabel) -> SentimentStyle {
    match label {
        SentimentLabel::Positive => SentimentStyle::Positive,
        SentimentLabel::Negative => SentimentStyle::Negative,
        SentimentLabel::Neutral | SentimentLabel::Other(_) => SentimentStyle::Neutral,
    }
}

pub fn display_label_for(label: &SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "Positive",
        SentimentLabel::Negative => "Negative",
        SentimentLabel::Neutral | SentimentLabel::Other(_) => "Neutral",
    }
}

/// `round(confidence * 100)`. Out-of-range inputs are passed through unclamped.
pub fn confidence_percent(confidence: f64) -> i64 {
    (confidence * 100.0).round() as i64
}

pub fn emoji_for(label: &SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "😊",
        SentimentLabel::Negative => "😔",
        SentimentLabel::Neutral | SentimentLabel::Other(_) => "😐",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_rounds_to_nearest_integer() {
        assert_eq!(confidence_percent(0.873), 87);
        assert_eq!(confidence_percent(0.875), 88);
        assert_eq!(confidence_percent(0.0), 0);
        assert_eq!(confidence_percent(1.0), 100);
    }

    #[test]
    fn confidence_in_unit_range_stays_in_percent_range() {
        for step in 0..=1000 {
            let confidence = f64::from(step) / 1000.0;
            let percent = confidence_percent(confidence);
            assert!((0..=100).contains(&percent), "{confidence} -> {percent}");
        }
    }

    #[test]
    fn confidence_is_not_clamped() {
        assert_eq!(confidence_percent(1.5), 150);
        assert_eq!(confidence_percent(-0.2), -20);
    }

    #[test]
    fn known_labels_map_to_their_presentation() {
        let pos = SentimentLabel::Positive;
        let neg = SentimentLabel::Negative;
        assert_eq!(color_class_for(&pos).css_class(), "positive-style");
        assert_eq!(color_class_for(&neg).css_class(), "negative-style");
        assert_eq!(display_label_for(&pos), "Positive");
        assert_eq!(display_label_for(&neg), "Negative");
        assert_eq!(emoji_for(&pos), "😊");
        assert_eq!(emoji_for(&neg), "😔");
    }

    #[test]
    fn any_other_label_is_neutral() {
        for raw in ["NEU", "MIXED", "pos", "", "неизвестно"] {
            let label = SentimentLabel::from_wire(raw);
            assert_eq!(color_class_for(&label), SentimentStyle::Neutral, "{raw}");
            assert_eq!(display_label_for(&label), "Neutral", "{raw}");
            assert_eq!(emoji_for(&label), "😐", "{raw}");
        }
    }
}

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The coarse screen class the presentation layer is rendering for.
///
/// The core never measures the screen itself; the caller supplies this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Classifies a viewport width in CSS pixels.
    pub fn from_width(width_px: u32) -> Self {
        if width_px < 640 {
            ViewportClass::Mobile
        } else if width_px < 1024 {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Colour bucket for a 0-10 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: Decimal) -> Self {
        if score >= dec!(8) {
            ScoreBand::High
        } else if score >= dec!(6) {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_toggles_both_ways() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }

    #[test]
    fn direction_uses_short_wire_names() {
        assert_eq!(serde_json::to_string(&SortDirection::Ascending).unwrap(), "\"asc\"");
        let parsed: SortDirection = serde_json::from_str("\"descending\"").unwrap();
        assert_eq!(parsed, SortDirection::Descending);
    }

    #[test]
    fn viewport_breakpoints() {
        assert_eq!(ViewportClass::from_width(375), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(639), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(640), ViewportClass::Tablet);
        assert_eq!(ViewportClass::from_width(1023), ViewportClass::Tablet);
        assert_eq!(ViewportClass::from_width(1440), ViewportClass::Desktop);
    }

    #[test]
    fn score_bands_split_at_six_and_eight() {
        assert_eq!(ScoreBand::from_score(dec!(8.0)), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(dec!(7.9)), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(dec!(6)), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(dec!(5.9)), ScoreBand::Low);
    }
}

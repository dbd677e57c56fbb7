// Custom timeframe input and the submit gate
use serde::Serialize;

pub const MIN_TIMEFRAME_LENGTH: f64 = 1.0;
pub const MAX_TIMEFRAME_LENGTH: f64 = 100.0;

/// Whether the custom-timeframe submit control is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitState {
    Enabled,
    Disabled,
}

impl SubmitState {
    /// Evaluate the raw length input. Enabled only for a number in [1, 100].
    pub fn from_length_input(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return SubmitState::Disabled;
        }

        match raw.parse::<f64>() {
            Ok(length) if (MIN_TIMEFRAME_LENGTH..=MAX_TIMEFRAME_LENGTH).contains(&length) => {
                SubmitState::Enabled
            }
            _ => SubmitState::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, SubmitState::Enabled)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SubmitState::Enabled => "btn-primary",
            SubmitState::Disabled => "btn-secondary",
        }
    }
}

/// A user-submitted lookback window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeframeQuery {
    pub length: String,
    pub unit: String,
}

impl TimeframeQuery {
    pub fn new(length: &str, unit: &str) -> Self {
        Self {
            length: length.trim().to_string(),
            unit: unit.trim().to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_state_bounds() {
        assert_eq!(SubmitState::from_length_input("0"), SubmitState::Disabled);
        assert_eq!(SubmitState::from_length_input("1"), SubmitState::Enabled);
        assert_eq!(SubmitState::from_length_input("100"), SubmitState::Enabled);
        assert_eq!(SubmitState::from_length_input("101"), SubmitState::Disabled);
        assert_eq!(SubmitState::from_length_input(""), SubmitState::Disabled);
    }

    #[test]
    fn test_submit_state_non_numeric() {
        assert_eq!(SubmitState::from_length_input("abc"), SubmitState::Disabled);
        assert_eq!(SubmitState::from_length_input("NaN"), SubmitState::Disabled);
        assert_eq!(SubmitState::from_length_input("   "), SubmitState::Disabled);
        assert_eq!(SubmitState::from_length_input(" 42 "), SubmitState::Enabled);
        assert_eq!(SubmitState::from_length_input("2.5"), SubmitState::Enabled);
    }

    #[test]
    fn test_submit_state_is_idempotent() {
        let first = SubmitState::from_length_input("50");
        let second = SubmitState::from_length_input("50");
        assert_eq!(first, second);
        assert!(first.is_enabled());
        assert_eq!(first.css_class(), "btn-primary");
        assert_eq!(SubmitState::Disabled.css_class(), "btn-secondary");
    }

    #[test]
    fn test_timeframe_query_lowercases_unit() {
        let query = TimeframeQuery::new("5", "Minutes");
        assert_eq!(query.length, "5");
        assert_eq!(query.unit, "minutes");
    }
}

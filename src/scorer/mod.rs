pub mod running;
pub mod time;
pub mod types;
pub mod weightlifting;

pub use self::running::{running_breakdown, running_score, RunningInput};
pub use self::time::{format_time, time_to_seconds};
pub use self::types::{MetricScore, ScoreDetails};
pub use self::weightlifting::{weightlifting_breakdown, weightlifting_score, WeightliftingInput};

use crate::error::FrResult;

/// Score reported when no metric contributes.
pub const DEFAULT_SCORE: u32 = 50;

/// Form-style input that is filled one field at a time.
pub trait FormInput: Default {
    /// Accepted field keys, normalised (lowercase, no separators).
    const FIELDS: &'static [&'static str];

    fn is_field(name: &str) -> bool {
        Self::FIELDS.contains(&field_key(name).as_str())
    }

    /// Applies a single form change. `name` accepts the camelCase form key
    /// or its snake_case spelling.
    fn set_field(&mut self, name: &str, value: &str) -> FrResult<()>;

    /// Clears every field, as when the result view is dismissed.
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Unweighted mean of band points, rounded half-up. Empty input yields
/// [`DEFAULT_SCORE`].
pub fn mean_band(bands: &[u32]) -> u32 {
    if bands.is_empty() {
        return DEFAULT_SCORE;
    }
    let total: u32 = bands.iter().sum();
    let n = bands.len() as u32;
    // Integer form of round(total / n) for non-negative values.
    (2 * total + n) / (2 * n)
}

/// Normalises a field key so `halfMarathonTime`, `half_marathon_time` and
/// `HalfMarathonTime` compare equal.
pub(crate) fn field_key(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Lenient numeric parse for form values. Returns `None` when the text is
/// not a finite number.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_band_rounds_half_up() {
        assert_eq!(mean_band(&[]), DEFAULT_SCORE);
        assert_eq!(mean_band(&[95, 75]), 85);
        assert_eq!(mean_band(&[50, 55]), 53);
        assert_eq!(mean_band(&[95, 75, 75]), 82);
        assert_eq!(mean_band(&[10]), 10);
    }

    #[test]
    fn field_key_ignores_case_and_separators() {
        assert_eq!(field_key("halfMarathonTime"), "halfmarathontime");
        assert_eq!(field_key("half_marathon_time"), "halfmarathontime");
        assert_eq!(field_key(" one-km "), "onekm");
    }

    #[test]
    fn parse_number_rejects_text() {
        assert_eq!(parse_number(" 1.5 "), Some(1.5));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("infinity"), None);
        assert_eq!(parse_number("+Inf"), None);
    }
}

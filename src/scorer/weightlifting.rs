use super::types::{MetricScore, ScoreDetails};
use super::{field_key, mean_band, parse_number, FormInput, DEFAULT_SCORE};
use crate::error::{FitRankError, FrResult};
use crate::tables::{Gender, Lift, Tier};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

/// Weightlifting form state. Lifts are bodyweight ratios, pull-ups are reps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightliftingInput {
    pub bench_press: String,
    pub squat: String,
    pub deadlift: String,
    pub overhead_press: String,
    pub pull_up: String,
    pub bodyweight: String,
    pub gender: Gender,
}

impl WeightliftingInput {
    /// Bodyweight in kg, or `None` when missing, unparseable or zero.
    pub fn bodyweight_kg(&self) -> Option<f64> {
        parse_number(&self.bodyweight).filter(|bw| *bw != 0.0)
    }

    pub fn present_lifts(&self) -> Vec<(Lift, &str)> {
        [
            (Lift::BenchPress, &self.bench_press),
            (Lift::Squat, &self.squat),
            (Lift::Deadlift, &self.deadlift),
            (Lift::OverheadPress, &self.overhead_press),
            (Lift::PullUp, &self.pull_up),
        ]
        .into_iter()
        .filter(|(_, raw)| !raw.is_empty())
        .map(|(lift, raw)| (lift, raw.as_str()))
        .collect()
    }
}

impl FormInput for WeightliftingInput {
    const FIELDS: &'static [&'static str] = &[
        "benchpress",
        "squat",
        "deadlift",
        "overheadpress",
        "pullup",
        "bodyweight",
        "gender",
    ];

    fn set_field(&mut self, name: &str, value: &str) -> FrResult<()> {
        match field_key(name).as_str() {
            "benchpress" => self.bench_press = value.to_string(),
            "squat" => self.squat = value.to_string(),
            "deadlift" => self.deadlift = value.to_string(),
            "overheadpress" => self.overhead_press = value.to_string(),
            "pullup" => self.pull_up = value.to_string(),
            "bodyweight" => self.bodyweight = value.to_string(),
            "gender" if value.trim().is_empty() => self.gender = Gender::default(),
            "gender" => {
                self.gender = Gender::from_str(value.trim()).map_err(|_| {
                    FitRankError::Validation(format!(
                        "Gender must be 'male' or 'female', got '{}'",
                        value
                    ))
                })?
            }
            _ => {
                return Err(FitRankError::Validation(format!(
                    "Unknown weightlifting field '{}'",
                    name
                )))
            }
        }
        Ok(())
    }
}

/// Scores one lift. Unparseable values land in the fallback band.
pub fn score_lift(lift: Lift, gender: Gender, raw: &str) -> MetricScore<Lift> {
    let value = parse_number(raw);
    let tier = match value {
        Some(v) => lift.thresholds(gender).tier_at_least(v),
        None => Tier::Below,
    };
    let band = tier.band(lift.fallback_band());
    debug!(%lift, %gender, raw, ?value, %tier, band, "scored lift");

    MetricScore {
        metric: lift,
        raw: raw.to_string(),
        value,
        tier,
        band,
    }
}

pub fn weightlifting_breakdown(input: &WeightliftingInput) -> ScoreDetails<Lift> {
    if input.bodyweight_kg().is_none() {
        warn!(
            bodyweight = %input.bodyweight,
            "bodyweight missing or zero, using default score"
        );
        return ScoreDetails {
            score: DEFAULT_SCORE,
            metrics: Vec::new(),
        };
    }

    let metrics: Vec<_> = input
        .present_lifts()
        .into_iter()
        .map(|(lift, raw)| score_lift(lift, input.gender, raw))
        .collect();
    let bands: Vec<u32> = metrics.iter().map(|m| m.band).collect();

    ScoreDetails {
        score: mean_band(&bands),
        metrics,
    }
}

/// Weightlifting percentile score in [0, 100]; 50 without a bodyweight or
/// without any lift.
pub fn weightlifting_score(input: &WeightliftingInput) -> u32 {
    weightlifting_breakdown(input).score
}

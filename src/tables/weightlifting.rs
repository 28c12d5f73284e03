use super::Thresholds;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum Lift {
    BenchPress,
    Squat,
    Deadlift,
    OverheadPress,
    PullUp,
}

/// A preset option offered by the lifting form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightRange {
    pub label: &'static str,
    pub value: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

const fn range(
    label: &'static str,
    value: &'static str,
    min: Option<f64>,
    max: Option<f64>,
) -> WeightRange {
    WeightRange {
        label,
        value,
        min,
        max,
    }
}

const fn t(elite: f64, good: f64, average: f64, beginner: f64) -> Thresholds<f64> {
    Thresholds {
        elite,
        good,
        average,
        beginner,
    }
}

impl Lift {
    /// Bodyweight multiples, except pull-ups which count reps.
    pub const fn thresholds(self, gender: Gender) -> Thresholds<f64> {
        match (gender, self) {
            (Gender::Male, Self::BenchPress) => t(1.5, 1.2, 0.9, 0.6),
            (Gender::Male, Self::Squat) => t(2.0, 1.6, 1.2, 0.8),
            (Gender::Male, Self::Deadlift) => t(2.5, 2.0, 1.5, 1.0),
            (Gender::Male, Self::OverheadPress) => t(0.9, 0.7, 0.5, 0.3),
            (Gender::Male, Self::PullUp) => t(20.0, 12.0, 6.0, 2.0),

            (Gender::Female, Self::BenchPress) => t(1.1, 0.8, 0.6, 0.4),
            (Gender::Female, Self::Squat) => t(1.6, 1.3, 1.0, 0.7),
            (Gender::Female, Self::Deadlift) => t(2.0, 1.6, 1.2, 0.8),
            (Gender::Female, Self::OverheadPress) => t(0.7, 0.5, 0.3, 0.2),
            (Gender::Female, Self::PullUp) => t(12.0, 8.0, 3.0, 1.0),
        }
    }

    pub const fn fallback_band(self) -> u32 {
        10
    }

    pub const fn is_rep_count(self) -> bool {
        matches!(self, Self::PullUp)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BenchPress => "Bench Press",
            Self::Squat => "Squat",
            Self::Deadlift => "Deadlift",
            Self::OverheadPress => "Overhead Press",
            Self::PullUp => "Pull-up",
        }
    }

    /// Preset options, best first.
    pub fn weight_ranges(self, gender: Gender) -> &'static [WeightRange] {
        match (gender, self) {
            (Gender::Male, Self::BenchPress) => &MALE_BENCH,
            (Gender::Male, Self::Squat) => &MALE_SQUAT,
            (Gender::Male, Self::Deadlift) => &MALE_DEADLIFT,
            (Gender::Male, Self::OverheadPress) => &MALE_OHP,
            (Gender::Male, Self::PullUp) => &MALE_PULLUP,
            (Gender::Female, Self::BenchPress) => &FEMALE_BENCH,
            (Gender::Female, Self::Squat) => &FEMALE_SQUAT,
            (Gender::Female, Self::Deadlift) => &FEMALE_DEADLIFT,
            (Gender::Female, Self::OverheadPress) => &FEMALE_OHP,
            (Gender::Female, Self::PullUp) => &FEMALE_PULLUP,
        }
    }
}

/// Label of the preset whose value matches exactly, else the value itself.
pub fn weight_range_label(gender: Gender, lift: Lift, value: &str) -> String {
    lift.weight_ranges(gender)
        .iter()
        .find(|r| r.value == value)
        .map(|r| r.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

// === MALE ===
static MALE_BENCH: [WeightRange; 5] = [
    range("> 1.5× Bodyweight", "1.6", Some(1.5), None),
    range("1.2 - 1.5× Bodyweight", "1.35", Some(1.2), Some(1.5)),
    range("0.9 - 1.2× Bodyweight", "1.05", Some(0.9), Some(1.2)),
    range("0.6 - 0.9× Bodyweight", "0.75", Some(0.6), Some(0.9)),
    range("< 0.6× Bodyweight", "0.45", Some(0.0), Some(0.6)),
];
static MALE_SQUAT: [WeightRange; 5] = [
    range("> 2.0× Bodyweight", "2.2", Some(2.0), None),
    range("1.6 - 2.0× Bodyweight", "1.8", Some(1.6), Some(2.0)),
    range("1.2 - 1.6× Bodyweight", "1.4", Some(1.2), Some(1.6)),
    range("0.8 - 1.2× Bodyweight", "1.0", Some(0.8), Some(1.2)),
    range("< 0.8× Bodyweight", "0.6", Some(0.0), Some(0.8)),
];
static MALE_DEADLIFT: [WeightRange; 5] = [
    range("> 2.5× Bodyweight", "2.75", Some(2.5), None),
    range("2.0 - 2.5× Bodyweight", "2.25", Some(2.0), Some(2.5)),
    range("1.5 - 2.0× Bodyweight", "1.75", Some(1.5), Some(2.0)),
    range("1.0 - 1.5× Bodyweight", "1.25", Some(1.0), Some(1.5)),
    range("< 1.0× Bodyweight", "0.75", Some(0.0), Some(1.0)),
];
static MALE_OHP: [WeightRange; 5] = [
    range("> 0.9× Bodyweight", "1.0", Some(0.9), None),
    range("0.7 - 0.9× Bodyweight", "0.8", Some(0.7), Some(0.9)),
    range("0.5 - 0.7× Bodyweight", "0.6", Some(0.5), Some(0.7)),
    range("0.3 - 0.5× Bodyweight", "0.4", Some(0.3), Some(0.5)),
    range("< 0.3× Bodyweight", "0.2", Some(0.0), Some(0.3)),
];
static MALE_PULLUP: [WeightRange; 5] = [
    range("> 20 reps", "25", Some(20.0), None),
    range("12 - 20 reps", "16", Some(12.0), Some(20.0)),
    range("6 - 12 reps", "9", Some(6.0), Some(12.0)),
    range("2 - 6 reps", "4", Some(2.0), Some(6.0)),
    range("< 2 reps", "1", Some(0.0), Some(2.0)),
];

// === FEMALE ===
static FEMALE_BENCH: [WeightRange; 5] = [
    range("> 1.1× Bodyweight", "1.2", Some(1.1), None),
    range("0.8 - 1.1× Bodyweight", "0.95", Some(0.8), Some(1.1)),
    range("0.6 - 0.8× Bodyweight", "0.7", Some(0.6), Some(0.8)),
    range("0.4 - 0.6× Bodyweight", "0.5", Some(0.4), Some(0.6)),
    range("< 0.4× Bodyweight", "0.3", Some(0.0), Some(0.4)),
];
static FEMALE_SQUAT: [WeightRange; 5] = [
    range("> 1.6× Bodyweight", "1.8", Some(1.6), None),
    range("1.3 - 1.6× Bodyweight", "1.45", Some(1.3), Some(1.6)),
    range("1.0 - 1.3× Bodyweight", "1.15", Some(1.0), Some(1.3)),
    range("0.7 - 1.0× Bodyweight", "0.85", Some(0.7), Some(1.0)),
    range("< 0.7× Bodyweight", "0.5", Some(0.0), Some(0.7)),
];
static FEMALE_DEADLIFT: [WeightRange; 5] = [
    range("> 2.0× Bodyweight", "2.2", Some(2.0), None),
    range("1.6 - 2.0× Bodyweight", "1.8", Some(1.6), Some(2.0)),
    range("1.2 - 1.6× Bodyweight", "1.4", Some(1.2), Some(1.6)),
    range("0.8 - 1.2× Bodyweight", "1.0", Some(0.8), Some(1.2)),
    range("< 0.8× Bodyweight", "0.6", Some(0.0), Some(0.8)),
];
static FEMALE_OHP: [WeightRange; 5] = [
    range("> 0.7× Bodyweight", "0.8", Some(0.7), None),
    range("0.5 - 0.7× Bodyweight", "0.6", Some(0.5), Some(0.7)),
    range("0.3 - 0.5× Bodyweight", "0.4", Some(0.3), Some(0.5)),
    range("0.2 - 0.3× Bodyweight", "0.25", Some(0.2), Some(0.3)),
    range("< 0.2× Bodyweight", "0.15", Some(0.0), Some(0.2)),
];
static FEMALE_PULLUP: [WeightRange; 5] = [
    range("> 12 reps", "15", Some(12.0), None),
    range("8 - 12 reps", "10", Some(8.0), Some(12.0)),
    range("3 - 8 reps", "5", Some(3.0), Some(8.0)),
    range("1 - 3 reps", "2", Some(1.0), Some(3.0)),
    range("0 reps", "0", Some(0.0), Some(1.0)),
];

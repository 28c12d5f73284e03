//! Display helpers for result views: levels, colours, messages and the
//! small numeric transforms shown next to each lift.

use crate::tables::{Gender, Lift};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub use crate::scorer::time::format_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum PerformanceLevel {
    Elite,
    Good,
    Average,
    Beginner,
    Novice,
}

impl PerformanceLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Self::Elite,
            70..=89 => Self::Good,
            40..=69 => Self::Average,
            20..=39 => Self::Beginner,
            _ => Self::Novice,
        }
    }

    /// Hex colour used for the score gauge.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Elite => "#4CAF50",
            Self::Good => "#8BC34A",
            Self::Average => "#FFC107",
            Self::Beginner => "#FF9800",
            Self::Novice => "#F44336",
        }
    }
}

pub fn performance_label(score: u32) -> String {
    PerformanceLevel::from_score(score).to_string()
}

pub fn performance_color(score: u32) -> &'static str {
    PerformanceLevel::from_score(score).color()
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, ValueEnum, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Running,
    Weightlifting,
}

pub fn motivational_message(discipline: Discipline, score: u32) -> &'static str {
    match (discipline, score) {
        (Discipline::Running, 90..) => "You're an elite runner with exceptional times!",
        (Discipline::Running, 70..) => "You're a strong runner with impressive times.",
        (Discipline::Running, 40..) => "You have solid running abilities. Keep up the good work!",
        (Discipline::Running, _) => {
            "You're just starting your running journey. Every step counts!"
        }
        (Discipline::Weightlifting, 90..) => "You're an elite lifter with exceptional strength!",
        (Discipline::Weightlifting, 70..) => "You're a strong lifter with impressive numbers.",
        (Discipline::Weightlifting, 40..) => {
            "You have solid lifting abilities. Keep up the good work!"
        }
        (Discipline::Weightlifting, _) => {
            "You're just starting your strength journey. Every rep counts!"
        }
    }
}

/// Fixed advice shown under every result, whatever the score.
pub fn training_tip(discipline: Discipline) -> &'static str {
    match discipline {
        Discipline::Running => {
            "To improve your running performance, consider incorporating interval training, \
             strength work, and adequate recovery into your routine. Consistency is key!"
        }
        Discipline::Weightlifting => {
            "To improve your weightlifting performance, focus on progressive overload, proper \
             form, and adequate nutrition and recovery. Consider compound movements for overall \
             strength development."
        }
    }
}

/// Coarse bucket of percent-of-elite, used to tint progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum StrengthShade {
    Peak,
    Strong,
    Solid,
    Developing,
    Low,
}

impl StrengthShade {
    pub fn from_percent(percent_of_elite: i64) -> Self {
        match percent_of_elite {
            95.. => Self::Peak,
            80..=94 => Self::Strong,
            65..=79 => Self::Solid,
            50..=64 => Self::Developing,
            _ => Self::Low,
        }
    }
}

/// `ratio` as a percentage of the elite threshold, capped at 100.
pub fn percent_of_elite(ratio: f64, lift: Lift, gender: Gender) -> i64 {
    let elite = lift.thresholds(gender).elite;
    ((ratio / elite * 100.0).round() as i64).min(100)
}

/// Brzycki estimate. Beyond 36 reps the formula breaks down, so the
/// estimate is pinned at twice the working weight.
pub fn one_rep_max(weight: f64, reps: u32) -> f64 {
    if reps >= 37 {
        return weight * 2.0;
    }
    weight * (36.0 / (37.0 - reps as f64))
}

/// Inverse of [`one_rep_max`]: working weight for `target_reps`.
pub fn weight_for_reps(one_rep_max: f64, target_reps: u32) -> f64 {
    if target_reps >= 37 {
        return one_rep_max / 2.0;
    }
    one_rep_max * ((37.0 - target_reps as f64) / 36.0)
}

pub fn actual_weight(ratio: f64, bodyweight: f64) -> f64 {
    ratio * bodyweight
}

pub fn format_weight(weight: f64) -> String {
    format!("{:.1} kg", weight)
}

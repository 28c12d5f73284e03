use crate::presentation::{
    actual_weight, format_time, format_weight, motivational_message, percent_of_elite,
    training_tip, Discipline, PerformanceLevel, StrengthShade,
};
use crate::scorer::{running_breakdown, weightlifting_breakdown, RunningInput, WeightliftingInput};
use crate::tables::{Gender, Lift, RunningMetric, Tier};
use serde::Serialize;

/// One row of the running result view.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunningResultItem {
    pub metric: RunningMetric,
    pub label: &'static str,
    pub time: String,
    pub seconds: Option<i64>,
    pub elite_time: String,
    pub tier: Tier,
    pub band: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunningAssessment {
    pub score: u32,
    pub level: PerformanceLevel,
    pub label: String,
    pub color: &'static str,
    pub message: &'static str,
    pub tip: &'static str,
    pub results: Vec<RunningResultItem>,
}

/// One row of the lifting result view.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiftResultItem {
    pub lift: Lift,
    pub label: &'static str,
    pub raw: String,
    /// Bodyweight ratio, or reps for pull-ups.
    pub value: Option<f64>,
    /// Weight on the bar in kg. Not meaningful for pull-ups.
    pub actual_weight_kg: Option<f64>,
    pub elite_value: f64,
    pub elite_target_kg: Option<f64>,
    pub percent_of_elite: Option<i64>,
    pub shade: Option<StrengthShade>,
    pub tier: Tier,
    pub band: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiftingAssessment {
    pub score: u32,
    pub level: PerformanceLevel,
    pub label: String,
    pub color: &'static str,
    pub message: &'static str,
    pub tip: &'static str,
    pub gender: Gender,
    pub bodyweight_kg: Option<f64>,
    pub bodyweight_display: Option<String>,
    pub results: Vec<LiftResultItem>,
}

/// Service: score a running form and build its result view.
pub fn assess_running(input: &RunningInput) -> RunningAssessment {
    let details = running_breakdown(input);
    let level = PerformanceLevel::from_score(details.score);

    let results = details
        .metrics
        .into_iter()
        .map(|m| RunningResultItem {
            metric: m.metric,
            label: m.metric.label(),
            elite_time: format_time(m.metric.thresholds().elite as u64),
            seconds: m.value.map(|v| v as i64),
            time: m.raw,
            tier: m.tier,
            band: m.band,
        })
        .collect();

    RunningAssessment {
        score: details.score,
        level,
        label: level.to_string(),
        color: level.color(),
        message: motivational_message(Discipline::Running, details.score),
        tip: training_tip(Discipline::Running),
        results,
    }
}

/// Service: score a lifting form and build its result view.
pub fn assess_weightlifting(input: &WeightliftingInput) -> LiftingAssessment {
    let details = weightlifting_breakdown(input);
    let level = PerformanceLevel::from_score(details.score);
    let bodyweight = input.bodyweight_kg();
    let gender = input.gender;

    let results = details
        .metrics
        .into_iter()
        .map(|m| {
            let lift = m.metric;
            let elite = lift.thresholds(gender).elite;
            let (actual, target) = match bodyweight {
                Some(bw) if !lift.is_rep_count() => (
                    m.value.map(|ratio| actual_weight(ratio, bw)),
                    Some(actual_weight(elite, bw)),
                ),
                _ => (None, None),
            };
            // Percent-of-elite is only shown for a positive entry.
            let percent = m
                .value
                .filter(|v| *v > 0.0)
                .map(|v| percent_of_elite(v, lift, gender));

            LiftResultItem {
                lift,
                label: lift.label(),
                raw: m.raw,
                value: m.value,
                actual_weight_kg: actual,
                elite_value: elite,
                elite_target_kg: target,
                percent_of_elite: percent,
                shade: percent.map(StrengthShade::from_percent),
                tier: m.tier,
                band: m.band,
            }
        })
        .collect();

    LiftingAssessment {
        score: details.score,
        level,
        label: level.to_string(),
        color: level.color(),
        message: motivational_message(Discipline::Weightlifting, details.score),
        tip: training_tip(Discipline::Weightlifting),
        gender,
        bodyweight_kg: bodyweight,
        bodyweight_display: bodyweight.map(format_weight),
        results,
    }
}

use super::time::time_to_seconds;
use super::types::{MetricScore, ScoreDetails};
use super::{field_key, mean_band, FormInput};
use crate::error::{FitRankError, FrResult};
use crate::tables::{RunningMetric, Tier};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Running form state. Times are kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunningInput {
    pub one_km: String,
    pub five_km: String,
    pub ten_km: String,
    pub has_half_marathon: bool,
    pub half_marathon_time: String,
    pub has_marathon: bool,
    pub marathon_time: String,
}

impl RunningInput {
    /// Metrics that take part in scoring, with their raw time strings.
    ///
    /// Short distances count when their string is non-empty. Long distances
    /// count whenever their presence flag is set, even with an empty time.
    pub fn present_metrics(&self) -> Vec<(RunningMetric, &str)> {
        let mut out = Vec::with_capacity(5);
        for (metric, raw) in [
            (RunningMetric::OneKm, &self.one_km),
            (RunningMetric::FiveKm, &self.five_km),
            (RunningMetric::TenKm, &self.ten_km),
        ] {
            if !raw.is_empty() {
                out.push((metric, raw.as_str()));
            }
        }
        if self.has_half_marathon {
            out.push((RunningMetric::HalfMarathon, self.half_marathon_time.as_str()));
        }
        if self.has_marathon {
            out.push((RunningMetric::Marathon, self.marathon_time.as_str()));
        }
        out
    }
}

impl FormInput for RunningInput {
    const FIELDS: &'static [&'static str] = &[
        "onekm",
        "fivekm",
        "tenkm",
        "hashalfmarathon",
        "halfmarathontime",
        "hasmarathon",
        "marathontime",
        "halfmarathon",
        "marathon",
    ];

    fn set_field(&mut self, name: &str, value: &str) -> FrResult<()> {
        match field_key(name).as_str() {
            "onekm" => self.one_km = value.to_string(),
            "fivekm" => self.five_km = value.to_string(),
            "tenkm" => self.ten_km = value.to_string(),
            "hashalfmarathon" => self.has_half_marathon = parse_flag(name, value)?,
            "halfmarathontime" => self.half_marathon_time = value.to_string(),
            "hasmarathon" => self.has_marathon = parse_flag(name, value)?,
            "marathontime" => self.marathon_time = value.to_string(),
            // Shorthand: a time on its own also ticks the presence box.
            "halfmarathon" => {
                self.has_half_marathon = !value.trim().is_empty();
                self.half_marathon_time = value.to_string();
            }
            "marathon" => {
                self.has_marathon = !value.trim().is_empty();
                self.marathon_time = value.to_string();
            }
            _ => {
                return Err(FitRankError::Validation(format!(
                    "Unknown running field '{}'",
                    name
                )))
            }
        }
        Ok(())
    }
}

pub(crate) fn parse_flag(name: &str, value: &str) -> FrResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "no" | "off" => Ok(false),
        "true" | "1" | "yes" | "on" => Ok(true),
        other => Err(FitRankError::Validation(format!(
            "Field '{}' expects a boolean, got '{}'",
            name, other
        ))),
    }
}

/// Scores one time against its metric. Malformed times land in the
/// fallback band.
pub fn score_time(metric: RunningMetric, raw: &str) -> MetricScore<RunningMetric> {
    let seconds = time_to_seconds(raw);
    let tier = match seconds {
        Some(s) => metric.thresholds().tier_at_most(s),
        None => Tier::Below,
    };
    let band = tier.band(metric.fallback_band());
    debug!(%metric, raw, ?seconds, %tier, band, "scored running metric");

    MetricScore {
        metric,
        raw: raw.to_string(),
        value: seconds.map(|s| s as f64),
        tier,
        band,
    }
}

pub fn running_breakdown(input: &RunningInput) -> ScoreDetails<RunningMetric> {
    let metrics: Vec<_> = input
        .present_metrics()
        .into_iter()
        .map(|(metric, raw)| score_time(metric, raw))
        .collect();
    let bands: Vec<u32> = metrics.iter().map(|m| m.band).collect();

    ScoreDetails {
        score: mean_band(&bands),
        metrics,
    }
}

/// Running percentile score in [0, 100]; 50 when no time is entered.
pub fn running_score(input: &RunningInput) -> u32 {
    running_breakdown(input).score
}

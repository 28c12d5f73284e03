use crate::tables::Tier;
use serde::Serialize;

/// How one metric was scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricScore<M> {
    pub metric: M,
    /// Value as the user typed it.
    pub raw: String,
    /// Parsed comparison value (seconds, ratio or reps). `None` if malformed.
    pub value: Option<f64>,
    pub tier: Tier,
    pub band: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails<M> {
    pub score: u32,
    pub metrics: Vec<MetricScore<M>>,
}

impl<M> ScoreDetails<M> {
    pub fn bands(&self) -> Vec<u32> {
        self.metrics.iter().map(|m| m.band).collect()
    }
}

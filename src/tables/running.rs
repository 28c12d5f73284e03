use super::Thresholds;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum RunningMetric {
    OneKm,
    FiveKm,
    TenKm,
    HalfMarathon,
    Marathon,
}

impl RunningMetric {
    /// Reference times in seconds. Lower is better.
    pub const fn thresholds(self) -> Thresholds<i64> {
        match self {
            // 3:00 / 4:00 / 5:00 / 7:00
            Self::OneKm => Thresholds {
                elite: 180,
                good: 240,
                average: 300,
                beginner: 420,
            },
            // 18:00 / 23:00 / 28:00 / 35:00
            Self::FiveKm => Thresholds {
                elite: 1080,
                good: 1380,
                average: 1680,
                beginner: 2100,
            },
            // 38:00 / 48:00 / 60:00 / 75:00
            Self::TenKm => Thresholds {
                elite: 2280,
                good: 2880,
                average: 3600,
                beginner: 4500,
            },
            // 1:20:00 / 1:40:00 / 2:00:00 / 2:30:00
            Self::HalfMarathon => Thresholds {
                elite: 4800,
                good: 6000,
                average: 7200,
                beginner: 9000,
            },
            // 3:00:00 / 3:45:00 / 4:30:00 / 5:30:00
            Self::Marathon => Thresholds {
                elite: 10800,
                good: 13500,
                average: 16200,
                beginner: 19800,
            },
        }
    }

    /// Points for a time slower than the beginner threshold. Long distances
    /// are scored more leniently.
    pub const fn fallback_band(self) -> u32 {
        match self {
            Self::HalfMarathon => 15,
            Self::Marathon => 20,
            _ => 10,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OneKm => "1km",
            Self::FiveKm => "5km",
            Self::TenKm => "10km",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
        }
    }
}

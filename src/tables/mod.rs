//! Static reference tables. Compiled in and never mutated.

pub mod running;
pub mod weightlifting;

pub use self::running::RunningMetric;
pub use self::weightlifting::{Gender, Lift, WeightRange};

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Four-tier threshold set for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds<T> {
    pub elite: T,
    pub good: T,
    pub average: T,
    pub beginner: T,
}

/// Which threshold a performance cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Elite,
    Good,
    Average,
    Beginner,
    Below,
}

impl Tier {
    /// Band points for this tier. `Below` has no fixed value; the metric
    /// supplies its own fallback.
    pub fn band(self, fallback: u32) -> u32 {
        match self {
            Tier::Elite => 95,
            Tier::Good => 75,
            Tier::Average => 50,
            Tier::Beginner => 25,
            Tier::Below => fallback,
        }
    }
}

impl<T: PartialOrd + Copy> Thresholds<T> {
    /// Lower is better (race times). Boundaries are inclusive.
    pub fn tier_at_most(&self, value: T) -> Tier {
        if value <= self.elite {
            Tier::Elite
        } else if value <= self.good {
            Tier::Good
        } else if value <= self.average {
            Tier::Average
        } else if value <= self.beginner {
            Tier::Beginner
        } else {
            Tier::Below
        }
    }

    /// Higher is better (ratios, reps). Boundaries are inclusive.
    pub fn tier_at_least(&self, value: T) -> Tier {
        if value >= self.elite {
            Tier::Elite
        } else if value >= self.good {
            Tier::Good
        } else if value >= self.average {
            Tier::Average
        } else if value >= self.beginner {
            Tier::Beginner
        } else {
            Tier::Below
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Thresholds<i64> = Thresholds {
        elite: 10,
        good: 20,
        average: 30,
        beginner: 40,
    };

    #[test]
    fn at_most_is_inclusive() {
        assert_eq!(T.tier_at_most(10), Tier::Elite);
        assert_eq!(T.tier_at_most(11), Tier::Good);
        assert_eq!(T.tier_at_most(40), Tier::Beginner);
        assert_eq!(T.tier_at_most(41), Tier::Below);
    }

    #[test]
    fn at_least_is_inclusive() {
        let t = Thresholds {
            elite: 2.0,
            good: 1.5,
            average: 1.0,
            beginner: 0.5,
        };
        assert_eq!(t.tier_at_least(2.0), Tier::Elite);
        assert_eq!(t.tier_at_least(1.99), Tier::Good);
        assert_eq!(t.tier_at_least(0.5), Tier::Beginner);
        assert_eq!(t.tier_at_least(0.49), Tier::Below);
        assert_eq!(t.tier_at_least(f64::NAN), Tier::Below);
    }

    #[test]
    fn below_uses_fallback() {
        assert_eq!(Tier::Below.band(15), 15);
        assert_eq!(Tier::Elite.band(15), 95);
    }
}

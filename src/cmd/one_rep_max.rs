use super::print_json;
use clap::Args;
use fitrank::config::ReportConfig;
use fitrank::presentation::{format_weight, one_rep_max, weight_for_reps};
use fitrank::{FitRankError, FrResult};
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct OneRepMaxArgs {
    #[command(flatten)]
    pub report: ReportConfig,

    /// Weight lifted, kg
    #[arg(short, long)]
    pub weight: f64,

    /// Reps completed with that weight
    #[arg(short, long)]
    pub reps: u32,

    /// Also estimate the working weight for this many reps
    #[arg(short, long)]
    pub target_reps: Option<u32>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Estimate {
    weight: f64,
    reps: u32,
    one_rep_max: f64,
    target_reps: Option<u32>,
    target_weight: Option<f64>,
}

pub fn run(args: OneRepMaxArgs) -> FrResult<()> {
    if !args.weight.is_finite() || args.weight < 0.0 {
        return Err(FitRankError::Validation(format!(
            "Weight must be a non-negative number, got {}",
            args.weight
        )));
    }

    let orm = one_rep_max(args.weight, args.reps);
    let estimate = Estimate {
        weight: args.weight,
        reps: args.reps,
        one_rep_max: orm,
        target_reps: args.target_reps,
        target_weight: args.target_reps.map(|r| weight_for_reps(orm, r)),
    };

    if args.report.is_json() {
        return print_json(&estimate);
    }

    println!(
        "{} × {} → estimated 1RM {}",
        format_weight(estimate.weight),
        estimate.reps,
        format_weight(estimate.one_rep_max)
    );
    if let (Some(r), Some(w)) = (estimate.target_reps, estimate.target_weight) {
        println!("Working weight for {} reps: {}", r, format_weight(w));
    }
    Ok(())
}

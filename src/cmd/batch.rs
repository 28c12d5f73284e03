use super::print_json;
use crate::reports;
use clap::Args;
use fitrank::api::{assess_running, assess_weightlifting};
use fitrank::config::ReportConfig;
use fitrank::loader::{load_running_from_path, load_weightlifting_from_path};
use fitrank::presentation::{Discipline, PerformanceLevel};
use fitrank::FrResult;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub report: ReportConfig,

    #[arg(value_enum)]
    pub discipline: Discipline,

    /// CSV roster; header row names form fields, optional `name` column
    pub file: PathBuf,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RankedAthlete {
    pub rank: usize,
    pub name: String,
    pub score: u32,
    pub level: PerformanceLevel,
    pub metrics: usize,
}

pub fn run(args: BatchArgs) -> FrResult<()> {
    info!("📂 Loading roster: {}", args.file.display());

    let mut scored: Vec<(String, u32, usize)> = match args.discipline {
        Discipline::Running => load_running_from_path(&args.file)?
            .into_par_iter()
            .map(|a| {
                let r = assess_running(&a.input);
                (a.name, r.score, r.results.len())
            })
            .collect(),
        Discipline::Weightlifting => load_weightlifting_from_path(&args.file)?
            .into_par_iter()
            .map(|a| {
                let r = assess_weightlifting(&a.input);
                (a.name, r.score, r.results.len())
            })
            .collect(),
    };
    info!("Scored {} athletes.", scored.len());

    // Highest score first; ties keep roster order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let ranking: Vec<RankedAthlete> = scored
        .into_iter()
        .enumerate()
        .map(|(i, (name, score, metrics))| RankedAthlete {
            rank: i + 1,
            name,
            score,
            level: PerformanceLevel::from_score(score),
            metrics,
        })
        .collect();

    if args.report.is_json() {
        print_json(&ranking)
    } else {
        reports::assessment::ranking(args.discipline, &ranking, args.report.use_color());
        Ok(())
    }
}

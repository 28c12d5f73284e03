use super::{print_json, read_form};
use crate::reports;
use clap::Args;
use fitrank::api::assess_running;
use fitrank::config::ReportConfig;
use fitrank::scorer::{FormInput, RunningInput};
use fitrank::FrResult;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RunningArgs {
    #[command(flatten)]
    pub report: ReportConfig,

    /// Saved form (JSON). Flags below override its fields.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 1km time, mm:ss
    #[arg(long)]
    pub one_km: Option<String>,

    /// 5km time, mm:ss
    #[arg(long)]
    pub five_km: Option<String>,

    /// 10km time, mm:ss
    #[arg(long)]
    pub ten_km: Option<String>,

    /// Half marathon time, hh:mm:ss
    #[arg(long)]
    pub half_marathon: Option<String>,

    /// Marathon time, hh:mm:ss
    #[arg(long)]
    pub marathon: Option<String>,
}

impl RunningArgs {
    pub fn to_input(&self) -> FrResult<RunningInput> {
        let mut input: RunningInput = match &self.input {
            Some(path) => {
                info!("📂 Loading running form: {}", path.display());
                read_form(path)?
            }
            None => RunningInput::default(),
        };

        for (field, value) in [
            ("oneKm", &self.one_km),
            ("fiveKm", &self.five_km),
            ("tenKm", &self.ten_km),
            ("halfMarathon", &self.half_marathon),
            ("marathon", &self.marathon),
        ] {
            if let Some(v) = value {
                input.set_field(field, v)?;
            }
        }
        Ok(input)
    }
}

pub fn run(args: RunningArgs) -> FrResult<()> {
    let input = args.to_input()?;
    info!("🏃 Scoring running form...");
    let assessment = assess_running(&input);

    if args.report.is_json() {
        print_json(&assessment)
    } else {
        reports::assessment::running(&assessment, args.report.use_color());
        Ok(())
    }
}

use super::{print_json, read_form};
use crate::reports;
use clap::Args;
use fitrank::api::assess_weightlifting;
use fitrank::config::ReportConfig;
use fitrank::scorer::{FormInput, WeightliftingInput};
use fitrank::tables::Gender;
use fitrank::FrResult;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct WeightliftingArgs {
    #[command(flatten)]
    pub report: ReportConfig,

    /// Saved form (JSON). Flags below override its fields.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Bodyweight in kg
    #[arg(short, long)]
    pub bodyweight: Option<String>,

    #[arg(short, long, value_enum)]
    pub gender: Option<Gender>,

    /// Bench press as a multiple of bodyweight
    #[arg(long)]
    pub bench_press: Option<String>,

    /// Squat as a multiple of bodyweight
    #[arg(long)]
    pub squat: Option<String>,

    /// Deadlift as a multiple of bodyweight
    #[arg(long)]
    pub deadlift: Option<String>,

    /// Overhead press as a multiple of bodyweight
    #[arg(long)]
    pub overhead_press: Option<String>,

    /// Strict pull-ups in one set
    #[arg(long)]
    pub pull_up: Option<String>,
}

impl WeightliftingArgs {
    pub fn to_input(&self) -> FrResult<WeightliftingInput> {
        let mut input: WeightliftingInput = match &self.input {
            Some(path) => {
                info!("📂 Loading weightlifting form: {}", path.display());
                read_form(path)?
            }
            None => WeightliftingInput::default(),
        };

        if let Some(gender) = self.gender {
            input.gender = gender;
        }
        for (field, value) in [
            ("bodyweight", &self.bodyweight),
            ("benchPress", &self.bench_press),
            ("squat", &self.squat),
            ("deadlift", &self.deadlift),
            ("overheadPress", &self.overhead_press),
            ("pullUp", &self.pull_up),
        ] {
            if let Some(v) = value {
                input.set_field(field, v)?;
            }
        }
        Ok(input)
    }
}

pub fn run(args: WeightliftingArgs) -> FrResult<()> {
    let input = args.to_input()?;
    info!("🏋️ Scoring weightlifting form ({})...", input.gender);
    let assessment = assess_weightlifting(&input);

    if args.report.is_json() {
        print_json(&assessment)
    } else {
        reports::assessment::weightlifting(&assessment, args.report.use_color());
        Ok(())
    }
}

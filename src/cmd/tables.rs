use crate::reports;
use clap::Args;
use fitrank::tables::Gender;
use fitrank::FrResult;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct TablesArgs {
    /// Only show the lifting table for this gender
    #[arg(short, long, value_enum)]
    pub gender: Option<Gender>,

    /// Also list the preset weight ranges offered by the lifting form
    #[arg(long, default_value_t = false)]
    pub ranges: bool,
}

pub fn run(args: TablesArgs) -> FrResult<()> {
    reports::reference::running_table();

    let genders: Vec<Gender> = match args.gender {
        Some(g) => vec![g],
        None => Gender::iter().collect(),
    };
    for gender in genders {
        reports::reference::lifting_table(gender);
        if args.ranges {
            reports::reference::weight_ranges(gender);
        }
    }
    Ok(())
}

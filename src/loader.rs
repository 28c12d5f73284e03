//! CSV rosters for batch scoring.
//!
//! The header row names form fields (`oneKm`, `half_marathon`, `benchPress`,
//! ...). An optional `name` column labels each athlete.

use crate::error::{FitRankError, FrResult};
use crate::scorer::{FormInput, RunningInput, WeightliftingInput};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct AthleteRecord<I> {
    pub name: String,
    pub input: I,
}

pub fn load_running<R: Read>(reader: R) -> FrResult<Vec<AthleteRecord<RunningInput>>> {
    load_records(reader)
}

pub fn load_weightlifting<R: Read>(reader: R) -> FrResult<Vec<AthleteRecord<WeightliftingInput>>> {
    load_records(reader)
}

pub fn load_running_from_path<P: AsRef<Path>>(
    path: P,
) -> FrResult<Vec<AthleteRecord<RunningInput>>> {
    load_running(open(path.as_ref())?)
}

pub fn load_weightlifting_from_path<P: AsRef<Path>>(
    path: P,
) -> FrResult<Vec<AthleteRecord<WeightliftingInput>>> {
    load_weightlifting(open(path.as_ref())?)
}

fn open(path: &Path) -> FrResult<File> {
    debug!("Loading roster from: {}", path.display());
    File::open(path).map_err(|e| {
        FitRankError::Io(std::io::Error::new(
            e.kind(),
            format!("Could not open roster at '{}': {}", path.display(), e),
        ))
    })
}

fn load_records<R: Read, I: FormInput>(reader: R) -> FrResult<Vec<AthleteRecord<I>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let name_col = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("name"));

    for (idx, h) in headers.iter().enumerate() {
        if Some(idx) != name_col && !I::is_field(h) {
            return Err(FitRankError::Validation(format!(
                "Unknown roster column '{}'",
                h
            )));
        }
    }

    let mut records = Vec::new();
    let mut skipped = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!("[Row {}] CSV Parse Error: {}", row_idx + 1, e);
                skipped += 1;
                continue;
            }
        };

        let mut input = I::default();
        let mut row_ok = true;
        for (idx, value) in rec.iter().enumerate() {
            if Some(idx) == name_col {
                continue;
            }
            let Some(header) = headers.get(idx) else {
                continue;
            };
            if let Err(e) = input.set_field(header, value) {
                warn!("[Row {}] {}", row_idx + 1, e);
                row_ok = false;
                break;
            }
        }
        if !row_ok {
            skipped += 1;
            continue;
        }

        let name = name_col
            .and_then(|c| rec.get(c))
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Athlete {}", row_idx + 1));

        records.push(AthleteRecord { name, input });
    }

    if skipped > 0 {
        warn!("Skipped {} invalid rows in roster.", skipped);
    }
    debug!("Loaded {} athletes.", records.len());

    Ok(records)
}

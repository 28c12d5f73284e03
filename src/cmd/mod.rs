pub mod batch;
pub mod one_rep_max;
pub mod running;
pub mod tables;
pub mod weightlifting;

use fitrank::FrResult;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Reads a saved form (camelCase JSON, as the web form posts it).
pub fn read_form<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> FrResult<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn print_json<T: serde::Serialize>(value: &T) -> FrResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

use clap::{Args, ValueEnum};
use strum_macros::Display;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Output options shared by every scoring command.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportConfig {
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

impl ReportConfig {
    pub fn use_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

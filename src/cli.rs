use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "invoke-errors")]
#[command(
    author,
    version,
    about = "Enrich failed HTTP invocation attributes with a title and error details"
)]
pub struct Cli {
    /// Attribute bag JSON file; reads stdin when omitted
    #[clap(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Force a classification path instead of auto-detecting it
    #[clap(value_enum, short = 'p', long = "path")]
    pub path: Option<ClassificationPath>,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum ClassificationPath {
    Status,
    Exception,
}

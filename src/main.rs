mod cli;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use clap::Parser;
use cli::{ClassificationPath, Cli};
use invoke_errors::{enrich, enrich_exception, enrich_http_status, AttributeBag, Result};

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Enrich a JSON attribute bag, returning the enriched bag as pretty JSON.
/// Empty input means no unit of data is available and yields `None`.
fn enrich_input(input: &str, path: Option<&ClassificationPath>) -> Result<Option<String>> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    let mut bag: AttributeBag = serde_json::from_str(input)?;
    match path {
        Some(ClassificationPath::Status) => enrich_http_status(&mut bag),
        Some(ClassificationPath::Exception) => enrich_exception(&mut bag)?,
        None => enrich(&mut bag)?,
    }

    Ok(Some(serde_json::to_string_pretty(&bag)?))
}

fn run(cli: &Cli) -> Result<()> {
    let input = read_input(cli.file.as_deref())?;
    if let Some(output) = enrich_input(&input, cli.path.as_ref())? {
        println!("{}", output);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

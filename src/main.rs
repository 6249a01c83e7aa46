mod dataset;
mod jsonl;
mod nice_display;

use crate::dataset::Dataset;
use crate::nice_display::{NiceDisplay, NiceError};
use clap::Parser;
use std::path::PathBuf;

const DEFAULT_OUTPUT_PATH: &str = "data/training-data.jsonl";

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1",
    about = "Writes the code archaeologist training examples as JSONL"
)]
struct Cmd {
    /// Where to write the dataset. Missing parent directories are created.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

enum Error {
    Write(dataset::WriteError),
}

impl NiceDisplay for Error {
    fn message(&self) -> String {
        match self {
            Error::Write(err) => err.message(),
        }
    }
}

fn main() -> Result<(), NiceError> {
    nice_main().map_err(|err| err.to_nice_error())
}

fn nice_main() -> Result<(), Error> {
    // A missing .env is fine, it only ever carries RUST_LOG
    dotenv::dotenv().ok();
    init_tracing();

    let cmd = Cmd::parse();

    let report = Dataset::code_archaeologist()
        .write(&cmd.output)
        .map_err(Error::Write)?;

    println!("Wrote {} examples to {}", report.count, report.path.display());

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

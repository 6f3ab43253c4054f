//! `sheetdb` command line front end.
//!
//! ```bash
//! # Import every sheet of the workbook found in ~/Downloads
//! sheetdb
//!
//! # Preview two sheets of an explicit workbook
//! sheetdb --excel book.xlsx --sheets "Intake,Patient Notes" --preview
//!
//! # Print 10 random rows of one table
//! sheetdb --sample --sample-table intake --sample-size 10
//! ```
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use sheetdb::config::{self, ConvertOptions, SampleOptions};
use sheetdb::{pipeline, resolver, sampler, LogReporter, Reporter, SheetDbError};
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "sheetdb")]
#[command(author, version, about = "Import an Excel workbook into a DuckDB database and sample data", long_about = None)]
struct Cli {
    /// Path to the Excel file. Default: Downloads/"EMR mental health database .xlsx"
    #[arg(short, long, value_name = "PATH", env = config::ENV_EXCEL)]
    excel: Option<PathBuf>,

    /// Output database path. Default: ./emr_mental_health.db
    #[arg(short, long, value_name = "PATH", env = config::ENV_DATABASE)]
    db: Option<PathBuf>,

    /// Comma-separated sheet names to import. Default: all sheets
    #[arg(short, long, value_name = "NAMES", conflicts_with = "sample")]
    sheets: Option<String>,

    /// Print sheet names with row and column counts, do not write the database
    #[arg(long, conflicts_with = "sample")]
    preview: bool,

    /// Print a random sample of rows from the database and exit
    #[arg(long)]
    sample: bool,

    /// Number of random rows to print when sampling
    #[arg(long, value_name = "N", default_value = "5")]
    sample_size: NonZeroUsize,

    /// Table to sample. Default: a random table
    #[arg(long, value_name = "NAME")]
    sample_table: Option<String>,

    /// More output (-v debug, -vv trace). RUST_LOG overrides this
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let reporter = LogReporter;
    match run(cli, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            reporter.error(&error.to_string());
            let code = error
                .downcast_ref::<SheetDbError>()
                .map(SheetDbError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}

fn run(cli: Cli, reporter: &dyn Reporter) -> anyhow::Result<()> {
    // The database path is settled first so that sampling never needs the workbook.
    let database = match cli.db {
        Some(path) => path,
        None => config::default_database_path(
            std::env::current_dir().context("Failed to determine the working directory")?,
        ),
    };

    if cli.sample {
        let options = SampleOptions {
            database,
            table: cli.sample_table,
            size: cli.sample_size,
        };
        match sampler::sample(&options, &mut rand::rng(), reporter) {
            Ok(sample) if sample.is_empty() => {}
            Ok(sample) => println!("\n{sample}"),
            Err(error) => reporter.error(&error.to_string()),
        }
        return Ok(());
    }

    let workbook = resolver::resolve(cli.excel.as_deref(), reporter)?;
    let options = ConvertOptions {
        workbook,
        database,
        sheets: cli.sheets.as_deref().and_then(config::parse_sheet_list),
        preview: cli.preview,
    };
    pipeline::run(&options, reporter)?;
    Ok(())
}

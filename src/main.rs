use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cutstock_optimizer::format::{self, OutputFormat};
use cutstock_optimizer::{Engine, EngineConfig};

/// Column-generation cutting-stock optimizer for lumber stock.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// CSV of purchasable stock: `length` (feet), `price`.
    prices_file: PathBuf,

    /// CSV of required cuts: `LEN`, `QTY`, optional label column.
    parts_file: PathBuf,

    /// How to render the resulting plan.
    #[arg(long, value_enum, default_value_t = OutputFormat::Simple)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(rendered) => {
            print!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, cutstock_optimizer::OptimizerError> {
    let stocks = cutstock_optimizer::ingest::read_stock_options(&cli.prices_file)?;
    let cuts = cutstock_optimizer::ingest::read_required_cuts(&cli.parts_file)?;

    let engine = Engine::new(stocks, cuts, EngineConfig::default())?;
    let plan = engine.optimize()?;

    Ok(format::render(&plan, cli.format))
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use snapedit_cli::{load_config, parse_steps, run_script, CliError};

#[derive(Parser)]
#[command(name = "snapedit")]
#[command(version, about = "Apply simple edits to an image with undo/redo", long_about = None)]
struct Cli {
    /// Image to open (JPEG, PNG or BMP)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Edit step: grayscale, edges, blur=N, brightness=N, contrast=N,
    /// rotate=90|180|270, flip=horizontal|vertical, resize=PERCENT,
    /// undo or redo. Repeatable; applied in order.
    #[arg(short = 'e', long = "edit", value_name = "STEP")]
    steps: Vec<String>,

    /// Save the result here (PNG when no extension is given)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Editor config file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let steps = parse_steps(&cli.steps)?;
    let config = load_config(cli.config.as_deref())?;

    let (status, written) = run_script(config, &cli.input, &steps, cli.output.as_deref())?;
    if let Some(path) = written {
        println!("Saved {}", path.display());
    }
    println!("{status}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

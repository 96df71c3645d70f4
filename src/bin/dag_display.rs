// src/bin/dag_display.rs

use clap::Parser;
use dagkit::cli::DisplayArgs;
use dagkit::{logging, run_display};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("dag-display error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = DisplayArgs::parse();
    logging::init_logging(args.log_level)?;
    run_display(args)
}

// src/bin/dag_gen.rs

use clap::Parser;
use dagkit::cli::GenerateArgs;
use dagkit::{logging, run_generate};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("dag-gen error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = GenerateArgs::parse();
    logging::init_logging(args.log_level)?;
    run_generate(args)
}

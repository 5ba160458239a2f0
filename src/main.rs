use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use hst_sniff::presentation::cli::{Cli, init_logging, run};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}

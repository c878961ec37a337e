use anyhow::Result;
use clap::Parser;
use daylimit::cli::{init_tracing, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}

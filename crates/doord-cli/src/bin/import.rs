use clap::Parser;

use doord_cli::{cli::ImportCli, commands};

fn main() -> anyhow::Result<()> {
    let cli = ImportCli::parse();
    commands::init_tracing(cli.verbose);
    commands::run_import(cli)
}

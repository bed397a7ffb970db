use clap::Parser;

use doord_cli::{cli::ListenerCli, commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = ListenerCli::parse();
    commands::init_tracing(cli.verbose);
    commands::run_listener(cli).await
}

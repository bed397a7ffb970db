use anyhow::Context;
use colored::Colorize;
use doord_import::{Forwarder, RecordReader};
use doord_sink::DoordSink;
use tracing::Level;

use crate::cli::{ImportCli, ListenerCli};

/// Install the stderr `fmt` subscriber; `-v` enables debug output.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

pub fn run_import(cli: ImportCli) -> anyhow::Result<()> {
    let reader = RecordReader::from_path(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let config = cli.forwarder_config();
    let forwarder = Forwarder::http(&config)?;
    tracing::info!(input = %cli.input.display(), endpoint = %config.url(), "starting import");

    let summary = doord_import::run_import(reader, &forwarder)
        .with_context(|| format!("import of {} aborted", cli.input.display()))?;

    eprintln!(
        "{} Imported {} events ({} rows read, {} skipped)",
        "✓".green().bold(),
        summary.sent.to_string().bold(),
        summary.read,
        summary.skipped.to_string().yellow(),
    );
    Ok(())
}

pub async fn run_listener(cli: ListenerCli) -> anyhow::Result<()> {
    let config = cli.sink_config();
    let bind = config.bind_addr;
    DoordSink::new(config)
        .serve()
        .await
        .with_context(|| format!("listener on {bind} failed"))
}

use clap::Parser;
use std::path::PathBuf;
use tenantline::config::Config;

#[derive(Parser)]
#[command(name = "tenantline", about = "Assign tenants to newline-delimited JSON log entries")]
struct Cli {
    /// Pipeline config file (TOML, YAML or JSON). Defaults to
    /// ~/.config/tenantline/config.toml if present.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Log per-entry stage diagnostics to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let debug = cli.debug || config.log.debug;
    let default_filter = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
    tenantline::set_debug(debug);

    let pipeline = config.pipeline()?;
    tracing::debug!(stages = ?pipeline.stage_names(), "pipeline built");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::BufWriter::new(std::io::stdout().lock());
    let stats = tenantline::ingestor::run(&pipeline, stdin, stdout)?;

    tracing::info!(
        processed = stats.processed,
        skipped = stats.skipped,
        tenanted = stats.tenanted,
        "input exhausted"
    );
    Ok(())
}

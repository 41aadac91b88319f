use anyhow::Context;
use processor::{format_reports, Processor};
use tracing::info;

mod config;
mod telemetry;

use config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(config.trace_json);

    info!(dataset = %config.dataset.display(), quantum = config.quantum.get(), "loading processes");
    let processes = processor::load_file(&config.dataset)
        .with_context(|| format!("error loading scheduling file {}", config.dataset.display()))?;

    let reports = Processor::new(processes).run_all(config.quantum);
    print!("{}", format_reports(&reports));

    Ok(())
}

#[cfg(test)]
mod tests;

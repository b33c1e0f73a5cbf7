use std::error::Error;

use log::info;

use phantom_app::config;
use phantom_app::runner::{self, RunOutcome};
use phantom_app::telemetry::CsvSink;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "phantom.json".into());
    let config = config::load_config(&config_path)?;

    info!("telemetry log: {}", config.log_path);
    let mut sink = CsvSink::create(&config.log_path)?;

    match runner::run(&config, &mut sink)? {
        RunOutcome::Invalidated => info!("run complete: attack geometry invalidated"),
        RunOutcome::TimedOut => info!("run complete: scenario window closed, attack still valid"),
    }
    Ok(())
}

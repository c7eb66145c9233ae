mod chronometer;
mod configuration;
mod logger;
mod samples;

use self::{configuration::Configuration, logger::Logger};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(message) => {
            tracing::error!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let logger = Logger::new(configuration.format());
    match samples::run(&configuration, &logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "demonstration failed");
            ExitCode::FAILURE
        }
    }
}

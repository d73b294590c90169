use std::{fs::File, sync::Mutex};

use color_eyre::eyre::WrapErr;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Sends traces to the configured log file, if any.
pub fn init(config: &Config) -> color_eyre::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let filter = EnvFilter::try_new(&config.log_filter)
        .wrap_err_with(|| format!("invalid log filter {:?}", config.log_filter))?;
    let file = File::create(path).wrap_err("cannot open log file")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    Ok(())
}

//! Tracing subscriber setup

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::settings::LogSettings;

/// Install the global subscriber. `RUST_LOG` wins over the settings filter.
///
/// With `owns_terminal` set the screen belongs to the organizer, so logs go
/// to the configured file or nowhere. Otherwise they go to stderr.
pub fn init(
    settings: &LogSettings,
    owns_terminal: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if !owns_terminal {
        builder.with_writer(std::io::stderr).try_init()?;
        return Ok(());
    }

    match &settings.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()?;
        }
        None => builder.with_writer(std::io::sink).try_init()?,
    }
    Ok(())
}

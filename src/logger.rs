use log::LevelFilter;

use crate::config::Config;
use crate::error::{BootError, BootResult};

/// Handle to the process logger, bound to the configuration it was built from.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LevelFilter,
}

impl Logger {
    pub fn new(config: &Config) -> BootResult<Self> {
        let level = if config.verbose {
            LevelFilter::Debug
        } else {
            config
                .log
                .parse::<LevelFilter>()
                .map_err(|_| BootError::config(format!("invalid log level \"{}\"", config.log)))?
        };

        // `RUST_LOG` still wins over the configured filter
        let installed = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(level.as_str()),
        )
        .format_timestamp(None)
        .try_init();
        if installed.is_err() {
            debug!("logger already installed, keeping the existing one");
        }

        Ok(Self { level })
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

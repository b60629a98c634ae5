//! Process-wide configuration.
//!
//! Sources, lowest precedence first: built-in defaults, `<base>/cmdhub.toml`,
//! `CMDHUB_*` environment variables, then the `--verbose` flag.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::BootResult;

pub const CONFIG_FILE: &str = "cmdhub.toml";
pub const ENV_PREFIX: &str = "CMDHUB_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Print the construction site and call stack of failures.
    pub verbose: bool,
    /// Default log filter, overridden by `RUST_LOG`.
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            log: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn figment(base: &Path, args: &[String]) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(base.join(CONFIG_FILE)))
            .merge(Env::prefixed(ENV_PREFIX));

        if args.iter().any(|arg| is_verbose_flag(arg)) {
            figment = figment.merge(Serialized::default("verbose", true));
        }
        figment
    }

    /// Extracts lossily so env booleans like `1`, `yes` or `on` are accepted.
    pub fn load(base: &Path, args: &[String]) -> BootResult<Self> {
        Ok(Self::figment(base, args).extract_lossy()?)
    }
}

pub fn is_verbose_flag(arg: &str) -> bool {
    arg == "--verbose" || arg == "-v"
}

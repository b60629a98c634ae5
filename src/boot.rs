//! Startup sequence: config, logger, discovery, resolution, execution.
//!
//! Failures from any step travel back as a [`BootError`] and are reported
//! once, in [`boot`].

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::command::Context;
use crate::config::{Config, is_verbose_flag};
use crate::error::{BootError, BootResult, CommandError};
use crate::logger::Logger;
use crate::registry::Registry;
use crate::report;
use crate::resolver;

pub const DEFAULT_ACTION: &str = "help";
/// Subdirectory of the base location holding command manifests.
pub const COMMANDS_DIR: &str = "commands";

/// Runs the action named on the process command line.
///
/// `base` defaults to the directory holding the running executable.
pub fn boot(base: Option<PathBuf>) -> ExitCode {
    let args = env::args().collect::<Vec<_>>();
    let mut stdout = io::stdout();
    let mut config = None;

    if let Err(err) = run(base, &args, &mut config, &mut stdout) {
        report::report(&err, config.as_ref());
    }
    ExitCode::SUCCESS
}

/// Everything `boot` does short of reporting.
///
/// `args` is the full argument vector, program name included. The
/// configuration is left in `config` as soon as it is built so the caller can
/// honour `verbose` when reporting.
pub fn run(
    base: Option<PathBuf>,
    args: &[String],
    config: &mut Option<Config>,
    out: &mut dyn Write,
) -> BootResult<()> {
    let base = resolve_base(base)?;
    let (action, rest) = split_args(args);

    let config = &*config.insert(Config::load(&base, &rest)?);
    let logger = Logger::new(config)?;
    info!("==> Booting from {}", base.display());
    debug!("    Action: {action}");

    let registry = Registry::discover(&base.join(COMMANDS_DIR))?;
    let descriptor = resolver::resolve(action, &registry)?;

    let passthrough = rest
        .into_iter()
        .filter(|arg| !is_verbose_flag(arg))
        .collect::<Vec<_>>();
    let ctx = Context {
        config,
        logger: &logger,
        registry: &registry,
        args: &passthrough,
        base: &base,
    };

    descriptor.command().execute(&ctx, out)?;
    out.flush().map_err(CommandError::from)?;
    Ok(())
}

/// Splits off the action name; everything after it is passed through.
pub fn split_args(args: &[String]) -> (&str, Vec<String>) {
    let action = args.get(1).map_or(DEFAULT_ACTION, String::as_str);
    let rest = args.iter().skip(2).cloned().collect();
    (action, rest)
}

fn resolve_base(base: Option<PathBuf>) -> BootResult<PathBuf> {
    let base = match base {
        Some(base) => base,
        None => env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .ok_or_else(|| BootError::config("cannot locate the running executable"))?,
    };

    fs::canonicalize(&base)
        .or_else(|_| std::path::absolute(&base))
        .map_err(|err| {
            BootError::config(format!("cannot resolve base {}: {err}", base.display()))
        })
}

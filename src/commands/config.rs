use std::io::Write;

use crate::command::{Command, Context};
use crate::error::{CommandError, CommandResult};

pub type CommandInstance = ConfigCommand;

/// Prints the effective configuration.
#[derive(Debug, Default)]
pub struct ConfigCommand;

impl Command for ConfigCommand {
    fn name(&self) -> &str {
        "config"
    }

    fn description(&self) -> &str {
        "Print the effective configuration"
    }

    fn execute(&self, ctx: &Context<'_>, out: &mut dyn Write) -> CommandResult {
        let rendered = toml::to_string(ctx.config)
            .map_err(|err| CommandError::new(format!("cannot render configuration: {err}")))?;

        writeln!(out, "# base: {}", ctx.base.display())?;
        writeln!(out, "# effective log level: {}", ctx.logger.level())?;
        write!(out, "{rendered}")?;
        Ok(())
    }
}

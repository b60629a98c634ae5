use std::io::Write;

use crate::command::{Command, Context};
use crate::error::CommandResult;

pub type CommandInstance = HelpCommand;

#[derive(Debug, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "Show this list of commands"
    }

    fn execute(&self, ctx: &Context<'_>, out: &mut dyn Write) -> CommandResult {
        writeln!(out, "{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
        writeln!(out)?;
        writeln!(out, "Usage:")?;
        writeln!(out, "  {} <command> [<options>]", env!("CARGO_PKG_NAME"))?;
        writeln!(out)?;
        writeln!(out, "Commands:")?;
        for descriptor in ctx.registry.iter() {
            writeln!(out, "  {}", descriptor.name())?;
            let description = descriptor.command().description();
            if !description.is_empty() {
                writeln!(out, "    {description}")?;
            }
        }
        writeln!(out)?;
        writeln!(out, "Options:")?;
        writeln!(out, "  -v, --verbose    Show where failures come from")?;
        Ok(())
    }
}

use std::io::Write;

use crate::command::{Command, Context};
use crate::error::CommandResult;

pub type CommandInstance = VersionCommand;

#[derive(Debug, Default)]
pub struct VersionCommand;

impl Command for VersionCommand {
    fn name(&self) -> &str {
        "version"
    }

    fn description(&self) -> &str {
        "Print the version"
    }

    fn execute(&self, _ctx: &Context<'_>, out: &mut dyn Write) -> CommandResult {
        writeln!(out, "{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
        Ok(())
    }
}

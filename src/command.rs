use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::CommandResult;
use crate::logger::Logger;
use crate::registry::Registry;

/// Shared state handed to whichever command runs.
pub struct Context<'a> {
    pub config: &'a Config,
    pub logger: &'a Logger,
    pub registry: &'a Registry,
    /// Arguments after the action name.
    pub args: &'a [String],
    /// Absolute base directory the dispatcher booted from.
    pub base: &'a Path,
}

/// An executable unit selectable by its invocation name.
pub trait Command {
    /// Invocation name, matched exactly against the action argument.
    fn name(&self) -> &str;

    /// Short description (shown in the help list).
    fn description(&self) -> &str {
        ""
    }

    /// Execute the command, writing user-facing output to `out`.
    fn execute(&self, ctx: &Context<'_>, out: &mut dyn Write) -> CommandResult;
}

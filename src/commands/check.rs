use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use crate::command::{Command, Context};
use crate::error::{CommandError, CommandResult, SourceSpan};

pub type CommandInstance = CheckCommand;

#[derive(Debug, Parser)]
#[command(name = "check", about = "Check a TOML file for syntax errors")]
struct CheckArgs {
    /// File to check
    path: PathBuf,
}

#[derive(Debug, Default)]
pub struct CheckCommand;

impl Command for CheckCommand {
    fn name(&self) -> &str {
        "check"
    }

    fn description(&self) -> &str {
        "Check a TOML file (such as a command manifest) for syntax errors"
    }

    fn execute(&self, ctx: &Context<'_>, out: &mut dyn Write) -> CommandResult {
        let argv = std::iter::once("check").chain(ctx.args.iter().map(String::as_str));
        let args = match CheckArgs::try_parse_from(argv) {
            Ok(args) => args,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                write!(out, "{}", err.render())?;
                return Ok(());
            }
            Err(err) => return Err(CommandError::new(err.render().to_string().trim_end())),
        };

        let content = fs::read_to_string(&args.path)
            .map_err(|err| CommandError::new(format!("cannot read {}: {err}", args.path.display())))?;

        if let Err(err) = toml::from_str::<toml::Table>(&content) {
            let mut failure = CommandError::new(format!("{}: {}", args.path.display(), err.message()));
            if let Some(span) = err.span() {
                failure = failure.at(SourceSpan::from_offset(&args.path, &content, span.start));
            }
            return Err(failure);
        }

        debug!("{} parsed cleanly", args.path.display());
        writeln!(out, "ok")?;
        Ok(())
    }
}

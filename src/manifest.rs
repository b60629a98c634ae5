//! External commands declared by TOML manifests.
//!
//! ```toml
//! command = "fmt"
//! description = "Format sources"
//! program = "cargo"
//! args = ["fmt", "--all"]
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::command::{Command, Context};
use crate::error::{BootError, BootResult, CommandError, CommandResult, SourceSpan};
use crate::registry::Descriptor;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    command: String,
    #[serde(default)]
    description: String,
    program: String,
    #[serde(default)]
    args: Vec<String>,
}

#[derive(Debug)]
pub struct ExternalCommand {
    name: String,
    description: String,
    program: String,
    args: Vec<String>,
    source: PathBuf,
}

impl ExternalCommand {
    pub fn load(path: &Path) -> BootResult<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            BootError::discovery(format!("cannot read manifest {}: {err}", path.display()))
        })?;

        let manifest: Manifest = toml::from_str(&content).map_err(|err| {
            let message = format!(
                "invalid command manifest {}: {}",
                path.display(),
                err.message()
            );
            match err.span() {
                Some(span) => BootError::discovery_at(
                    message,
                    SourceSpan::from_offset(path, &content, span.start),
                ),
                None => BootError::discovery(message),
            }
        })?;

        if manifest.program.trim().is_empty() {
            return Err(BootError::discovery(format!(
                "command manifest {} declares an empty program",
                path.display()
            )));
        }

        Ok(Self {
            name: manifest.command,
            description: manifest.description,
            program: manifest.program,
            args: manifest.args,
            source: path.to_path_buf(),
        })
    }
}

impl Command for ExternalCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&self, ctx: &Context<'_>, out: &mut dyn Write) -> CommandResult {
        let args = self
            .args
            .iter()
            .chain(ctx.args)
            .cloned()
            .collect::<Vec<_>>();

        info!("==> Running {} {}", self.program, args.join(" "));
        debug!("    Manifest: {}", self.source.display());
        out.flush()?;

        let output = duct::cmd(self.program.as_str(), &args)
            .dir(ctx.base)
            .unchecked()
            .run()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => {
                    CommandError::new(format!("program `{}` not found", self.program))
                }
                _ => CommandError::new(format!("cannot run `{}`: {err}", self.program)),
            })?;

        if !output.status.success() {
            return Err(CommandError::new(format!(
                "`{}` failed with {}",
                self.program, output.status
            )));
        }
        Ok(())
    }
}

/// Loads every non-directory entry of `location` as a manifest, in file-name
/// order. A missing directory yields no commands.
pub fn discover(location: &Path) -> BootResult<Vec<Descriptor>> {
    let entries = match fs::read_dir(location) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("no command directory at {}", location.display());
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(BootError::discovery(format!(
                "cannot read command directory {}: {err}",
                location.display()
            )));
        }
    };

    let mut paths = entries
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()
        .map_err(|err| {
            BootError::discovery(format!(
                "cannot read command directory {}: {err}",
                location.display()
            ))
        })?;
    paths.sort();

    paths
        .into_iter()
        .filter(|path| !path.is_dir())
        .map(|path| Descriptor::new(Box::new(ExternalCommand::load(&path)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, file: &str, content: &str) {
        fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn one_descriptor_per_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "fmt.toml", "command = \"fmt\"\nprogram = \"cargo\"\nargs = [\"fmt\"]\n");
        write(dir.path(), "lint.toml", "command = \"lint\"\nprogram = \"cargo\"\n");
        fs::create_dir(dir.path().join("nested")).unwrap();
        write(&dir.path().join("nested"), "skipped.toml", "not = valid = toml");

        let found = discover(dir.path()).unwrap();
        let names = found.iter().map(Descriptor::name).collect::<Vec<_>>();
        assert_eq!(names, ["fmt", "lint"]);
    }

    #[test]
    fn declared_name_wins_over_file_name() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "whatever.toml", "command = \"deploy\"\nprogram = \"true\"\n");

        let found = discover(dir.path()).unwrap();
        assert_eq!(found[0].name(), "deploy");
        assert_eq!(found[0].command().description(), "");
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover(&dir.path().join("absent")).unwrap().is_empty());
    }

    #[test]
    fn unreadable_location_fails() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "plain", "");
        let err = discover(&dir.path().join("plain")).unwrap_err();
        assert_eq!(err.kind(), "DiscoveryError");
    }

    #[test]
    fn syntax_error_points_at_the_manifest() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "ok.toml", "command = \"ok\"\nprogram = \"true\"\n");
        write(dir.path(), "zz.toml", "command = \"bad\"\nprogram = = \"x\"\n");

        let err = discover(dir.path()).unwrap_err();
        assert_eq!(err.kind(), "DiscoveryError");
        let extra = err.extra().unwrap();
        assert_eq!(extra.file, dir.path().join("zz.toml"));
        assert_eq!(extra.line, 2);
    }

    #[test]
    fn missing_program_fails() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "x.toml", "command = \"x\"\n");
        assert!(discover(dir.path()).is_err());

        write(dir.path(), "x.toml", "command = \"x\"\nprogram = \" \"\n");
        assert!(discover(dir.path()).is_err());
    }

    #[test]
    fn invalid_declared_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "x.toml", "command = \"two words\"\nprogram = \"true\"\n");
        let err = discover(dir.path()).unwrap_err();
        assert!(err.to_string().contains("two words"));
    }
}

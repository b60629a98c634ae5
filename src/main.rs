use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Overrides the base directory, which otherwise is the executable's own.
const HOME_VAR: &str = "CMDHUB_HOME";

fn main() -> ExitCode {
    cmdhub::boot(env::var_os(HOME_VAR).map(PathBuf::from))
}

//! cmdhub - command dispatcher.
//!
//! Discovers built-in and manifest-declared commands, resolves the action
//! named on the command line (suggesting near-misses), runs it, and reports
//! any failure with the offending source line.

#[macro_use]
extern crate log;

pub mod boot;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod manifest;
pub mod phonetic;
pub mod registry;
pub mod report;
pub mod resolver;

pub use boot::{boot, run};
pub use command::{Command, Context};
pub use error::{BootError, BootResult, CommandError, CommandResult, SourceSpan};
pub use registry::{Descriptor, Registry};

//! Error types shared by the dispatcher and its commands.
//!
//! Every failure records where it was constructed and the call stack at that
//! point, so the reporter can print both when `verbose` is on. Failures that
//! point at a position in some file carry a [`SourceSpan`].

use std::backtrace::Backtrace;
use std::io;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// A position inside a source file, 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    pub file: PathBuf,
    pub line: usize,
    pub column: Option<usize>,
}

impl SourceSpan {
    pub fn new(file: impl Into<PathBuf>, line: usize, column: Option<usize>) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Converts a byte offset into `source` into a line/column position.
    pub fn from_offset(file: &Path, source: &str, offset: usize) -> Self {
        let before = source.get(..offset.min(source.len())).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let current = before.rfind('\n').map_or(before, |i| &before[i + 1..]);

        Self::new(file, line, Some(current.chars().count() + 1))
    }
}

/// Construction site and call stack of a failure.
#[derive(Debug)]
pub struct Trace {
    origin: &'static Location<'static>,
    backtrace: Backtrace,
}

impl Trace {
    #[track_caller]
    pub fn capture() -> Self {
        Self {
            origin: Location::caller(),
            backtrace: Backtrace::force_capture(),
        }
    }

    pub fn origin(&self) -> &'static Location<'static> {
        self.origin
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

/// Failure raised by a command while it executes.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct CommandError {
    message: String,
    extra: Option<SourceSpan>,
    trace: Trace,
}

impl CommandError {
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extra: None,
            trace: Trace::capture(),
        }
    }

    /// Points the failure at a position in a file.
    pub fn at(mut self, span: SourceSpan) -> Self {
        self.extra = Some(span);
        self
    }

    pub fn extra(&self) -> Option<&SourceSpan> {
        self.extra.as_ref()
    }
}

impl From<io::Error> for CommandError {
    #[track_caller]
    fn from(err: io::Error) -> Self {
        Self::new(format!("io: {err}"))
    }
}

pub type CommandResult = Result<(), CommandError>;

#[derive(thiserror::Error, Debug)]
pub enum BootError {
    #[error("{message}")]
    Discovery {
        message: String,
        extra: Option<SourceSpan>,
        trace: Trace,
    },
    #[error("Unrecognized action \"{action}\"")]
    UnrecognizedAction {
        action: String,
        suggestions: Vec<String>,
        trace: Trace,
    },
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("{message}")]
    Config { message: String, trace: Trace },
}

impl BootError {
    #[track_caller]
    pub fn discovery(message: impl Into<String>) -> Self {
        BootError::Discovery {
            message: message.into(),
            extra: None,
            trace: Trace::capture(),
        }
    }

    #[track_caller]
    pub fn discovery_at(message: impl Into<String>, span: SourceSpan) -> Self {
        BootError::Discovery {
            message: message.into(),
            extra: Some(span),
            trace: Trace::capture(),
        }
    }

    #[track_caller]
    pub fn unrecognized(action: impl Into<String>, suggestions: Vec<String>) -> Self {
        BootError::UnrecognizedAction {
            action: action.into(),
            suggestions,
            trace: Trace::capture(),
        }
    }

    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        BootError::Config {
            message: message.into(),
            trace: Trace::capture(),
        }
    }

    /// Category tag printed in front of the message.
    pub fn kind(&self) -> &'static str {
        match self {
            BootError::Discovery { .. } => "DiscoveryError",
            BootError::UnrecognizedAction { .. } => "UnrecognizedActionError",
            BootError::Command(_) => "CommandExecutionError",
            BootError::Config { .. } => "ConfigurationError",
        }
    }

    pub fn extra(&self) -> Option<&SourceSpan> {
        match self {
            BootError::Discovery { extra, .. } => extra.as_ref(),
            BootError::Command(err) => err.extra(),
            _ => None,
        }
    }

    pub fn suggestions(&self) -> &[String] {
        match self {
            BootError::UnrecognizedAction { suggestions, .. } => suggestions,
            _ => &[],
        }
    }

    pub fn trace(&self) -> &Trace {
        match self {
            BootError::Discovery { trace, .. }
            | BootError::UnrecognizedAction { trace, .. }
            | BootError::Config { trace, .. } => trace,
            BootError::Command(err) => &err.trace,
        }
    }
}

impl From<figment::Error> for BootError {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        BootError::config(format!("invalid configuration: {err}"))
    }
}

pub type BootResult<T> = Result<T, BootError>;

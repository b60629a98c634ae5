//! Rendering of failures that reach the top of the dispatcher.
//!
//! Layout:
//!
//! ```text
//! <Kind>: <message>
//! Did you mean "<name>"?        (one per suggestion)
//!
//! <TAB><offending source line>  (when the failure points into a file)
//! <TAB>-----^
//!
//! at src/registry.rs(42)       (verbose only)
//! <call stack>                  (verbose only)
//! ```

use std::fs;
use std::io::{self, Write};
use std::process;

use crate::config::Config;
use crate::error::{BootError, SourceSpan};

/// Prefix stripped from paths in verbose output.
const APP_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/");

/// Prints `err` to stdout and exits with status 1.
pub fn report(err: &BootError, config: Option<&Config>) -> ! {
    let mut stdout = io::stdout();
    // Nothing left to tell the user if stdout itself is gone
    let _ = render(err, config, &mut stdout);
    let _ = stdout.flush();
    process::exit(1)
}

pub fn render(err: &BootError, config: Option<&Config>, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}: {}", err.kind(), err)?;
    for suggestion in err.suggestions() {
        writeln!(out, "Did you mean \"{suggestion}\"?")?;
    }

    if let Some(span) = err.extra() {
        render_snippet(span, out)?;
    }
    writeln!(out)?;

    if config.is_some_and(|c| c.verbose) {
        let trace = err.trace();
        writeln!(
            out,
            "at {}({})",
            relativize(trace.origin().file()),
            trace.origin().line()
        )?;
        writeln!(out, "{}", relativize(&trace.backtrace().to_string()))?;
    }
    Ok(())
}

/// Best effort: an unreadable file or out-of-range line prints nothing.
/// Bytes that are not UTF-8 are shown lossily rather than dropping the line.
fn render_snippet(span: &SourceSpan, out: &mut dyn Write) -> io::Result<()> {
    let Ok(content) = fs::read(&span.file) else {
        return Ok(());
    };
    let mut lines = content.split(|&b| b == b'\n').collect::<Vec<_>>();
    // A trailing newline leaves an empty piece that is not a real line
    if content.ends_with(b"\n") {
        lines.pop();
    }
    let Some(&raw) = span.line.checked_sub(1).and_then(|index| lines.get(index)) else {
        return Ok(());
    };

    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = String::from_utf8_lossy(raw).replace('\t', " ");
    writeln!(out)?;
    writeln!(out, "\t{line}")?;
    if let Some(column) = span.column.filter(|&c| c > 1) {
        // The caret never runs past the end of the line
        let filler = (column - 1).min(line.chars().count());
        writeln!(out, "\t{}^", "-".repeat(filler))?;
    }
    Ok(())
}

fn relativize(text: &str) -> String {
    text.replace(APP_ROOT, "")
}

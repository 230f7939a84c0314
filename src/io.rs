//! Stream plumbing for the mutator contract.
//!
//! Input comes from stdin unless `--input` names a file. The result goes to
//! stdout (or `--output`) in compact form, and a pretty copy always goes to
//! stderr for inspection.

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

pub fn read_config(input: Option<&Path>) -> anyhow::Result<Value> {
    let text = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read input file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read configuration from stdin")?;
            buf
        }
    };
    parse_config(&text)
}

pub fn parse_config(text: &str) -> anyhow::Result<Value> {
    serde_json::from_str(text).context("parse configuration as JSON")
}

pub fn write_config(config: &Value, output: Option<&Path>) -> anyhow::Result<()> {
    let pretty = serde_json::to_string_pretty(config)?;
    let compact = serde_json::to_string(config)?;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{}", pretty).context("write debug copy to stderr")?;

    match output {
        Some(path) => fs::write(path, format!("{}\n", compact))
            .with_context(|| format!("write output file {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", compact).context("write configuration to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// One line of the diagnostics file read back by the host.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: &'static str,
    pub summary: String,
}

/// Newline-delimited diagnostics; an empty file means success.
pub fn render_diagnostics(error: Option<&anyhow::Error>) -> anyhow::Result<String> {
    let mut out = String::new();
    if let Some(err) = error {
        let diag = Diagnostic {
            severity: "error",
            summary: format!("{:#}", err),
        };
        out.push_str(&serde_json::to_string(&diag)?);
        out.push('\n');
    }
    Ok(out)
}

pub fn write_diagnostics(path: &Path, error: Option<&anyhow::Error>) -> anyhow::Result<()> {
    let text = render_diagnostics(error)?;
    fs::write(path, text).with_context(|| format!("write diagnostics file {}", path.display()))
}

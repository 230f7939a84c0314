//! Command-line surface.
//!
//! The host may pass flags this mutator does not know about, so argv is
//! filtered down to the recognised flags before clap sees it.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "resource-mutator")]
#[command(args_override_self = true)]
#[command(about = "Inject fixed job resources into a bundle configuration", long_about = None)]
pub struct Cli {
    /// Pipeline phase; only "pre-initialize" is special-cased.
    #[arg(long)]
    pub phase: Option<String>,

    /// Read the configuration from a file instead of stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Write the compact result to a file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write newline-delimited diagnostics to this file.
    #[arg(long)]
    pub diagnostics: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

const VALUE_FLAGS: &[&str] = &["--phase", "--input", "--output", "--diagnostics"];

impl Cli {
    pub fn parse_known<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::try_parse_from(known_args(args))
    }
}

/// Keep argv[0] plus recognised flags; drop everything else.
pub fn known_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = iter.next().into_iter().collect();

    while let Some(arg) = iter.next() {
        let Some(s) = arg.to_str() else {
            continue;
        };

        if VALUE_FLAGS.contains(&s) {
            // `--flag value`; a trailing flag without a value is dropped.
            if let Some(value) = iter.next() {
                out.push(arg);
                out.push(value);
            }
        } else if s
            .split_once('=')
            .is_some_and(|(flag, _)| VALUE_FLAGS.contains(&flag))
        {
            out.push(arg);
        } else if s == "--verbose" || is_short_verbose(s) {
            out.push(arg);
        }
    }

    out
}

fn is_short_verbose(s: &str) -> bool {
    s.len() > 1 && s.starts_with('-') && s[1..].chars().all(|c| c == 'v')
}

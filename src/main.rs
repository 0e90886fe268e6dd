//! CLI tool that tokenizes Lua-like source files and prints the tokens.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use lua_tokenizer::{Recovery, Scan, ScanOptions, tokenize_with};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Tokenize Lua-like source and print one token per line.
#[derive(Parser, Debug)]
#[command(name = "luatok", version, about, long_about = None)]
struct Cli {
    /// Source files; `-` or none reads stdin.
    files: Vec<PathBuf>,

    /// What to discard after a malformed lexeme.
    #[arg(long, value_enum, default_value_t = RecoveryArg::Line)]
    recovery: RecoveryArg,

    /// Print only token and diagnostic counts.
    #[arg(long)]
    count: bool,

    /// Trace every token to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RecoveryArg {
    /// Skip the rest of the line.
    Line,
    /// Skip only the malformed lexeme.
    Lexeme,
}

impl From<RecoveryArg> for Recovery {
    fn from(arg: RecoveryArg) -> Self {
        match arg {
            RecoveryArg::Line => Self::SkipLine,
            RecoveryArg::Lexeme => Self::SkipLexeme,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn report(out: &mut impl Write, path: &Path, scan: &Scan, count: bool) -> io::Result<()> {
    if count {
        writeln!(
            out,
            "{}: {} token(s), {} diagnostic(s)",
            path.display(),
            scan.tokens.len(),
            scan.diagnostics.len()
        )
    } else {
        scan.tokens
            .iter()
            .try_for_each(|token| writeln!(out, "{token}"))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ScanOptions::default().with_recovery(cli.recovery.into());
    let files = if cli.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.files
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut had_error = false;

    for path in &files {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(e) => {
                tracing::error!("{e:#}");
                had_error = true;
                continue;
            }
        };

        let scan = tokenize_with(&source, options);
        if !scan.is_clean() {
            had_error = true;
        }

        if let Err(e) = report(&mut out, path, &scan, cli.count) {
            tracing::error!("failed to write output: {e}");
            return ExitCode::FAILURE;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

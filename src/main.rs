//! CLI entry point for fcpx-chapters.

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fcpx_chapters::extract_chapters;

/// Extract chapter markers from an FCPXML project file and print them as
/// sorted "HH:MM:SS Name" lines.
#[derive(Debug, Parser)]
#[command(name = "fcpx-chapters", version, about)]
struct Cli {
    /// Path to the FCPXML project file
    #[arg(short, long, value_name = "PATH")]
    file: PathBuf,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays clean for chapter lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let lines = extract_chapters(&cli.file)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    Ok(())
}

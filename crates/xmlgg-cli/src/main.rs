use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use xmlgg::ClassName;

#[derive(Debug, Parser)]
#[command(
    name = "xmlgg",
    version,
    about = "Generate builder source code that rebuilds an XML document"
)]
struct Args {
    /// XML file to translate
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Name of the generated class; the output file is <CLASS_NAME>.java
    #[arg(value_name = "CLASS_NAME")]
    class_name: String,
    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("xmlgg: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    debug!(input = %args.input.display(), "reading input");
    let xml = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input file {}", args.input.display()))?;

    let src = xmlgg::generate(&xml, &args.class_name)
        .with_context(|| format!("failed to translate {}", args.input.display()))?;

    let output = PathBuf::from(ClassName::new(&args.class_name)?.file_name());
    let written = write_output(&output, &src)?;
    info!(bytes = src.len(), "generated source");

    println!("Wrote file {}", written.display());
    Ok(())
}

/// Write `data` and return the absolute path of the file
fn write_output(path: &Path, data: &str) -> Result<PathBuf> {
    std::fs::write(path, data)
        .with_context(|| format!("failed to write output file {}", path.display()))?;
    std::path::absolute(path)
        .with_context(|| format!("failed to resolve output path {}", path.display()))
}

//! Parse a saved knowledge carousel page and print the extracted results as JSON.
//!
//! Usage: `kc_parse <html_file> [--dir DIR] [--no-write] [--compact] [--verbose]`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rs_kc_carousel::{extract_file, Options, DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kc_parse")]
#[command(about = "Extract knowledge carousel entries from a saved search result page")]
struct Args {
    /// HTML snapshot to parse
    html_file: PathBuf,

    /// Directory relative snapshot paths are resolved against
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Origin prepended to root-relative links
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Do not write the <name>-actual.json file next to the input
    #[arg(long)]
    no_write: bool,

    /// Print single-line JSON instead of pretty JSON
    #[arg(long)]
    compact: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = Options {
        base_url: args.base_url.clone(),
        files_dir: args.dir.clone(),
        write_output: !args.no_write,
        ..Options::default()
    };

    let output = extract_file(&args.html_file, &options).and_then(|result| {
        if args.compact {
            Ok(serde_json::to_string(&result.results)?)
        } else {
            result.to_json_pretty()
        }
    });

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error parsing file {}: {err}", args.html_file.display());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

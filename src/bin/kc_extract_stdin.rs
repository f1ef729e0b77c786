//! Simple CLI that reads HTML from stdin and outputs the carousel results as
//! JSON to stdout. Nothing is written to disk.

use std::io::{self, Read};

use anyhow::Context;
use rs_kc_carousel::extract_bytes;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut html = Vec::new();
    io::stdin()
        .read_to_end(&mut html)
        .context("failed to read from stdin")?;

    let result = extract_bytes(&html).context("carousel extraction failed")?;
    println!("{}", serde_json::to_string(&result.results)?);

    Ok(())
}

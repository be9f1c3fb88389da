// SPDX-License-Identifier: Apache-2.0 OR MIT

//! xtce2c-gen - generate packed C container-definition headers from a
//! YAML mission database.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use xtce2c::{generate_headers, transcode_scope, DirSink};
use xtce2c_gen::loader::load_model;

/// Generate packed C container-definition headers
#[derive(Parser, Debug)]
#[command(name = "xtce2c-gen")]
#[command(version = "0.1.0")]
#[command(about = "Compile a telemetry mission database into packed C headers")]
struct Args {
    /// Mission database description (YAML)
    model: PathBuf,

    /// Directory the headers are written to
    #[arg(short, long, default_value = "output")]
    out_dir: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    if let Err(e) = run() {
        eprintln!("[ERROR] {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    tracing::info!("Loading mission database from {:?}", args.model);
    let mut root = load_model(&args.model)?;

    tracing::info!("Resolving packed-order containers");
    transcode_scope(&mut root).context("Packing-order transcoding failed")?;

    let mut sink = DirSink::new(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;
    generate_headers(&mut root, &mut sink).context("Header generation failed")?;

    tracing::info!(
        "Generated {} header(s) in {}",
        root.subsystems.len(),
        args.out_dir.display()
    );
    Ok(())
}

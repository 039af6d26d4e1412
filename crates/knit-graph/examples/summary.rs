//! Example: load a stitch file and print what was found.
//!
//! Reads the whole file up front (links may refer forward), parses it
//! tolerantly, builds the knit graph, and prints the count summary plus a
//! per-yarn and per-type breakdown. Skipped lines go to stderr.
//!
//! Run from the workspace root:
//!   cargo run -p knit-graph --example summary -- path/to/file.st

use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use knit_graph::{build_graph, parse_stitch_file, NodeAttributes};

#[derive(Parser, Debug)]
#[command(about = "Summarize a knitted-stitch graph file")]
struct Args {
    /// Path to the .st file
    stfile: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.stfile)
        .with_context(|| format!("reading {}", args.stfile))?;

    let parsed = parse_stitch_file(&text).context("stitch file has invalid links")?;
    for skip in &parsed.skipped {
        eprintln!("Skipping malformed line: {}", skip.raw);
    }

    let graph = build_graph(&parsed.records);
    println!("{}", graph.summary());
    println!(
        "  wale edges: {}, course edges: {}",
        graph.wale_edges.len(),
        graph.course_edges.len()
    );

    let attrs = NodeAttributes::project(&graph);
    let mut per_yarn: BTreeMap<i32, usize> = BTreeMap::new();
    for &y in &attrs.yarn_id {
        *per_yarn.entry(y).or_default() += 1;
    }
    for (yarn, count) in &per_yarn {
        println!("  yarn {yarn}: {count} stitches");
    }
    for mask in &attrs.masks {
        let count = mask.values.iter().filter(|&&v| v == 1.0).count();
        println!("  {}: {count} stitches", mask.name);
    }

    Ok(())
}

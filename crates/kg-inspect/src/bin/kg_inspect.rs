use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use knit_graph::{
    build_graph, parse_stitch_file, ArrowConfig, NodeAttributes, StitchGraph, ViewerPayload,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "kg_inspect")]
#[command(about = "Inspect a knitted-stitch graph file and optionally dump the viewer payload")]
struct Cli {
    /// Path to the .st file
    stfile: PathBuf,

    /// Write the full viewer payload (nodes, edges, attributes, arrows)
    /// as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Visual length of edge direction arrows
    #[arg(long, default_value_t = 0.01)]
    arrow_length: f32,

    /// Also list every edge on stdout
    #[arg(long, default_value_t = false)]
    edges: bool,
}

#[derive(Debug, Clone, Serialize)]
struct NodeDto {
    id: usize,
    yarn_id: i32,
    stitch_type: String,
    p: [f32; 3],
}

#[derive(Debug, Clone, Serialize)]
struct ArrowDto {
    mid: [f32; 3],
    dir: [f32; 3],
}

#[derive(Debug, Clone, Serialize)]
struct MaskDto {
    name: String,
    values: Vec<f32>,
}

#[derive(Debug, Clone, Serialize)]
struct PayloadDto {
    num_nodes: usize,
    num_edges: usize,
    nodes: Vec<NodeDto>,
    edges: Vec<[usize; 2]>,
    yarn_id: Vec<i32>,
    stitch_types: Vec<String>,
    type_index: Vec<usize>,
    masks: Vec<MaskDto>,
    arrows: Vec<ArrowDto>,
}

fn payload_dto(graph: &StitchGraph, payload: &ViewerPayload) -> PayloadDto {
    let NodeAttributes {
        yarn_id,
        vocabulary,
        type_index,
        masks,
    } = payload.attributes.clone();

    PayloadDto {
        num_nodes: payload.num_nodes,
        num_edges: payload.num_edges,
        nodes: graph
            .nodes
            .iter()
            .map(|n| NodeDto {
                id: n.id,
                yarn_id: n.yarn_id,
                stitch_type: n.stitch_type.clone(),
                p: [n.p.x, n.p.y, n.p.z],
            })
            .collect(),
        edges: payload.edges.clone(),
        yarn_id,
        stitch_types: vocabulary,
        type_index,
        masks: masks
            .into_iter()
            .map(|m| MaskDto {
                name: m.name,
                values: m.values,
            })
            .collect(),
        arrows: payload
            .arrow_mids
            .iter()
            .zip(&payload.arrow_dirs)
            .map(|(mid, dir)| ArrowDto {
                mid: [mid.x, mid.y, mid.z],
                dir: [dir.x, dir.y, dir.z],
            })
            .collect(),
    }
}

fn ensure_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("stitch file does not exist: {}", path.display());
    }
    if !path.is_file() {
        bail!("stitch path is not a file: {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ensure_input_file(&cli.stfile)?;

    // Whole file up front: links may refer forward.
    let text = fs::read_to_string(&cli.stfile)
        .with_context(|| format!("reading {}", cli.stfile.display()))?;

    let parsed = parse_stitch_file(&text).with_context(|| {
        format!("{} has links outside the node sequence", cli.stfile.display())
    })?;
    for skip in &parsed.skipped {
        eprintln!(
            "Skipping malformed line {} ({}): {}",
            skip.line_no, skip.reason, skip.raw
        );
    }

    let graph = build_graph(&parsed.records);
    println!("{}", graph.summary());

    if cli.edges {
        for e in &graph.edges {
            let kind = match (
                graph.wale_edges.binary_search(e).is_ok(),
                graph.course_edges.binary_search(e).is_ok(),
            ) {
                (true, true) => "wale+course",
                (true, false) => "wale",
                _ => "course",
            };
            println!("  {} -- {}  [{kind}]", e.a, e.b);
        }
    }

    if let Some(out) = &cli.json {
        let cfg = ArrowConfig {
            length: cli.arrow_length,
            ..ArrowConfig::default()
        };
        let payload = ViewerPayload::assemble(&graph, &cfg);
        let dto = payload_dto(&graph, &payload);
        let json = serde_json::to_string_pretty(&dto).context("serializing payload")?;
        fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote viewer payload to {}", out.display());
    }

    Ok(())
}

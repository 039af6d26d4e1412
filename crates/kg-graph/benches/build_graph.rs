use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kg_core::{Point3f, StitchRecord};
use kg_graph::build_graph;

/// Rows-by-columns sheet of stockinette: each stitch pulls through the one
/// below it (wale links) and yarns alternate per row (course links).
fn synthetic_sheet(rows: usize, cols: usize) -> Vec<StitchRecord> {
    let mut out = Vec::with_capacity(rows * cols);

    for r in 0..rows {
        for c in 0..cols {
            let i = r * cols + c;
            let below = if r > 0 { Some(i - cols) } else { None };
            let above = if r + 1 < rows { Some(i + cols) } else { None };

            out.push(StitchRecord {
                yarn_id: (r % 4) as i32,
                stitch_type: if (r + c) % 2 == 0 { "knit" } else { "purl" }.to_string(),
                direction: "a".to_string(),
                in_links: [below, None],
                out_links: [above, None],
                position: Point3f {
                    x: c as f32,
                    y: r as f32,
                    z: 0.0,
                },
            });
        }
    }

    out
}

fn bench_build_graph(c: &mut Criterion) {
    let records = synthetic_sheet(200, 250);

    c.bench_function("build_graph_50k", |b| {
        b.iter(|| build_graph(black_box(&records)))
    });
}

criterion_group!(benches, bench_build_graph);
criterion_main!(benches);

use std::fmt::Write;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use wktcanvas::{load_scene, DecodePolicy, SceneConfig};

// Grid of square polygons with a diagonal line string through each row, and
// some prose between geometries so the scanner has noise to skip.
fn build_document(cells: usize) -> String {
    let w = (cells as f64).sqrt().ceil() as usize;
    let mut doc = String::new();
    for k in 0..cells {
        let x = (k % w) as f64 * 8.0;
        let y = (k / w) as f64 * 6.0;
        let _ = writeln!(
            doc,
            "cell {k}: POLYGON (({x} {y}, {x1} {y}, {x1} {y1}, {x} {y1}, {x} {y}))",
            x1 = x + 7.0,
            y1 = y + 5.0
        );
        if k % w == 0 {
            let _ = writeln!(doc, "row LINESTRING ({x} {y}, {} {})", x + 8.0 * w as f64, y + 6.0);
        }
    }
    doc
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut cells = 5000usize;
    let mut runs = 50usize;
    let mut canvas = 600u32;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--cells=") { if let Ok(v) = val.parse() { cells = v; } }
        else if let Some(val) = a.strip_prefix("--runs=") { if let Ok(v) = val.parse() { runs = v; } }
        else if let Some(val) = a.strip_prefix("--canvas=") { if let Ok(v) = val.parse() { canvas = v; } }
        else if let Some(val) = a.strip_prefix("--assert-ms=") { if let Ok(v) = val.parse() { assert_ms = Some(v); } }
    }

    let cfg = match SceneConfig::new(canvas) {
        Ok(c) => c.with_policy(DecodePolicy::SkipMalformed),
        Err(e) => { eprintln!("{e}"); std::process::exit(2); }
    };
    let doc = build_document(cells);
    tracing::info!(cells, bytes = doc.len(), "document built");

    let mut times_ms: Vec<f64> = Vec::with_capacity(runs);
    let mut points = 0usize;
    for _ in 0..runs {
        let t0 = Instant::now();
        match load_scene(&doc, &cfg) {
            Ok(scene) => points = scene.point_count(),
            Err(e) => { eprintln!("load failed: {e}"); std::process::exit(1); }
        }
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    times_ms.sort_by(|a, b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    println!("cells={} runs={} points={} median_ms={:.4} p90_ms={:.4}", cells, runs, points, med, p90);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use sfcurve::{bounding_box, expand, library};

/// Times repeated expansion of a library template.
#[derive(Parser)]
#[command(name = "expand_bench")]
struct Args {
    #[arg(long, default_value = "koch")]
    template: String,

    #[arg(long, default_value_t = 6)]
    iterations: i32,

    #[arg(long, default_value_t = 20)]
    runs: usize,

    /// Exit non-zero when the median run exceeds this many milliseconds
    #[arg(long)]
    assert_ms: Option<f64>,
}

struct Summary {
    min: f64,
    median: f64,
    max: f64,
}

fn summarize(mut samples: Vec<f64>) -> Summary {
    samples.sort_by(f64::total_cmp);
    let n = samples.len();
    let median = match n {
        0 => 0.0,
        _ if n % 2 == 1 => samples[n / 2],
        _ => 0.5 * (samples[n / 2 - 1] + samples[n / 2]),
    };
    Summary {
        min: samples.first().copied().unwrap_or(0.0),
        median,
        max: samples.last().copied().unwrap_or(0.0),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let template = library::by_name(&args.template)?;

    let mut samples = Vec::with_capacity(args.runs.max(1));
    let mut segments = 0usize;
    let mut extent = 0.0f64;
    for _ in 0..args.runs.max(1) {
        let started = Instant::now();
        let lines = expand(template.lines(), &template, args.iterations)?;
        let bb = bounding_box(&lines);
        samples.push(started.elapsed().as_secs_f64() * 1e3);
        segments = lines.len();
        extent = bb.width.max(bb.height);
    }
    let s = summarize(samples);
    println!(
        "template={} iterations={} segments={} extent={:.4} runs={} min_ms={:.4} median_ms={:.4} max_ms={:.4}",
        args.template,
        args.iterations,
        segments,
        extent,
        args.runs.max(1),
        s.min,
        s.median,
        s.max
    );
    if let Some(limit) = args.assert_ms {
        if s.median > limit {
            eprintln!("median {:.4} ms over threshold {:.3} ms", s.median, limit);
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}

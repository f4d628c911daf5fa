use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use sfcurve::geometry::limits;
use sfcurve::{expand_with_limit, json, library, render_svg, Color, RenderConfig, RenderStyle};

#[derive(Parser)]
#[command(name = "sfc_render")]
#[command(about = "Render a self-similar curve to SVG", long_about = None)]
#[command(version)]
struct Cli {
    /// Named template from the built-in library
    #[arg(short, long, default_value = "koch", conflicts_with = "template_file")]
    template: String,

    /// JSON template document to use instead of a named template
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    template_file: Option<PathBuf>,

    /// Number of substitution rounds
    #[arg(short = 'n', long, default_value_t = 3, allow_negative_numbers = true)]
    iterations: i32,

    /// Drawing style
    #[arg(short, long, default_value = "path")]
    style: Style,

    /// Stroke color as #rrggbb or #rrggbbaa
    #[arg(long)]
    stroke: Option<String>,

    /// Length in pixels of the longer side of the drawing
    #[arg(long, default_value_t = 600.0)]
    size: f64,

    /// Refuse to expand past this many segments
    #[arg(long, default_value_t = limits::DEFAULT_MAX_SEGMENTS)]
    max_segments: usize,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// List library templates and exit
    #[arg(long)]
    list: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Style {
    Path,
    Glyph,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    if cli.list {
        for name in library::names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let template = match &cli.template_file {
        Some(path) => {
            let doc = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let (name, t) = json::template_from_json_str(&doc)
                .with_context(|| format!("parsing {}", path.display()))?;
            log::info!("loaded template {}", name.as_deref().unwrap_or("<unnamed>"));
            t
        }
        None => library::by_name(&cli.template)?,
    };

    let lines = expand_with_limit(template.lines(), &template, cli.iterations, cli.max_segments)
        .context("expanding curve")?;
    log::info!("{} segments after {} iterations", lines.len(), cli.iterations);

    let mut cfg = RenderConfig {
        size: cli.size,
        style: match cli.style {
            Style::Path => RenderStyle::Path,
            Style::Glyph => RenderStyle::Glyph,
        },
        ..RenderConfig::default()
    };
    if let Some(s) = &cli.stroke {
        cfg.stroke = Color::from_hex(s).with_context(|| format!("invalid stroke color {s}"))?;
    }
    let svg = render_svg(&lines, &cfg);

    match &cli.output {
        Some(path) => std::fs::write(path, svg)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(svg.as_bytes())
            .context("writing to stdout")?,
    }
    Ok(())
}

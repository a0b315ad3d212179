//! Console annotator.
//!
//! Replays a recorded inspection marking against an image: loads the input
//! image, fetches the named tool's marking from a replay workspace, draws
//! every detected region's outer boundary onto the image, reports scores on
//! stdout, and writes the annotated copy once all regions are drawn.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use inspect_common::{Color, Marking, OverlayStyle};
use inspection::{Engine, ReplayWorkspace, Sample};
use overlay::{draw_outer, load_canvas, save_canvas};

#[derive(Parser, Debug)]
#[command(name = "annotator")]
#[command(about = "Draws inspection region overlays onto an image")]
struct Args {
    /// Replay workspace file (JSON markings keyed by stream and tool)
    #[arg(short, long, env = "REPLAY_WORKSPACE")]
    workspace: PathBuf,

    /// Stream to read tools from
    #[arg(long, default_value = "default")]
    stream: String,

    /// Tool whose marking is drawn
    #[arg(long, default_value = "Analyze")]
    tool: String,

    /// Input image path
    #[arg(short, long)]
    input: PathBuf,

    /// Output image path (format inferred from extension)
    #[arg(short, long)]
    output: PathBuf,

    /// Overlay color as #RRGGBB
    #[arg(long, default_value = "#FF0000")]
    color: Color,

    /// Boundary stroke width in pixels
    #[arg(long, default_value = "2.0")]
    line_width: f32,

    /// Vertex marker radius in pixels
    #[arg(long, default_value = "3.0")]
    point_radius: f32,

    /// Draw the boundary as an open polyline instead of a closed polygon
    #[arg(long)]
    open_path: bool,

    /// Disable anti-aliased rasterization
    #[arg(long)]
    no_antialias: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let style = OverlayStyle {
        line_width: args.line_width,
        point_radius: args.point_radius,
        close_path: !args.open_path,
        antialias: !args.no_antialias,
    };
    style.validate()?;

    let workspace = ReplayWorkspace::open(&args.workspace)
        .with_context(|| format!("opening workspace {}", args.workspace.display()))?;
    let stream = workspace.stream(&args.stream)?;
    let sample = Sample::new(&args.input);

    let started = Instant::now();
    let marking = stream.process(&sample, &args.tool)?;
    let measured = started.elapsed();

    match &marking {
        Marking::Red(red) => {
            let mut canvas = load_canvas(&args.input)
                .with_context(|| format!("loading {}", args.input.display()))?;

            let mut regions = 0usize;
            for view in &red.views {
                println!("This view has a score of {}", view.score);

                for region in &view.regions {
                    draw_outer(&mut canvas, region, args.color, &style)?;
                    println!("This region has a score of {}", region.score);
                    regions += 1;
                }
            }

            // Save once, after all regions for this image are drawn
            save_canvas(&canvas, &args.output)
                .with_context(|| format!("writing {}", args.output.display()))?;

            info!(
                regions,
                output = %args.output.display(),
                "annotated image written"
            );
        }
        Marking::Green(green) => {
            for view in &green.views {
                println!(
                    "This view is tagged '{}' with a score of {}",
                    view.best_tag, view.score
                );
            }
            info!("green marking carries no drawable regions; no image written");
        }
    }

    info!(
        tool = %args.tool,
        engine_ms = marking.duration_ms(),
        measured_ms = measured.as_secs_f64() * 1000.0,
        "tool processed"
    );

    Ok(())
}

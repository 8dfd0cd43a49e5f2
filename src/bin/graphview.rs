use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use graphview::{
    Canvas, CpuSurface, DrawSurface, GraphSnapshot, GraphViewOpts, NodeId, Placement, Rgba8,
};

#[derive(Parser, Debug)]
#[command(name = "graphview", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the node-link diagram as a PNG.
    Graph(GraphArgs),
    /// Render the timeline as a PNG.
    Timeline(TimelineArgs),
    /// Print the property control form of one node as JSON.
    Inspect(InspectArgs),
    /// Print the draw command log of a view as JSON.
    Commands(CommandsArgs),
}

#[derive(Args, Debug)]
struct SurfaceArgs {
    /// Surface width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 400)]
    height: u32,
}

#[derive(Parser, Debug)]
struct GraphArgs {
    /// Input snapshot JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    surface: SurfaceArgs,

    /// Seed for processing-node placement (falls back to GRAPHVIEW_LAYOUT_SEED).
    #[arg(long)]
    seed: Option<u64>,

    /// Background color, `#RRGGBB[AA]`.
    #[arg(long, default_value = "#FFFFFF")]
    background: String,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Input snapshot JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Playhead position in seconds.
    #[arg(long)]
    time: Option<f64>,

    #[command(flatten)]
    surface: SurfaceArgs,

    /// Background color, `#RRGGBB[AA]`.
    #[arg(long, default_value = "#FFFFFF")]
    background: String,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input snapshot JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Node id.
    #[arg(long)]
    node: u64,
}

#[derive(Parser, Debug)]
struct CommandsArgs {
    /// Input snapshot JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long, value_enum)]
    view: ViewChoice,

    #[command(flatten)]
    surface: SurfaceArgs,

    /// Seed for processing-node placement (graph view).
    #[arg(long)]
    seed: Option<u64>,

    /// Playhead position in seconds (timeline view).
    #[arg(long)]
    time: Option<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ViewChoice {
    Graph,
    Timeline,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Graph(args) => cmd_graph(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Inspect(args) => cmd_inspect(args),
        Command::Commands(args) => cmd_commands(args),
    }
}

fn read_snapshot_json(path: &Path) -> anyhow::Result<GraphSnapshot> {
    let f = File::open(path).with_context(|| format!("open snapshot '{}'", path.display()))?;
    let snapshot: GraphSnapshot =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse snapshot JSON")?;
    snapshot.validate()?;
    Ok(snapshot)
}

fn placement(seed: Option<u64>) -> Placement {
    seed.map_or_else(Placement::from_env, Placement::Seeded)
}

fn canvas(args: &SurfaceArgs) -> Canvas {
    Canvas::new(args.width, args.height)
}

fn make_surface(surface: &SurfaceArgs, background: &str) -> anyhow::Result<CpuSurface> {
    let bg = Rgba8::from_hex(background)?;
    let settings = graphview::RenderSettings {
        clear_rgba: Some([bg.r, bg.g, bg.b, bg.a]),
    };
    Ok(CpuSurface::new(canvas(surface), &settings)?)
}

fn cmd_graph(args: GraphArgs) -> anyhow::Result<()> {
    let snapshot = read_snapshot_json(&args.in_path)?;
    let mut surface = make_surface(&args.surface, &args.background)?;
    let opts = GraphViewOpts {
        placement: placement(args.seed),
        ..GraphViewOpts::default()
    };
    graphview::render_graph_view(&snapshot, &mut surface, &opts)?;
    write_png(surface, &args.out)
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let snapshot = read_snapshot_json(&args.in_path)?;
    let mut surface = make_surface(&args.surface, &args.background)?;
    graphview::render_timeline_view(&snapshot, &mut surface, args.time)?;
    write_png(surface, &args.out)
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let snapshot = read_snapshot_json(&args.in_path)?;
    let id = NodeId(args.node);
    let properties = snapshot
        .properties(id)
        .with_context(|| format!("node {id} not found in '{}'", args.in_path.display()))?;
    let title = format!("node {id}");
    let form = graphview::build_control_form(properties, Some(&title));
    println!("{}", serde_json::to_string_pretty(&form)?);
    Ok(())
}

fn cmd_commands(args: CommandsArgs) -> anyhow::Result<()> {
    let snapshot = read_snapshot_json(&args.in_path)?;
    let canvas = canvas(&args.surface);
    let list = match args.view {
        ViewChoice::Graph => {
            let opts = GraphViewOpts {
                placement: placement(args.seed),
                ..GraphViewOpts::default()
            };
            graphview::compile_graph_view(canvas, &snapshot, &opts)?
        }
        ViewChoice::Timeline => graphview::compile_timeline_view(canvas, &snapshot, args.time)?,
    };
    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}

fn write_png(surface: CpuSurface, out: &Path) -> anyhow::Result<()> {
    let canvas = surface.canvas();
    let frame = surface.into_frame()?;

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &frame.into_straight(),
        canvas.width,
        canvas.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

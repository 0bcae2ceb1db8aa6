use anyhow::{Context, Result};
use calepin_bim::{Assembly, WallParams};
use calepin_catalog::{COURSE_HEIGHT, variants};
use calepin_layout::{DEFAULT_RESOLUTION_CM, compute_layout, to_raster_matrix};
use calepin_report::{render_text, write_json, write_raster};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "calepin")]
#[command(about = "Compressed earth block wall layout (calepinage)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lay out a single wall.
    Wall(WallArgs),
    /// Lay out two walls meeting at a right angle.
    Corner(CornerArgs),
    /// Print the front view of a wall as a grid of block codes.
    Raster(RasterArgs),
    /// List the available block sizes.
    Catalog,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
struct WallShape {
    /// Wall thickness in cm.
    #[arg(long)]
    thickness: Option<f64>,
    /// Wall height in cm.
    #[arg(long)]
    height: Option<f64>,
    #[arg(long)]
    name: Option<String>,
}

impl WallShape {
    fn params(&self) -> WallParams {
        let defaults = WallParams::default();
        WallParams {
            thickness: self.thickness.unwrap_or(defaults.thickness),
            height: self.height.unwrap_or(defaults.height),
            name: self.name.clone().unwrap_or(defaults.name),
        }
    }
}

#[derive(Args)]
struct Output {
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Write the report to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct WallArgs {
    /// Wall length in cm.
    #[arg(long)]
    length: f64,
    #[command(flatten)]
    shape: WallShape,
    #[command(flatten)]
    output: Output,
}

#[derive(Args)]
struct CornerArgs {
    /// Length of the first wall in cm.
    #[arg(long)]
    first: f64,
    /// Length of the second wall in cm.
    #[arg(long)]
    second: f64,
    #[command(flatten)]
    shape: WallShape,
    #[command(flatten)]
    output: Output,
}

#[derive(Args)]
struct RasterArgs {
    #[arg(long)]
    length: f64,
    #[command(flatten)]
    shape: WallShape,
    /// Cell size in cm.
    #[arg(long, default_value_t = DEFAULT_RESOLUTION_CM)]
    resolution: f64,
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Wall(args) => run_wall(args),
        Command::Corner(args) => run_corner(args),
        Command::Raster(args) => run_raster(args),
        Command::Catalog => run_catalog(),
    }
}

fn run_wall(args: WallArgs) -> Result<()> {
    let assembly =
        Assembly::single(args.length, &args.shape.params()).context("failed to lay out wall")?;
    emit(&assembly, &args.output)
}

fn run_corner(args: CornerArgs) -> Result<()> {
    let assembly = Assembly::corner(args.first, args.second, &args.shape.params())
        .context("failed to lay out corner")?;
    emit(&assembly, &args.output)
}

fn run_raster(args: RasterArgs) -> Result<()> {
    let params = args.shape.params();
    let layout = compute_layout(args.length, params.thickness, params.height)
        .context("failed to lay out wall")?;
    let matrix = to_raster_matrix(&layout, args.resolution).context("failed to rasterize wall")?;

    let mut buffer = Vec::new();
    write_raster(&mut buffer, &matrix)?;
    info!(rows = matrix.rows(), cols = matrix.cols(), "raster computed");
    deliver(&buffer, args.out.as_deref())
}

fn run_catalog() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for variant in variants() {
        writeln!(stdout, "{:<13} {}", variant.name(), variant)?;
    }
    writeln!(stdout, "Course height: {COURSE_HEIGHT} cm")?;
    Ok(())
}

fn emit(assembly: &Assembly, output: &Output) -> Result<()> {
    let buffer = match output.format {
        Format::Text => render_text(assembly)?.into_bytes(),
        Format::Json => {
            let mut buffer = Vec::new();
            write_json(&mut buffer, assembly)?;
            buffer
        }
    };
    info!(
        walls = assembly.walls.len(),
        total = assembly.total_blocks(),
        "layout complete"
    );
    deliver(&buffer, output.out.as_deref())
}

fn deliver(bytes: &[u8], out: Option<&Path>) -> Result<()> {
    let Some(path) = out else {
        std::io::stdout()
            .lock()
            .write_all(bytes)
            .context("write report to stdout")?;
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

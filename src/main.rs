use clap::Parser;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger,
};
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};

use voxmine_runtime::WorldIndex;
use voxmine_world::TerrainGenerator;

mod config;
mod session;

use config::HostConfig;
use session::Session;

const DEFAULT_CONFIG: &str = "voxmine.toml";

#[derive(Parser, Debug)]
#[command(name = "voxmine", about = "Headless voxel world session")]
struct Args {
    /// Config file (defaults to ./voxmine.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// World seed
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<i32>,
    /// Horizontal load radius in chunks
    #[arg(long)]
    render_distance: Option<i32>,
    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u32>,
    /// Generate a flat world
    #[arg(long, default_value_t = false)]
    flat: bool,
    /// Also write a debug log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match log_file {
        Some(path) => {
            CombinedLogger::init(vec![
                TermLogger::new(
                    LevelFilter::Info,
                    Config::default(),
                    TerminalMode::Mixed,
                    ColorChoice::Auto,
                ),
                WriteLogger::new(LevelFilter::Debug, Config::default(), File::create(path)?),
            ])?;
        }
        None => {
            env_logger::Builder::new()
                .target(env_logger::Target::Stdout)
                .filter_level(log::LevelFilter::Info)
                .parse_env("RUST_LOG")
                .init();
        }
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<HostConfig, Box<dyn Error>> {
    let mut cfg = match &args.config {
        Some(path) => HostConfig::from_path(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => HostConfig::from_path(Path::new(DEFAULT_CONFIG))?,
        None => HostConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(rd) = args.render_distance {
        cfg.stream.render_distance = rd;
    }
    if let Some(ticks) = args.ticks {
        cfg.session.ticks = ticks;
    }
    cfg.set_flat(args.flat);
    Ok(cfg)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;
    let cfg = load_config(&args)?;
    log::info!(
        "seed={} render_distance={} y=[{},{}] cap={} ticks={}",
        cfg.seed,
        cfg.stream.render_distance,
        cfg.stream.min_chunk_y,
        cfg.stream.max_chunk_y,
        cfg.stream.max_resident_chunks,
        cfg.session.ticks
    );

    let generator = TerrainGenerator::new(cfg.seed, cfg.worldgen_params());
    let world = WorldIndex::new(generator, cfg.stream.clone())
        .with_catalog(cfg.block_catalog()?)
        .with_lighting(cfg.face_lighting());
    let mut session = Session::new(world, cfg.session.clone());
    let summary = session.run();

    let (vertices, indices) = session
        .world()
        .meshes()
        .fold((0usize, 0usize), |(v, i), (_, m)| {
            (v + m.vertex_count(), i + m.index_count())
        });
    log::info!(
        "done: ticks={} generated={} evicted={} rebuilt={} trees={} mined={} placed={}",
        summary.ticks,
        summary.generated,
        summary.evicted,
        summary.rebuilt,
        summary.vegetated,
        summary.mined,
        summary.placed
    );
    log::info!(
        "resident={} vertices={} indices={} final=({:.1},{:.1},{:.1})",
        summary.resident,
        vertices,
        indices,
        summary.position.x,
        summary.position.y,
        summary.position.z
    );
    Ok(())
}

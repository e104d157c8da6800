use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use planner_core::{
    auto_optimize_placement, axial_modes_with_count, speaker_layout, Catalog, DesignSnapshot,
    DistanceAdjustments, PlannerReport, RoomDimensions, UnitSystem, DEFAULT_MODE_COUNT,
};

mod output;

#[derive(Parser)]
#[command(name = "theater-planner")]
#[command(about = "Home-theater room modes, speaker layout and power estimates")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Debug-level logging (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON instead of text tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Axial room modes for each dimension
    Modes {
        #[command(flatten)]
        room: RoomArgs,
        /// Number of orders per dimension
        #[arg(long, default_value_t = DEFAULT_MODE_COUNT)]
        count: usize,
    },
    /// Speaker positions for a channel configuration
    Layout {
        #[command(flatten)]
        room: RoomArgs,
        #[command(flatten)]
        speakers: LayoutArgs,
    },
    /// Suggest distance multipliers that avoid modal pressure zones
    Optimize {
        #[command(flatten)]
        room: RoomArgs,
        #[command(flatten)]
        speakers: LayoutArgs,
    },
    /// Full evaluation of a saved design file
    Report {
        /// Design snapshot JSON
        design: PathBuf,
        /// Combined equipment catalog JSON ({"speakers":[..],"receivers":[..],"displays":[..]})
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Args)]
struct RoomArgs {
    #[arg(long)]
    width: f64,
    #[arg(long)]
    length: f64,
    #[arg(long)]
    height: f64,
    /// Unit the dimensions are given in
    #[arg(long, default_value = "meters")]
    unit: UnitSystem,
}

impl RoomArgs {
    fn dimensions(&self) -> RoomDimensions {
        RoomDimensions::from_unit(self.width, self.length, self.height, self.unit)
    }
}

#[derive(Args)]
struct LayoutArgs {
    /// Channel configuration such as 5.1 or 7.1.4
    #[arg(short, long, default_value = "5.1")]
    config: String,
    #[arg(long, default_value_t = 1.0)]
    front: f64,
    #[arg(long, default_value_t = 1.0)]
    center: f64,
    #[arg(long, default_value_t = 1.0)]
    surround: f64,
    #[arg(long, default_value_t = 1.0)]
    rear: f64,
    #[arg(long, default_value_t = 1.0)]
    top_front: f64,
    #[arg(long, default_value_t = 1.0)]
    top_middle: f64,
    #[arg(long, default_value_t = 1.0)]
    top_rear: f64,
}

impl LayoutArgs {
    fn adjustments(&self) -> DistanceAdjustments {
        use planner_core::RoleGroup::*;
        DistanceAdjustments::default()
            .with(Front, self.front)
            .with(Center, self.center)
            .with(Surround, self.surround)
            .with(Rear, self.rear)
            .with(TopFront, self.top_front)
            .with(TopMiddle, self.top_middle)
            .with(TopRear, self.top_rear)
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Modes { room, count } => {
            let modes = axial_modes_with_count(&room.dimensions(), count);
            if cli.json {
                print_json(&modes)
            } else {
                output::print_modes(&modes);
                Ok(())
            }
        }
        Commands::Layout { room, speakers } => {
            let dims = room.dimensions();
            let layout = speaker_layout(&dims, &speakers.config, &speakers.adjustments());
            if layout.is_empty() {
                log::warn!("room width and length must be greater than 0");
            }
            if cli.json {
                print_json(&layout)
            } else {
                output::print_layout(&layout, room.unit);
                Ok(())
            }
        }
        Commands::Optimize { room, speakers } => {
            let dims = room.dimensions();
            let current = speakers.adjustments();
            let layout = speaker_layout(&dims, &speakers.config, &current);
            let proposed = auto_optimize_placement(&dims, &layout, &current);
            let revised = speaker_layout(&dims, &speakers.config, &proposed);
            if cli.json {
                print_json(&serde_json::json!({
                    "adjustments": proposed,
                    "layout": revised,
                }))
            } else {
                output::print_adjustments(&current, &proposed);
                output::print_layout(&revised, room.unit);
                Ok(())
            }
        }
        Commands::Report { design, catalog } => {
            let snapshot = DesignSnapshot::from_json(&read_text(&design)?)
                .with_context(|| format!("parsing design {}", design.display()))?;
            let catalog = match catalog {
                Some(path) => Catalog::from_json(&read_text(&path)?)
                    .with_context(|| format!("parsing catalog {}", path.display()))?,
                None => Catalog::default(),
            };
            let report = PlannerReport::build(&snapshot, &catalog);
            for w in &report.warnings {
                log::warn!("{w}");
            }
            if cli.json {
                print_json(&report)
            } else {
                output::print_report(&snapshot, &report);
                Ok(())
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

//! Runner Sim entry point
//!
//! Headless native runner: loads settings, lets the autopilot play, records
//! the results to the leaderboard file and prints the top entries.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use runner_sim::highscores::{FileStore, ScoreStore};
use runner_sim::platform::{Autopilot, Clock, FixedStep, FramePacer};
use runner_sim::renderer::{AsciiSurface, Frame, LogSurface, RenderSurface};
use runner_sim::{GameLoop, Settings, Variant};

#[derive(Debug, Parser)]
#[command(name = "runner-sim", about = "Headless runner game simulation")]
struct Args {
    /// Settings file (JSON); missing file means defaults
    #[arg(long, default_value = "runner-sim.json")]
    settings: PathBuf,

    /// Game variant preset (dino or hugo)
    #[arg(long)]
    variant: Option<String>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames
    #[arg(long, default_value_t = 100_000)]
    ticks: u64,

    /// Extra runs after the first game over
    #[arg(long, default_value_t = 0)]
    restarts: u32,

    /// Leaderboard file
    #[arg(long)]
    leaderboard: Option<PathBuf>,

    /// Player name
    #[arg(long)]
    name: Option<String>,

    /// Pace frames in real time instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Print the final screen as text
    #[arg(long)]
    ascii: bool,
}

/// Logs as usual and keeps the last frame for the text dump
struct Surfaces {
    log: LogSurface,
    ascii: AsciiSurface,
    last: Option<Frame>,
}

impl RenderSurface for Surfaces {
    fn present(&mut self, frame: &Frame) {
        self.log.present(frame);
        self.last = Some(frame.clone());
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::load(&args.settings)?;

    if let Some(name) = &args.variant {
        let variant = Variant::from_name(name).ok_or_else(|| format!("unknown variant: {}", name))?;
        let base = Settings::for_variant(variant);
        settings.variant = variant;
        settings.prompt_name = base.prompt_name;
    }
    if let Some(path) = args.leaderboard {
        settings.leaderboard_path = path;
    }
    if let Some(name) = &args.name {
        settings.player_name = name.clone();
    }

    let seed = args.seed.or(settings.seed).unwrap_or_else(clock_seed);
    log::info!("Runner Sim (native) starting, variant {}", settings.variant.as_str());

    let store = FileStore::new(&settings.leaderboard_path, settings.leaderboard_format);
    let mut game = GameLoop::from_settings(&settings, seed, store);
    let mut bot = Autopilot::new(&settings.player_name, args.restarts);
    let mut surfaces = Surfaces {
        log: LogSurface::default(),
        ascii: AsciiSurface::new(80, 20),
        last: None,
    };

    let mut clock: Box<dyn Clock> = if args.realtime {
        Box::new(FramePacer::new(settings.fps))
    } else {
        Box::new(FixedStep::from_fps(settings.fps))
    };
    let summary = game.run(&mut bot, &mut surfaces, &mut clock, Some(args.ticks))?;

    if args.ascii {
        if let Some(frame) = &surfaces.last {
            print!("{}", surfaces.ascii.render(frame));
        }
    }

    println!(
        "{} ticks, {} deaths, best score {}, last score {}",
        summary.ticks, summary.deaths, summary.best_score, summary.final_score
    );
    let board = game.store().load()?;
    println!("Leaderboard ({}):", game.store().path().display());
    for (i, entry) in board.top(settings.leaderboard_display).iter().enumerate() {
        println!("{:>2}. {} - {}", i + 1, entry.name, entry.score);
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_status::{
    init_logging, Bounds, FontSource, StatusDisplay, TextCanvas, TOTAL_SHIP_CELLS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use std::path::PathBuf;

/// Terminal rows are this many pixels tall.
#[cfg(feature = "std")]
const CELL_HEIGHT: u32 = 20;
#[cfg(feature = "std")]
const BOARD_CELLS: u32 = 100;
/// Largest accepted `--width` / `--height`, in pixels.
#[cfg(feature = "std")]
const MAX_DIMENSION: i64 = 10_000;

#[derive(Parser)]
#[command(author, version, about = "Render the Battleship status banner", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, global = true, help = "Custom font file (defaults to $BATTLESHIP_FONT or Audiowide-Regular.ttf)")]
    font: Option<PathBuf>,
    #[arg(long, global = true, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION))]
    width: u32,
    #[arg(long, global = true, default_value_t = 150, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION))]
    height: u32,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Outcome {
    Won,
    Lost,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Render the banner once with the given messages and counters.
    Show {
        #[arg(long)]
        top: Option<String>,
        #[arg(long)]
        bottom: Option<String>,
        #[arg(long, default_value_t = 0)]
        player_hits: u32,
        #[arg(long, default_value_t = 0)]
        comp_hits: u32,
        #[arg(long, value_enum)]
        game_over: Option<Outcome>,
    },
    /// Play a random session and render the banner after every status change.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible sessions (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_CELLS, help = "Maximum shots per side")]
        shots: u32,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let bounds = Bounds::new(0, 0, cli.width, cli.height);
    let source = match cli.font {
        Some(path) => FontSource::File(path),
        None => FontSource::from_env(),
    };
    let mut display = StatusDisplay::with_font_source(bounds, source);

    match cli.command {
        Commands::Show {
            top,
            bottom,
            player_hits,
            comp_hits,
            game_over,
        } => {
            if let Some(outcome) = game_over {
                display.show_game_over(matches!(outcome, Outcome::Won));
            }
            if let Some(top) = top {
                display.set_top_line(top);
            }
            if let Some(bottom) = bottom {
                display.set_bottom_line(bottom);
            }
            display.set_player_hit_count(player_hits);
            display.set_comp_hit_count(comp_hits);
            print_banner(&mut display);
        }
        Commands::Simulate { seed, shots } => {
            if let Some(s) = seed {
                info!("Using fixed seed: {} (session will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            simulate(&mut display, &mut rng, shots.min(BOARD_CELLS));
        }
    }
    Ok(())
}

/// Tracks one side's shots at the other side's fleet.
#[cfg(feature = "std")]
struct Shooter {
    hits: u32,
    shots: u32,
}

#[cfg(feature = "std")]
impl Shooter {
    fn new() -> Self {
        Self { hits: 0, shots: 0 }
    }

    /// Fire at a random untouched cell; true on a hit.
    fn fire(&mut self, rng: &mut SmallRng) -> bool {
        let untouched = BOARD_CELLS - self.shots;
        let afloat = TOTAL_SHIP_CELLS - self.hits;
        self.shots += 1;
        let hit = rng.random_range(0..untouched) < afloat;
        if hit {
            self.hits += 1;
        }
        hit
    }

    fn sank_fleet(&self) -> bool {
        self.hits >= TOTAL_SHIP_CELLS
    }
}

#[cfg(feature = "std")]
fn simulate(display: &mut StatusDisplay, rng: &mut SmallRng, max_shots: u32) {
    display.reset();
    print_banner(display);

    let mut player = Shooter::new();
    let mut computer = Shooter::new();
    for round in 1..=max_shots {
        display.set_top_line(format!("ROUND {}", round));
        if player.fire(rng) {
            display.set_player_hit_count(player.hits);
            display.set_bottom_line("PLAYER SCORES A HIT!");
            print_banner(display);
        }
        if player.sank_fleet() {
            break;
        }
        if computer.fire(rng) {
            display.set_comp_hit_count(computer.hits);
            display.set_bottom_line("COMPUTER SCORES A HIT!");
            print_banner(display);
        }
        if computer.sank_fleet() {
            break;
        }
    }

    let player_won = player.hits >= computer.hits;
    info!(
        "session over after {} player shots: {} - {}",
        player.shots, player.hits, computer.hits
    );
    display.show_game_over(player_won);
    print_banner(display);
}

#[cfg(feature = "std")]
fn print_banner(display: &mut StatusDisplay) {
    let bounds = display.bounds();
    // One terminal column per character of the display font.
    let cell_width = display.font().advance_px('M').round().max(1.0) as u32;
    let mut canvas = TextCanvas::new(bounds.width, bounds.height, cell_width, CELL_HEIGHT);
    display.render(&mut canvas);

    let border = format!("+{}+", "-".repeat(canvas.cols()));
    println!("{}", border);
    for row in 0..canvas.rows() {
        println!("|{:<width$}|", canvas.row_text(row), width = canvas.cols());
    }
    println!("{}", border);
}

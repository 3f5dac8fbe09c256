//! Coin Dash headless runner
//!
//! Drives the simulation with a scripted player (run right, hop, shoot when
//! armed) and reports the result. Rendering lives in the host frontend.
//!
//! Usage:
//!   RUST_LOG=info cargo run -- --frames 3600 --json

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use coin_dash::consts::MAX_LEVEL;
use coin_dash::sim::{CONTROLS_FOOTER, GamePhase, OverlayKind};
use coin_dash::{Game, Settings};

#[derive(Parser)]
#[command(name = "coin-dash")]
#[command(about = "Run a scripted Coin Dash session without a renderer")]
struct Args {
    /// Number of 60 Hz frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u32,

    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Level to start on
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Print the final render snapshot as JSON
    #[arg(long)]
    json: bool,
}

const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.level == 0 || args.level > MAX_LEVEL {
        bail!("level must be between 1 and {MAX_LEVEL}, got {}", args.level);
    }

    let settings = match &args.settings {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let mut game = Game::new(settings);
    game.press_overlay_button();
    if args.level > 1 {
        game.state.level = args.level;
        game.state.next_level();
    }
    log::info!("Coin Dash starting on level {}", game.state.level);

    let mut now = 0.0;
    game.key_down("ArrowRight");
    for frame in 0..args.frames {
        // Hop every 40 frames
        if frame % 40 == 0 {
            game.key_down("Space");
        } else if frame % 40 == 6 {
            game.key_up("Space");
        }
        if game.state.ammo > 0 && frame % 20 == 0 {
            game.key_down("KeyF");
            game.key_up("KeyF");
        }

        now += FRAME_MS;
        game.frame(now);

        for event in game.drain_events() {
            log::debug!("frame {frame}: {event:?}");
        }

        match game.overlay().map(|o| o.kind) {
            Some(OverlayKind::LevelComplete) => game.press_overlay_button(),
            Some(OverlayKind::Victory | OverlayKind::GameOver) => break,
            _ => {}
        }
    }

    let hud = game.hud();
    println!("Phase:  {:?}", game.state.phase);
    println!("World:  {}", hud.world);
    println!("Score:  {}", hud.score);
    println!("Coins:  {}/{}", hud.coins, hud.coin_total);
    println!("Lives:  {}", hud.lives);
    println!("Ammo:   {}", hud.ammo);
    if let Some(overlay) = game.overlay() {
        println!();
        println!("{}", overlay.title);
        println!("{}", overlay.subtitle);
        println!("{CONTROLS_FOOTER}");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    }

    if game.state.phase == GamePhase::Won {
        log::info!("Scripted run beat every level");
    }

    Ok(())
}

//! Hamburger Time entry point
//!
//! Opens the window, loads sprites and runs the fixed-timestep game loop.

use anyhow::Result;
use macroquad::prelude::{Conf, get_frame_time, next_frame};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use hamburger_time::GameConfig;
use hamburger_time::consts::*;
use hamburger_time::platform;
use hamburger_time::renderer::{MacroquadCanvas, draw_scene};
use hamburger_time::sim::{GamePhase, GameState, tick};

/// Game instance holding all state
struct Game {
    state: GameState,
    rng: Pcg32,
    accumulator: f32,
    // Track phase for game-over logging
    last_phase: GamePhase,
}

impl Game {
    fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            state: GameState::new(config),
            rng: Pcg32::seed_from_u64(seed),
            accumulator: 0.0,
            last_phase: GamePhase::Playing,
        }
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = platform::poll_input();
            tick(&mut self.state, &input, &mut self.rng);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        let current_phase = self.state.phase();
        if current_phase != self.last_phase {
            if current_phase == GamePhase::GameOver {
                log::info!(
                    "Game over after {} ticks: {} eaten, {} on the floor",
                    self.state.time_ticks,
                    self.state.eaten_count,
                    self.state.floor_count()
                );
            }
            self.last_phase = current_phase;
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: CAPTION.to_owned(),
        window_width: WIDTH as i32,
        window_height: HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Seed from wall-clock time (works on web too)
fn clock_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1_000_000.0) as u64
}

async fn run() -> Result<()> {
    let config = GameConfig::load();
    let mut canvas = MacroquadCanvas::load().await?;

    let seed = clock_seed();
    let mut game = Game::new(config, seed);
    log::info!("Game initialized with seed: {}", seed);

    loop {
        if platform::quit_requested() {
            log::info!("Quit requested");
            break;
        }

        game.update(get_frame_time());

        canvas.begin_frame();
        draw_scene(&game.state, &mut canvas);

        next_frame().await;
    }

    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Hamburger Time starting...");

    if let Err(e) = run().await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use terraleap_core::game_trait::Game;
use terraleap_core::procedural::ProceduralAssets;
use terraleap_core::time::{FrameClock, SystemClock, UnpacedClock};
use terraleap_platformer::TerraLeap;
use terraleap_platformer::config::PlatformerConfig;
use terraleap_runner::autopilot::Autopilot;
use terraleap_runner::cli::RunOptions;
use terraleap_runner::game_loop::run_game_loop;
use terraleap_runner::headless::HeadlessRenderer;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = RunOptions::parse(std::env::args().skip(1));

    let mut config = PlatformerConfig::load();
    if let Some(seed) = opts.seed {
        config.level.seed = Some(seed);
    }

    let mut assets = ProceduralAssets::new();
    let mut game = match TerraLeap::new(config, &mut assets) {
        Ok(game) => game,
        Err(e) => {
            tracing::error!("Failed to load assets: {e}");
            return ExitCode::FAILURE;
        },
    };

    let meta = game.metadata();
    tracing::info!(
        "{} ({}x{}) starting, tick limit {:?}",
        meta.title,
        meta.window_width,
        meta.window_height,
        opts.max_ticks()
    );

    let mut clock: Box<dyn FrameClock> = if opts.unthrottled {
        Box::new(UnpacedClock)
    } else {
        Box::new(SystemClock::new())
    };
    let summary = run_game_loop(
        &mut game,
        &mut Autopilot::default(),
        &mut HeadlessRenderer::new(),
        clock.as_mut(),
        opts.max_ticks(),
    );

    match serde_json::to_string(&summary) {
        Ok(json) => tracing::info!("Run summary: {json}"),
        Err(e) => tracing::warn!("Failed to serialize run summary: {e}"),
    }
    match serde_json::to_string(&game.snapshot()) {
        Ok(json) => tracing::info!("Final state: {json}"),
        Err(e) => tracing::warn!("Failed to serialize final state: {e}"),
    }

    ExitCode::SUCCESS
}

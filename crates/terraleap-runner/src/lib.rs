pub mod autopilot;
pub mod cli;
pub mod game_loop;
pub mod headless;

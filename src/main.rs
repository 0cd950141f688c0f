mod common;
mod config;
mod driver;
mod error;
mod evaluator;
mod game_state;
mod min_max;
mod render;
mod sim;
mod triangle;

extern crate lazy_static;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::Color;
use crate::config::{Cli, SimConfig};
use crate::driver::run_trials;
use crate::render::{NullRenderer, Renderer, TextRenderer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let config = SimConfig::from(&cli);
    log::info!("depth {}, {:?} pruning, {} trial(s)", config.depth, config.pruning, config.trials);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut renderer: Box<dyn Renderer> = if config.render {
        Box::new(TextRenderer::new(config.render_delay))
    } else {
        Box::new(NullRenderer)
    };

    let start = Instant::now();
    let tally = run_trials(&config, &mut rng, renderer.as_mut()).context("failed to play trials")?;
    let elapsed = start.elapsed();

    println!("{}", elapsed.as_secs_f64());
    println!("{}", tally);
    println!("{}", tally.win_percentage(Color::Red));
    log::info!("{} games in {:.3}s, red won {:.1}%", tally.games(), elapsed.as_secs_f64(), tally.win_percentage(Color::Red));
    Ok(())
}

use std::fmt;
use std::fmt::Formatter;

use ahash::HashMap;
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::{Color, Edge, GameResult};
use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::game_state::GameState;
use crate::render::{Frame, Renderer};
use crate::sim::best_move;
use crate::triangle::find_triangle;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameRecord {
    pub first: Color,
    pub moves: Vec<(Color, Edge)>,
    pub result: GameResult,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Color> {
        self.result.winner()
    }
}

/// Blue's opponent model: any available edge, uniformly.
pub fn random_move<R: Rng>(state: &GameState, rng: &mut R) -> Option<Edge> {
    state.available().iter().collect_vec().choose(rng).copied()
}

fn choose_move<R: Rng>(config: &SimConfig, state: &mut GameState, rng: &mut R) -> Result<Edge> {
    let color = state.turn();
    let chosen = match color {
        Color::Red => best_move(state, config.depth, config.pruning).min_max_move,
        Color::Blue => random_move(state, rng),
    };
    chosen.ok_or(Error::NoMoveFound { color })
}

/// Plays one game to the end. All randomness is drawn from `rng`.
pub fn play_game<R: Rng>(config: &SimConfig, rng: &mut R, renderer: &mut dyn Renderer) -> Result<GameRecord> {
    let first = if rng.gen_bool(0.5) { Color::Red } else { Color::Blue };
    let mut state = GameState::new(first);
    let mut moves = Vec::with_capacity(state.available().len());
    log::debug!("new game, {} moves first", first);
    renderer.reset();
    renderer.draw(&Frame::new(&state, None));

    loop {
        let color = state.turn();
        let edge = choose_move(config, &mut state, rng)?;
        let result = state.play(edge)?;
        moves.push((color, edge));
        log::debug!("{} claims {}", color, edge);
        renderer.draw(&Frame::new(&state, Some(edge)));

        if result.is_over() {
            if let Some(triangle) = find_triangle(state.edges(color)) {
                log::debug!("{} closed triangle {:?} after {} moves", color, triangle, moves.len());
            }
            return Ok(GameRecord { first, moves, result });
        }
    }
}

/// Game outcomes over a series of trials.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    wins: HashMap<Color, u32>,
    draws: u32,
    games: u32,
}

impl Tally {
    pub fn record(&mut self, result: GameResult) {
        match result.winner() {
            Some(color) => *self.wins.entry(color).or_default() += 1,
            None => self.draws += 1,
        }
        self.games += 1;
    }

    pub fn wins(&self, color: Color) -> u32 {
        self.wins.get(&color).copied().unwrap_or(0)
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn win_percentage(&self, color: Color) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(self.wins(color)) / f64::from(self.games) * 100.0
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{Red: {}, Blue: {}", self.wins(Color::Red), self.wins(Color::Blue))?;
        if self.draws > 0 {
            write!(f, ", Draw: {}", self.draws)?;
        }
        write!(f, "}}")
    }
}

pub fn run_trials<R: Rng>(config: &SimConfig, rng: &mut R, renderer: &mut dyn Renderer) -> Result<Tally> {
    let mut tally = Tally::default();
    let progress_step = (config.trials / 10).max(1);
    for trial in 0..config.trials {
        let record = play_game(config, rng, renderer)?;
        if record.result == GameResult::Draw {
            log::warn!("game {} ended in a draw", trial);
        }
        tally.record(record.result);
        if (trial + 1) % progress_step == 0 {
            log::info!("{}/{} games played, {}", trial + 1, config.trials, tally);
        }
    }
    Ok(tally)
}

use std::thread;
use std::time::Duration;

use itertools::Itertools;
use lazy_static::lazy_static;

use crate::common::{Color, Edge, Vertex, VERTEX_COUNT};
use crate::game_state::GameState;

lazy_static! {
    /// Vertex positions evenly spaced on the unit circle, vertex 0 at angle zero.
    pub static ref VERTEX_POSITIONS: [(f64, f64); VERTEX_COUNT] = {
        let mut positions = [(0.0, 0.0); VERTEX_COUNT];
        for (vertex, position) in positions.iter_mut().enumerate() {
            let angle = (vertex as f64 * 60.0).to_radians();
            *position = (angle.cos(), angle.sin());
        }
        positions
    };
}

/// Everything a renderer needs to redraw the board after a move.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub positions: [(f64, f64); VERTEX_COUNT],
    pub red: Vec<(Vertex, Vertex)>,
    pub blue: Vec<(Vertex, Vertex)>,
    pub turn: Color,
    pub selection: Option<Edge>,
}

impl Frame {
    pub fn new(state: &GameState, selection: Option<Edge>) -> Self {
        let pairs = |color| state.edges(color).iter().map(|e| e.endpoints()).collect_vec();
        Self {
            positions: *VERTEX_POSITIONS,
            red: pairs(Color::Red),
            blue: pairs(Color::Blue),
            turn: state.turn(),
            selection,
        }
    }
}

pub trait Renderer {
    /// Clears everything drawn for the previous game.
    fn reset(&mut self);
    fn draw(&mut self, frame: &Frame);
}

#[derive(Debug, Default, Copy, Clone)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn reset(&mut self) {}
    fn draw(&mut self, _frame: &Frame) {}
}

/// Writes each frame to the log and waits `delay` so a game can be followed move by move.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    delay: Duration,
    frames: usize,
}

impl TextRenderer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, frames: 0 }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    fn format_edges(edges: &[(Vertex, Vertex)]) -> String {
        edges.iter().map(|(a, b)| format!("{}-{}", a, b)).join(" ")
    }
}

impl Renderer for TextRenderer {
    fn reset(&mut self) {
        self.frames = 0;
        log::info!("--- new game ---");
    }

    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        let selection = frame.selection.map(|e| e.to_string()).unwrap_or_else(|| "-".to_string());
        log::info!(
            "frame {:>2} | red: [{}] | blue: [{}] | selected: {} | next: {}",
            self.frames,
            Self::format_edges(&frame.red),
            Self::format_edges(&frame.blue),
            selection,
            frame.turn,
        );
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

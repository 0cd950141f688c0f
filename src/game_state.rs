use crate::common::{Color, Edge, EdgeSet, GameResult, EDGE_COUNT};
use crate::error::{Error, Result};
use crate::triangle::forms_triangle;

/// Claimed and available edges of one game of Sim, plus the color to move.
///
/// The search mutates a state in place with [`GameState::apply`] and [`GameState::undo`]. Those
/// calls must nest like a stack: the last edge applied is the first one undone. Neither of them
/// touches [`GameState::turn`], only [`GameState::play`] does.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    available: EdgeSet,
    red: Vec<Edge>,
    blue: Vec<Edge>,
    turn: Color,
}

impl GameState {
    pub fn new(turn: Color) -> Self {
        Self {
            available: Edge::universe(),
            red: Vec::with_capacity(EDGE_COUNT),
            blue: Vec::with_capacity(EDGE_COUNT),
            turn,
        }
    }

    /// A position with the given claims, in claim order. Panics if an edge is claimed twice.
    pub fn with_edges(red: &[Edge], blue: &[Edge], turn: Color) -> Self {
        let mut state = Self::new(turn);
        for &edge in red {
            state.apply(edge, Color::Red);
        }
        for &edge in blue {
            state.apply(edge, Color::Blue);
        }
        state
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn available(&self) -> EdgeSet {
        self.available
    }

    pub fn edges(&self, color: Color) -> &[Edge] {
        match color {
            Color::Red => &self.red,
            Color::Blue => &self.blue,
        }
    }

    fn edges_mut(&mut self, color: Color) -> &mut Vec<Edge> {
        match color {
            Color::Red => &mut self.red,
            Color::Blue => &mut self.blue,
        }
    }

    pub fn apply(&mut self, edge: Edge, color: Color) {
        assert!(self.available.remove(edge), "{} is not available", edge);
        self.edges_mut(color).push(edge);
    }

    pub fn undo(&mut self, edge: Edge, color: Color) {
        let last = self.edges_mut(color).pop();
        assert_eq!(last, Some(edge), "undo of {} for {} out of order", edge, color);
        self.available.insert(edge);
    }

    pub fn try_apply(&mut self, edge: Edge, color: Color) -> Result<()> {
        if !self.available.contains(edge) {
            return Err(Error::EdgeUnavailable { edge });
        }
        self.apply(edge, color);
        Ok(())
    }

    /// Claims `edge` permanently for the color to move and passes the turn.
    pub fn play(&mut self, edge: Edge) -> Result<GameResult> {
        if self.result().is_over() {
            return Err(Error::GameOver);
        }
        self.try_apply(edge, self.turn)?;
        self.turn = !self.turn;
        Ok(self.result())
    }

    pub fn result(&self) -> GameResult {
        let red = forms_triangle(&self.red);
        let blue = forms_triangle(&self.blue);
        assert!(!(red && blue), "both colors hold a triangle");
        if red {
            GameResult::RedFormedTriangle
        } else if blue {
            GameResult::BlueFormedTriangle
        } else if self.available.is_empty() {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        }
    }

    /// Checks that the three edge collections partition the universe.
    pub fn is_consistent(&self) -> bool {
        let red = self.red.iter().copied().collect::<EdgeSet>();
        let blue = self.blue.iter().copied().collect::<EdgeSet>();
        red.len() == self.red.len()
            && blue.len() == self.blue.len()
            && red.is_disjoint(blue)
            && self.available.is_disjoint(red | blue)
            && (self.available | red | blue) == Edge::universe()
            && self.available.len() + self.red.len() + self.blue.len() == EDGE_COUNT
    }
}

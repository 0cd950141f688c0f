use std::fmt;
use std::fmt::Formatter;
use std::ops::Not;

use enumset::{EnumSet, EnumSetType};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::min_max::Player;

pub type Vertex = u8;

pub const VERTEX_COUNT: usize = 6;
pub const EDGE_COUNT: usize = 15;

/// One of the 15 edges of the complete graph on six vertices.
///
/// Variants are declared in canonical order (ascending by first vertex, then by second), so both
/// `Edge::iter()` and iteration over an [`EdgeSet`] visit edges in that order.
#[derive(EnumIter, EnumSetType, Hash, PartialOrd, Ord, Debug)]
#[enumset(repr = "u16")]
pub enum Edge {
    E01,
    E02,
    E03,
    E04,
    E05,
    E12,
    E13,
    E14,
    E15,
    E23,
    E24,
    E25,
    E34,
    E35,
    E45,
}

pub type EdgeSet = EnumSet<Edge>;

const ENDPOINTS: [(Vertex, Vertex); EDGE_COUNT] = [
    (0, 1), (0, 2), (0, 3), (0, 4), (0, 5),
    (1, 2), (1, 3), (1, 4), (1, 5),
    (2, 3), (2, 4), (2, 5),
    (3, 4), (3, 5),
    (4, 5),
];

impl Edge {
    /// Endpoints as `(min, max)`.
    pub fn endpoints(self) -> (Vertex, Vertex) {
        ENDPOINTS[self as usize]
    }

    pub fn from_vertices(a: Vertex, b: Vertex) -> Option<Edge> {
        let key = if a < b { (a, b) } else { (b, a) };
        Edge::iter().find(|edge| edge.endpoints() == key)
    }

    pub fn touches(self, vertex: Vertex) -> bool {
        let (a, b) = self.endpoints();
        a == vertex || b == vertex
    }

    pub fn universe() -> EdgeSet {
        EdgeSet::all()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (a, b) = self.endpoints();
        write!(f, "({}, {})", a, b)
    }
}

#[derive(EnumIter, Display, Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum Color {
    Red,
    Blue,
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }
}

impl From<Player> for Color {
    fn from(player: Player) -> Self {
        match player {
            Player::Max => Color::Red,
            Player::Min => Color::Blue,
        }
    }
}

impl From<Color> for Player {
    fn from(color: Color) -> Self {
        match color {
            Color::Red => Player::Max,
            Color::Blue => Player::Min,
        }
    }
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum GameResult {
    Ongoing,
    /// Red closed a triangle among its own edges, so Blue wins.
    RedFormedTriangle,
    /// Blue closed a triangle among its own edges, so Red wins.
    BlueFormedTriangle,
    Draw,
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::RedFormedTriangle => Some(Color::Blue),
            GameResult::BlueFormedTriangle => Some(Color::Red),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }
}

use itertools::Itertools;

use crate::common::{Color, Edge};
use crate::game_state::GameState;

const PAIR_WEIGHT: i32 = 100;

/// Number of unordered pairs of distinct edges sharing exactly one endpoint.
///
/// Each such pair is two sides of a possible triangle.
pub fn pair_count(edges: &[Edge]) -> i32 {
    edges.iter()
        .tuple_combinations()
        .filter(|(first, second)| {
            let (a, b) = first.endpoints();
            first != second && (second.touches(a) || second.touches(b))
        })
        .count() as i32
}

/// Static score of a non-terminal position, from Red's point of view.
pub fn evaluate(state: &GameState) -> i32 {
    PAIR_WEIGHT * (pair_count(state.edges(Color::Blue)) - pair_count(state.edges(Color::Red)))
}

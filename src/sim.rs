use crate::common::{Color, Edge, EdgeSet};
use crate::evaluator::evaluate;
use crate::game_state::GameState;
use crate::min_max::stats::{NullStats, Stats};
use crate::min_max::{alpha_beta, Player, Pruning, ScoredMove, Strategy};
use crate::triangle::forms_triangle;

/// Score of a decided game. Positive when Red has won.
pub const WIN_SCORE: i32 = 350;

#[derive(Debug, Default, Copy, Clone)]
pub struct SimStrategy;

impl Strategy<GameState> for SimStrategy {
    type Move = Edge;
    type Moves = EdgeSet;

    fn possible_moves(&self, state: &GameState) -> EdgeSet {
        state.available()
    }

    fn terminal_score(&self, state: &GameState) -> Option<i32> {
        if forms_triangle(state.edges(Color::Blue)) {
            Some(WIN_SCORE)
        } else if forms_triangle(state.edges(Color::Red)) {
            Some(-WIN_SCORE)
        } else {
            None
        }
    }

    fn score(&self, state: &GameState) -> i32 {
        evaluate(state)
    }

    fn do_move(&self, state: &mut GameState, edge: Edge, player: Player) {
        state.apply(edge, Color::from(player));
    }

    fn undo_move(&self, state: &mut GameState, edge: Edge, player: Player) {
        state.undo(edge, Color::from(player));
    }
}

/// Searches `depth` plies ahead with `color` to move. Red maximizes, Blue minimizes.
///
/// The state is left exactly as it was passed in.
pub fn search<STATS: Stats>(state: &mut GameState, depth: u8, color: Color, pruning: Pruning, stats: &mut STATS) -> ScoredMove<Option<Edge>> {
    alpha_beta(&SimStrategy, state, depth, Player::from(color), pruning, stats)
}

pub fn best_move(state: &mut GameState, depth: u8, pruning: Pruning) -> ScoredMove<Option<Edge>> {
    let color = state.turn();
    search(state, depth, color, pruning, &mut NullStats)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::IteratorRandom;
    use rand::{Rng, SeedableRng};
    use strum::IntoEnumIterator;

    use crate::common::{Color, Edge};
    use crate::evaluator::evaluate;
    use crate::game_state::GameState;
    use crate::min_max::stats::{NullStats, SimpleStats};
    use crate::min_max::{Pruning, ScoredMove};
    use crate::sim::{best_move, search, WIN_SCORE};
    use crate::triangle::forms_triangle;

    /// A position reached by `claimed` random alternating moves without a triangle.
    fn random_position(rng: &mut StdRng, claimed: usize) -> GameState {
        loop {
            let mut state = GameState::new(if rng.gen_bool(0.5) { Color::Red } else { Color::Blue });
            for _ in 0..claimed {
                let edge = state.available().iter().choose(rng).unwrap();
                state.play(edge).unwrap();
                if state.result().is_over() {
                    break;
                }
            }
            if !state.result().is_over() {
                return state;
            }
        }
    }

    /// Plain full-depth minimax over cloned states.
    fn brute_force(state: &GameState, color: Color) -> i32 {
        if forms_triangle(state.edges(Color::Blue)) {
            return WIN_SCORE;
        }
        if forms_triangle(state.edges(Color::Red)) {
            return -WIN_SCORE;
        }
        if state.available().is_empty() {
            return evaluate(state);
        }
        let scores = state.available().iter().map(|edge| {
            let mut next = state.clone();
            next.apply(edge, color);
            brute_force(&next, !color)
        });
        match color {
            Color::Red => scores.max().unwrap(),
            Color::Blue => scores.min().unwrap(),
        }
    }

    #[test]
    fn empty_board_at_depth_zero() {
        let mut state = GameState::new(Color::Red);
        assert_eq!(best_move(&mut state, 0, Pruning::Enabled), ScoredMove::new(0, None));
    }

    #[test]
    fn decided_positions() {
        let mut state = GameState::with_edges(&[Edge::E01, Edge::E12, Edge::E02], &[Edge::E34], Color::Red);
        assert_eq!(best_move(&mut state, 5, Pruning::Enabled), ScoredMove::new(-WIN_SCORE, None));

        let mut state = GameState::with_edges(&[Edge::E34], &[Edge::E01, Edge::E12, Edge::E02], Color::Blue);
        assert_eq!(best_move(&mut state, 5, Pruning::Enabled), ScoredMove::new(WIN_SCORE, None));
    }

    #[test]
    fn depth_zero_is_static_evaluation() {
        let mut rng = StdRng::seed_from_u64(5);
        for claimed in 0..8 {
            let mut state = random_position(&mut rng, claimed);
            let expected = evaluate(&state);
            for color in Color::iter() {
                assert_eq!(search(&mut state, 0, color, Pruning::Enabled, &mut NullStats), ScoredMove::new(expected, None));
            }
        }
    }

    #[test]
    fn red_avoids_closing_a_triangle() {
        let mut state = GameState::with_edges(&[Edge::E01, Edge::E02], &[Edge::E34], Color::Red);
        let before = state.clone();
        let best = best_move(&mut state, 1, Pruning::Enabled);
        assert_ne!(best.min_max_move, Some(Edge::E12));
        assert!(best.min_max_move.is_some());
        assert_eq!(state, before);
    }

    #[test]
    fn lost_endgame_still_yields_a_move() {
        // E15 and E35 close a red triangle, and after E24 Blue answers E15 and leaves Red only E35.
        let red = [Edge::E01, Edge::E03, Edge::E05, Edge::E14, Edge::E23, Edge::E25];
        let blue = [Edge::E02, Edge::E04, Edge::E12, Edge::E13, Edge::E34, Edge::E45];
        let mut state = GameState::with_edges(&red, &blue, Color::Red);
        assert!(!state.result().is_over());
        assert_eq!(brute_force(&state, Color::Red), -WIN_SCORE);
        for pruning in [Pruning::Enabled, Pruning::Disabled] {
            assert_eq!(best_move(&mut state, 3, pruning), ScoredMove::new(-WIN_SCORE, Some(Edge::E35)));
        }
    }

    #[test]
    fn last_of_tied_moves_wins() {
        // With depth 1 and nothing nearby, every red move leaves the evaluation at the same value.
        let mut state = GameState::new(Color::Red);
        let best = search(&mut state, 1, Color::Red, Pruning::Disabled, &mut NullStats);
        assert_eq!(best, ScoredMove::new(0, Some(Edge::E45)));
    }

    #[test]
    fn exhaustive_search_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..60 {
            let claimed = rng.gen_range(9..=12);
            let mut state = random_position(&mut rng, claimed);
            let remaining = state.available().len() as u8;
            for color in Color::iter() {
                let expected = brute_force(&state, color);
                for pruning in [Pruning::Enabled, Pruning::Disabled] {
                    let result = search(&mut state, remaining, color, pruning, &mut NullStats);
                    assert_eq!(result.score, expected, "{:?} {:?}", state, color);
                    // deeper bounds change nothing once the search is exhaustive
                    let deeper = search(&mut state, remaining + 2, color, pruning, &mut NullStats);
                    assert_eq!(deeper.score, expected);
                }
            }
        }
    }

    #[test]
    fn pruning_preserves_scores() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..15 {
            let claimed = rng.gen_range(8..=12);
            let mut state = random_position(&mut rng, claimed);
            let before = state.clone();
            let remaining = state.available().len() as u8;
            for depth in 0..=remaining {
                for color in Color::iter() {
                    let mut pruned_stats = SimpleStats::default();
                    let mut full_stats = SimpleStats::default();
                    let pruned = search(&mut state, depth, color, Pruning::Enabled, &mut pruned_stats);
                    let full = search(&mut state, depth, color, Pruning::Disabled, &mut full_stats);
                    assert_eq!(pruned.score, full.score, "{:?} depth {} {:?}", state, depth, color);
                    assert!(pruned_stats.node_count <= full_stats.node_count);
                    assert_eq!(full_stats.prune_count, 0);
                    assert_eq!(state, before);

                    assert_eq!(pruned.min_max_move.is_some(), full.min_max_move.is_some());
                }
            }
        }
    }

    #[test]
    fn pruning_preserves_shallow_scores_early_in_the_game() {
        let mut rng = StdRng::seed_from_u64(29);
        for _ in 0..20 {
            let claimed = rng.gen_range(0..=5);
            let mut state = random_position(&mut rng, claimed);
            for depth in 0..=3 {
                for color in Color::iter() {
                    let pruned = search(&mut state, depth, color, Pruning::Enabled, &mut NullStats);
                    let full = search(&mut state, depth, color, Pruning::Disabled, &mut NullStats);
                    assert_eq!(pruned.score, full.score);
                }
            }
        }
    }

    #[test]
    fn pruning_cuts_nodes() {
        let mut rng = StdRng::seed_from_u64(31);
        let mut state = random_position(&mut rng, 6);
        let depth = state.available().len() as u8;
        let mut pruned = SimpleStats::default();
        let mut full = SimpleStats::default();
        search(&mut state, depth.min(5), Color::Red, Pruning::Enabled, &mut pruned);
        search(&mut state, depth.min(5), Color::Red, Pruning::Disabled, &mut full);
        assert!(pruned.prune_count > 0);
        assert!(pruned.node_count < full.node_count);
    }
}

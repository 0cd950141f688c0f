pub mod stats;

use std::ops::Not;

use crate::min_max::stats::Stats;

#[derive(Eq, PartialEq, Hash)]
#[derive(Debug, Copy, Clone)]
pub enum Player {
    Min,
    Max,
}

impl Not for Player {
    type Output = Player;

    fn not(self) -> Player {
        match self {
            Player::Min => Player::Max,
            Player::Max => Player::Min,
        }
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub struct ScoredMove<M> {
    pub score: i32,
    pub min_max_move: M,
}

impl<M> ScoredMove<M> {
    pub fn new(score: i32, min_max_move: M) -> ScoredMove<M> {
        ScoredMove { score, min_max_move }
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Default)]
pub enum Pruning {
    #[default]
    Enabled,
    Disabled,
}

/// Game specific hooks of the search.
///
/// `do_move` and `undo_move` mutate the state in place and are always called in pairs, innermost
/// first.
pub trait Strategy<S> {
    type Move: Copy;
    type Moves: IntoIterator<Item=Self::Move>;

    fn possible_moves(&self, state: &S) -> Self::Moves;
    /// Score of a decided position, `None` while the game goes on.
    fn terminal_score(&self, state: &S) -> Option<i32>;
    /// Heuristic score of an undecided position, from the maximizer's point of view.
    fn score(&self, state: &S) -> i32;
    fn do_move(&self, state: &mut S, min_max_move: Self::Move, player: Player);
    fn undo_move(&self, state: &mut S, min_max_move: Self::Move, player: Player);
}

/// Minimax with optional alpha-beta cutoffs.
///
/// Moves are scanned in the order the strategy yields them. A move whose score ties the best so far
/// replaces it, so among equal moves the last one scanned wins. Cutoffs never change the returned
/// score, but they stop scans early: a cut child reports a bound, and a bound equal to the best
/// score counts as a tie. The returned move can therefore differ between pruned and unpruned
/// searches.
pub fn alpha_beta<S, STRATEGY: Strategy<S>, STATS: Stats>(
    strategy: &STRATEGY,
    state: &mut S,
    remaining_levels: u8,
    player: Player,
    pruning: Pruning,
    stats: &mut STATS,
) -> ScoredMove<Option<STRATEGY::Move>> {
    alpha_beta_eval(strategy, state, remaining_levels, player, -i32::MAX, i32::MAX, pruning, stats)
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta_eval<S, STRATEGY: Strategy<S>, STATS: Stats>(
    strategy: &STRATEGY,
    state: &mut S,
    remaining_levels: u8,
    player: Player,
    mut alpha: i32,
    mut beta: i32,
    pruning: Pruning,
    stats: &mut STATS,
) -> ScoredMove<Option<STRATEGY::Move>> {
    stats.record_node();
    if let Some(score) = strategy.terminal_score(state) {
        stats.record_terminal();
        return ScoredMove::new(score, None);
    }
    let mut moves = strategy.possible_moves(state).into_iter().peekable();
    if remaining_levels == 0 || moves.peek().is_none() {
        stats.record_state_scored();
        return ScoredMove::new(strategy.score(state), None);
    }

    let mut best = ScoredMove::new(match player {
        Player::Max => -i32::MAX,
        Player::Min => i32::MAX,
    }, None);
    for m in moves {
        strategy.do_move(state, m, player);
        let score = alpha_beta_eval(strategy, state, remaining_levels - 1, !player, alpha, beta, pruning, stats).score;
        strategy.undo_move(state, m, player);

        let cutoff = match player {
            Player::Max => {
                if score >= best.score {
                    best = ScoredMove::new(score, Some(m));
                }
                alpha = alpha.max(best.score);
                best.score >= beta
            }
            Player::Min => {
                if score <= best.score {
                    best = ScoredMove::new(score, Some(m));
                }
                beta = beta.min(best.score);
                best.score <= alpha
            }
        };
        if pruning == Pruning::Enabled && cutoff {
            stats.record_prune();
            break;
        }
    }
    best
}

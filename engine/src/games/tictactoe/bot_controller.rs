use serde::{Deserialize, Serialize};

use crate::debug;
use super::board::Board;
use super::error::{Precondition, SearchError};
use super::types::{GameOutcome, Player, Position};

const WIN: i8 = 1;
const LOSS: i8 = -1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub position: Position,
    /// Game value after `position` is played, from X's side.
    pub value: i8,
    pub nodes: u64,
}

/// Optimal move for `player` with the default algorithm.
pub fn best_move(board: &Board, player: Player) -> Result<Position, SearchError> {
    search(board, player, SearchAlgorithm::default()).map(|result| result.position)
}

/// Full-depth search from `board` for `player`.
///
/// X maximizes and O minimizes the X-side utility. A move that ends the game
/// in `player`'s favour is always taken first. Otherwise, among equally good
/// moves the first in row-major order is returned, for both algorithms, so
/// the pruned and unpruned searches always agree on the move as well as the
/// value.
pub fn search(
    board: &Board,
    player: Player,
    algorithm: SearchAlgorithm,
) -> Result<SearchResult, SearchError> {
    check_preconditions(board, player)?;

    if let Some(result) = immediate_win(board, player) {
        debug!(
            "{:?} search for {}: immediate win at {}",
            algorithm, player, result.position
        );
        return Ok(result);
    }

    let mut nodes = 1;
    let mut best: Option<(usize, i8)> = None;
    let mut alpha = LOSS;
    let mut beta = WIN;

    for idx in board.empty_indices() {
        let child = board.with_mark(idx, player);
        let score = match algorithm {
            SearchAlgorithm::Minimax => minimax(&child, &mut nodes),
            SearchAlgorithm::AlphaBeta => alpha_beta(&child, alpha, beta, &mut nodes),
        };

        if best.is_none_or(|(_, best_score)| improves(player, score, best_score)) {
            best = Some((idx, score));
        }

        if algorithm == SearchAlgorithm::AlphaBeta {
            match player {
                Player::X => alpha = alpha.max(score),
                Player::O => beta = beta.min(score),
            }
            if alpha >= beta {
                break;
            }
        }
    }

    let Some((idx, value)) = best else {
        // Unreachable: a board that is not terminal has an empty cell.
        return Err(SearchError::PreconditionViolation(Precondition::TerminalBoard(
            board.outcome(),
        )));
    };

    let result = SearchResult {
        position: Position::from_index(idx),
        value,
        nodes,
    };
    debug!(
        "{:?} search for {}: move {} value {} after {} nodes",
        algorithm, player, result.position, result.value, result.nodes
    );
    Ok(result)
}

/// Minimax value of any board from X's side, terminal boards included.
pub fn evaluate(board: &Board, algorithm: SearchAlgorithm) -> i8 {
    let mut nodes = 0;
    match algorithm {
        SearchAlgorithm::Minimax => minimax(board, &mut nodes),
        SearchAlgorithm::AlphaBeta => alpha_beta(board, LOSS, WIN, &mut nodes),
    }
}

fn check_preconditions(board: &Board, player: Player) -> Result<(), SearchError> {
    let outcome = board.outcome();
    if outcome.is_terminal() {
        return Err(SearchError::PreconditionViolation(Precondition::TerminalBoard(outcome)));
    }
    let to_move = board.player_to_move();
    if player != to_move {
        return Err(SearchError::PreconditionViolation(Precondition::NotPlayersTurn {
            requested: player,
            to_move,
        }));
    }
    Ok(())
}

// Counts the root and the winning child only; the cells scanned before it
// are not searched.
fn immediate_win(board: &Board, player: Player) -> Option<SearchResult> {
    board
        .empty_indices()
        .find(|&idx| board.with_mark(idx, player).outcome() == GameOutcome::Win(player))
        .map(|idx| SearchResult {
            position: Position::from_index(idx),
            value: if player.is_maximizer() { WIN } else { LOSS },
            nodes: 2,
        })
}

#[inline(always)]
fn improves(player: Player, candidate: i8, current: i8) -> bool {
    match player {
        Player::X => candidate > current,
        Player::O => candidate < current,
    }
}

#[inline(always)]
fn worst_score(player: Player) -> i8 {
    if player.is_maximizer() { LOSS } else { WIN }
}

fn minimax(board: &Board, nodes: &mut u64) -> i8 {
    *nodes += 1;
    if let Some(score) = board.outcome().score() {
        return score;
    }

    let to_move = board.player_to_move();
    let mut best = worst_score(to_move);
    for idx in board.empty_indices() {
        let score = minimax(&board.with_mark(idx, to_move), nodes);
        if improves(to_move, score, best) {
            best = score;
        }
    }
    best
}

// Fail-soft: a result <= alpha is an upper bound, >= beta a lower bound,
// anything strictly inside the window is exact.
fn alpha_beta(board: &Board, mut alpha: i8, mut beta: i8, nodes: &mut u64) -> i8 {
    *nodes += 1;
    if let Some(score) = board.outcome().score() {
        return score;
    }

    let to_move = board.player_to_move();
    let mut best = worst_score(to_move);
    for idx in board.empty_indices() {
        let score = alpha_beta(&board.with_mark(idx, to_move), alpha, beta, nodes);
        match to_move {
            Player::X => {
                best = best.max(score);
                alpha = alpha.max(best);
            }
            Player::O => {
                best = best.min(score);
                beta = beta.min(best);
            }
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_winning_move_is_chosen() {
        let b = board("XX. OO. ...");
        for algorithm in [SearchAlgorithm::Minimax, SearchAlgorithm::AlphaBeta] {
            let result = search(&b, Player::X, algorithm).unwrap();
            assert_eq!(result.position, Position::new(0, 2));
            assert_eq!(result.value, WIN);
        }
    }

    #[test]
    fn test_immediate_win_beats_earlier_forced_win() {
        // (0, 1) also wins by force through a fork, but (2, 0) ends the game now.
        let b = board("X.. XO. .O.");
        for algorithm in [SearchAlgorithm::Minimax, SearchAlgorithm::AlphaBeta] {
            let result = search(&b, Player::X, algorithm).unwrap();
            assert_eq!(result.position, Position::new(2, 0));
            assert_eq!(result.value, WIN);
            assert_eq!(result.nodes, 2);
        }
        let fork = b.apply_move(Position::new(0, 1), Player::X).unwrap();
        assert_eq!(evaluate(&fork, SearchAlgorithm::Minimax), WIN);
    }

    #[test]
    fn test_o_takes_its_own_win_over_blocking() {
        // X threatens the top row, but O completes the middle row first.
        let b = board("XX. OO. X..");
        let result = search(&b, Player::O, SearchAlgorithm::AlphaBeta).unwrap();
        assert_eq!(result.position, Position::new(1, 2));
        assert_eq!(result.value, LOSS);
    }

    #[test]
    fn test_blocks_threat_on_column() {
        let b = board("X.. X.. .O.");
        let result = search(&b, Player::O, SearchAlgorithm::Minimax).unwrap();
        assert_eq!(result.position, Position::new(2, 0));
    }

    #[test]
    fn test_o_answers_corner_opening_with_center() {
        let b = board("X.. ... ...");
        assert_eq!(best_move(&b, Player::O).unwrap(), Position::new(1, 1));
    }

    #[test]
    fn test_first_move_on_empty_board_is_first_drawing_cell() {
        // Every opening draws, so the tie-break picks the first cell.
        let result = search(&Board::initial(), Player::X, SearchAlgorithm::AlphaBeta).unwrap();
        assert_eq!(result.position, Position::new(0, 0));
        assert_eq!(result.value, 0);
    }

    #[test]
    fn test_alpha_beta_visits_fewer_nodes_on_empty_board() {
        let full = search(&Board::initial(), Player::X, SearchAlgorithm::Minimax).unwrap();
        let pruned = search(&Board::initial(), Player::X, SearchAlgorithm::AlphaBeta).unwrap();
        assert_eq!(full.nodes, 549_946);
        assert!(pruned.nodes < full.nodes / 4, "pruned search visited {} nodes", pruned.nodes);
        assert_eq!(full.position, pruned.position);
    }

    #[test]
    fn test_rejects_terminal_board() {
        let b = board("XXX OO. ...");
        assert_eq!(
            search(&b, Player::O, SearchAlgorithm::AlphaBeta),
            Err(SearchError::PreconditionViolation(Precondition::TerminalBoard(
                GameOutcome::Win(Player::X)
            )))
        );
    }

    #[test]
    fn test_rejects_wrong_player() {
        assert_eq!(
            best_move(&Board::initial(), Player::O),
            Err(SearchError::PreconditionViolation(Precondition::NotPlayersTurn {
                requested: Player::O,
                to_move: Player::X,
            }))
        );
    }

    #[test]
    fn test_evaluate_terminal_and_open_positions() {
        assert_eq!(evaluate(&board("XXX OO. ..."), SearchAlgorithm::Minimax), WIN);
        assert_eq!(evaluate(&Board::initial(), SearchAlgorithm::AlphaBeta), 0);
        // X holds a fork: two open threats, O can stop only one.
        let fork = board("X.O .O. X.X");
        assert_eq!(fork.player_to_move(), Player::O);
        assert_eq!(evaluate(&fork, SearchAlgorithm::Minimax), WIN);
        assert_eq!(evaluate(&fork, SearchAlgorithm::AlphaBeta), WIN);
    }
}

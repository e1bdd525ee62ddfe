use super::board::Board;
use super::types::{LineKind, Player, Position, WinningLine};

/// The 8 lines of three, as row-major cell indices.
pub const WINNING_LINES: [(LineKind, [usize; 3]); 8] = [
    (LineKind::Row(0), [0, 1, 2]),
    (LineKind::Row(1), [3, 4, 5]),
    (LineKind::Row(2), [6, 7, 8]),
    (LineKind::Column(0), [0, 3, 6]),
    (LineKind::Column(1), [1, 4, 7]),
    (LineKind::Column(2), [2, 5, 8]),
    (LineKind::Diagonal, [0, 4, 8]),
    (LineKind::AntiDiagonal, [2, 4, 6]),
];

pub fn check_win(board: &Board) -> Option<Player> {
    WINNING_LINES
        .iter()
        .find_map(|(_, line)| line_owner(board, line))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&(kind, line)| {
        line_owner(board, &line).map(|player| {
            WinningLine::new(
                player,
                kind,
                Position::from_index(line[0]),
                Position::from_index(line[2]),
            )
        })
    })
}

/// Every player holding a complete line. More than one entry means the board
/// could not have been reached by legal play.
pub(crate) fn line_owners(board: &Board) -> impl Iterator<Item = Player> + '_ {
    WINNING_LINES
        .iter()
        .filter_map(|(_, line)| line_owner(board, line))
}

#[inline(always)]
fn line_owner(board: &Board, line: &[usize; 3]) -> Option<Player> {
    let first = board.cell_at(line[0]);
    let player = first.player()?;
    if board.cell_at(line[1]) == first && board.cell_at(line[2]) == first {
        Some(player)
    } else {
        None
    }
}

use tictactoe_engine::tictactoe::{BOARD_SIZE, Board, Cell, Position, WinningLine};

/// Text grid with column letters and 1-based row numbers. Cells on the
/// winning line are bracketed.
pub fn render_board(board: &Board, winning_line: Option<&WinningLine>) -> String {
    let mut out = String::from("    A   B   C\n");
    for row in 0..BOARD_SIZE {
        if row > 0 {
            out.push_str("   ---+---+---\n");
        }
        out.push_str(&format!("{}  ", row + 1));
        for col in 0..BOARD_SIZE {
            if col > 0 {
                out.push('|');
            }
            let position = Position::new(row, col);
            let symbol = match board.cell(position) {
                Some(Cell::X) => 'X',
                Some(Cell::O) => 'O',
                _ => ' ',
            };
            if winning_line.is_some_and(|line| line.contains(position)) {
                out.push_str(&format!("[{}]", symbol));
            } else {
                out.push_str(&format!(" {} ", symbol));
            }
        }
        out.push('\n');
    }
    out
}

use crate::{Board, Card, Cell, BOARD_SIZE};

/// Inner width of one drawn cell.
const CELL_WIDTH: usize = 9;

/// The three text lines of one cell: top value, left value + owner + right value, bottom value.
fn cell_lines(board: &Board, cell: Cell) -> [String; 3] {
    match board.get(cell) {
        Some(slot) => {
            let [top, right, bottom, left] = slot.card.values;
            let tag: String = format!("{}:{}", slot.owner.tag(), slot.card.id)
                .chars()
                .take(5)
                .collect();
            [
                format!("{:^width$}", top, width = CELL_WIDTH),
                format!("{:<2}{:^5}{:>2}", left, tag, right),
                format!("{:^width$}", bottom, width = CELL_WIDTH),
            ]
        }
        None => [
            " ".repeat(CELL_WIDTH),
            format!("{:^width$}", cell.to_string(), width = CELL_WIDTH),
            " ".repeat(CELL_WIDTH),
        ],
    }
}

fn separator(left: char, middle: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for col in 0..BOARD_SIZE {
        if col > 0 {
            line.push(middle);
        }
        line += &"─".repeat(CELL_WIDTH);
    }
    line.push(right);
    line
}

/// Draws the board as a 3×3 grid of boxes.
///
/// An occupied cell shows the four side values around the owner tag (`H` or
/// `A`) and the card id; an empty cell shows its `row,col` coordinates.
pub fn visualize_board(board: &Board) -> String {
    let mut result = separator('╭', '┬', '╮');
    for row in 0..BOARD_SIZE {
        if row > 0 {
            result += "\n";
            result += &separator('├', '┼', '┤');
        }
        let cells: Vec<[String; 3]> = (0..BOARD_SIZE)
            .filter_map(|col| Cell::at(row, col))
            .map(|cell| cell_lines(board, cell))
            .collect();
        for line in 0..3 {
            result += "\n│";
            for lines in &cells {
                result += &lines[line];
                result += "│";
            }
        }
    }
    result += "\n";
    result += &separator('╰', '┴', '╯');
    result
}

/// Lists the cards of a hand, one per line.
pub fn visualize_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&visualize_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn draws_empty_and_occupied_cells() {
        let wolf = Card::new("a1", "Wolf", [3, 6, 2, 5]);
        let (board, _) = Board::new()
            .place_card(Cell::from_index(4), &wolf, Player::Human)
            .unwrap();
        let drawing = visualize_board(&board);
        let lines: Vec<&str> = drawing.lines().collect();
        // 3 rows of 3 lines, plus 4 separators
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "╭─────────┬─────────┬─────────╮");
        assert_eq!(lines[2], "│   0,0   │   0,1   │   0,2   │");
        assert_eq!(lines[5], "│         │    3    │         │");
        assert_eq!(lines[6], "│   1,0   │5 H:a1  6│   1,2   │");
        assert_eq!(lines[7], "│         │    2    │         │");
        assert_eq!(lines[12], "╰─────────┴─────────┴─────────╯");
        assert_eq!(board.to_string(), drawing);
    }

    #[test]
    fn lists_hand_cards() {
        let hand = [
            Card::new("a1", "Wolf", [3, 6, 2, 5]),
            Card::new("a5", "Imp", [2, 7, 4, 4]),
        ];
        assert_eq!(
            visualize_hand(&hand),
            "a1 Wolf T:3 R:6 B:2 L:5\na5 Imp T:2 R:7 B:4 L:4"
        );
    }
}

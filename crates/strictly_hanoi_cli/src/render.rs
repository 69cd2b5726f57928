//! Plain-text board rendering.

use strictly_hanoi::{Game, GameStatus, format_elapsed};

/// Draws the pegs side by side, smallest block on top, labels underneath.
pub fn render_board(game: &Game) -> String {
    let height = usize::from(game.block_count());
    let width = 2 * height + 1;
    let columns: Vec<Vec<u8>> = game.pegs().iter().map(|peg| peg.sizes_top_first()).collect();

    let mut lines = Vec::with_capacity(height + 2);
    for row in 0..height {
        let cells: Vec<String> = columns
            .iter()
            .map(|sizes| {
                let empty_rows = height - sizes.len();
                let cell = match row.checked_sub(empty_rows) {
                    Some(index) => "=".repeat(2 * usize::from(sizes[index]) - 1),
                    None => "|".to_string(),
                };
                center(&cell, width)
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }
    lines.push(vec!["-".repeat(width); columns.len()].join(" "));
    let labels: Vec<String> = game
        .pegs()
        .iter()
        .map(|peg| center(peg.label(), width))
        .collect();
    lines.push(labels.join(" ").trim_end().to_string());
    lines.join("\n")
}

/// One-line summary: phase, moves, elapsed time.
pub fn render_status(game: &Game) -> String {
    let phase = match game.status() {
        GameStatus::Idle => "idle (type `start`)",
        GameStatus::Running => "running",
        GameStatus::Finished => "solved",
    };
    format!(
        "Moves: {}  Time: {}  [{}]",
        game.move_count(),
        format_elapsed(game.elapsed()),
        phase
    )
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fresh_board() {
        let game = Game::new(3).unwrap();
        let expected = [
            "   =       |       |",
            "  ===      |       |",
            " =====     |       |",
            "------- ------- -------",
            "   A       B       C",
        ]
        .join("\n");
        assert_eq!(render_board(&game), expected);
    }

    #[test]
    fn test_render_after_move() {
        let mut game = Game::new(3).unwrap();
        game.start().unwrap();
        game.move_block(0, 2).unwrap();
        let board = render_board(&game);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[0], "   |       |       |");
        assert_eq!(lines[2], " =====     |       =");
    }

    #[test]
    fn test_status_line() {
        let game = Game::new(3).unwrap();
        assert_eq!(
            render_status(&game),
            "Moves: 0  Time: 00:00.000  [idle (type `start`)]"
        );
    }

    #[test]
    fn test_center() {
        assert_eq!(center("=", 5), "  =  ");
        assert_eq!(center("toolong", 3), "toolong");
    }
}

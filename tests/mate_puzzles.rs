use serde::Deserialize;

use woodpusher::board::{Board, BoardBuilder, Piece, Side, Square};

#[derive(Deserialize)]
struct PuzzleSet {
    puzzles: Vec<Puzzle>,
}

#[derive(Deserialize)]
struct Puzzle {
    name: String,
    /// Eight rank strings, rank 8 first, in board-display characters.
    rows: Vec<String>,
    side: String,
}

fn board_from_puzzle(puzzle: &Puzzle) -> Board {
    let side = match puzzle.side.as_str() {
        "w" => Side::White,
        "b" => Side::Black,
        other => panic!("bad side '{other}' in puzzle '{}'", puzzle.name),
    };

    let mut builder = BoardBuilder::new().side_to_move(side);
    assert_eq!(puzzle.rows.len(), 8, "puzzle '{}' needs 8 ranks", puzzle.name);
    for (i, row) in puzzle.rows.iter().enumerate() {
        let rank = 7 - i;
        for (file, c) in row.chars().enumerate() {
            let piece = Piece::from_char(c)
                .unwrap_or_else(|| panic!("bad piece '{c}' in puzzle '{}'", puzzle.name));
            if piece.is_empty() {
                continue;
            }
            builder = builder.piece(Square::new(rank, file), piece);
        }
    }
    builder.build()
}

#[test]
fn mate_in_one_suite() {
    let data = include_str!("data/puzzles.json");
    let set: PuzzleSet = serde_json::from_str(data).expect("invalid puzzles.json");

    for puzzle in &set.puzzles {
        let mut board = board_from_puzzle(puzzle);

        let best = board
            .find_best_move(2)
            .unwrap_or_else(|| panic!("no move found for puzzle '{}'", puzzle.name));
        board.make_move(best);

        assert!(
            board.is_checkmate(),
            "puzzle '{}': {} does not mate",
            puzzle.name,
            best
        );
    }
}

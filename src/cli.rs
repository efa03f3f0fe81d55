//! Interactive terminal driver: human (White) against the engine (Black).
//!
//! Reads whitespace-separated long-algebraic move tokens from stdin,
//! reprompts on anything unparseable or illegal, and answers each human move
//! with a fixed-depth search. `quit` ends the session.

use std::io::{self, BufRead, Write};

use crate::board::{Board, MoveList};

/// Search depth used when the binary gets no depth argument.
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

/// Run the game loop until the game ends, `quit`, or stdin closes.
pub fn run_game_loop(depth: u32) -> io::Result<()> {
    let stdin = io::stdin();
    let mut board = Board::new();

    board.print_board();
    if report_game_over(&mut board) {
        return Ok(());
    }
    prompt()?;

    for line in stdin.lock().lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if token == "quit" {
                return Ok(());
            }

            let mv = match board.parse_move(token) {
                Ok(mv) => mv,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };

            board.make_move(mv);
            board.print_board();
            if report_game_over(&mut board) {
                return Ok(());
            }

            // engine reply
            let Some(reply) = board.find_best_move(depth) else {
                break;
            };
            println!("Engine plays {reply}");
            board.make_move(reply);
            board.print_board();
            if report_game_over(&mut board) {
                return Ok(());
            }
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("Your move: ");
    io::stdout().flush()
}

/// Announce checkmate or stalemate; true when the game is over.
fn report_game_over(board: &mut Board) -> bool {
    let mut moves = MoveList::new();
    board.generate_legal_moves(&mut moves);
    if !moves.is_empty() {
        return false;
    }

    if board.is_in_check() {
        println!("Checkmate! {} wins.", board.side_to_move.opponent());
    } else {
        println!("Stalemate.");
    }
    true
}

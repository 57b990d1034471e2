// Line-based driver for a board: one command per line, board printed after each.
// Commands: u/d/l/r or up/down/left/right to move, z/undo, reset/restart, q/0 to quit.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::core::{Board, BoardStatus, Direction, Occupant, TileKind, UserAction};
use crate::level::{
    symbol_for_tile, BOX_ON_GOAL_SYMBOL, BOX_SYMBOL, PLAYER_ON_GOAL_SYMBOL, PLAYER_SYMBOL,
};

pub const HELP_TEXT: &str = "Controls: u/d/l/r or up/down/left/right to move, z to undo, reset to restart, q to quit";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Help,
    Unknown,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionOutcome {
    Won { moves: usize },
    Quit,
    EndOfInput,
}

pub fn parse_command(line: &str) -> ConsoleInput {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "0" => ConsoleInput::Quit,
        "?" | "h" | "help" => ConsoleInput::Help,
        "u" | "up" => ConsoleInput::UserAction(UserAction::Move(Direction::Up)),
        "d" | "down" => ConsoleInput::UserAction(UserAction::Move(Direction::Down)),
        "l" | "left" => ConsoleInput::UserAction(UserAction::Move(Direction::Left)),
        "r" | "right" => ConsoleInput::UserAction(UserAction::Move(Direction::Right)),
        "z" | "undo" => ConsoleInput::UserAction(UserAction::Undo),
        "reset" | "restart" => ConsoleInput::UserAction(UserAction::Restart),
        _ => ConsoleInput::Unknown,
    }
}

pub fn render_board_to_string(board: &Board) -> String {
    let mut result = String::new();
    let mut row = 0;
    for (pos, kind) in board.tiles() {
        if pos.y != row {
            result.push('\n');
            row = pos.y;
        }
        let on_goal = kind == TileKind::Goal;
        let ch = match (board.occupant_at(&pos), on_goal) {
            (Some(Occupant::Player), false) => PLAYER_SYMBOL,
            (Some(Occupant::Player), true) => PLAYER_ON_GOAL_SYMBOL,
            (Some(Occupant::Box(_)), false) => BOX_SYMBOL,
            (Some(Occupant::Box(_)), true) => BOX_ON_GOAL_SYMBOL,
            (None, _) => symbol_for_tile(kind),
        };
        result.push(ch);
    }
    result.push('\n');
    result
}

fn render_status(board: &Board) -> String {
    let status = match board.status() {
        BoardStatus::Ready => "ready",
        BoardStatus::InPlay => "in play",
        BoardStatus::Won => "won",
    };
    format!(
        "{} | moves: {} | on goals: {}/{}",
        status,
        board.history().entries().len(),
        board.count_boxes_on_goals(),
        board.grid().goals().len()
    )
}

/// Feeds commands from `input` to `board` until the level is won, the user quits,
/// or input runs out.
pub fn run_session<R: BufRead, W: Write>(board: &mut Board, input: R, output: &mut W) -> io::Result<SessionOutcome> {
    write!(output, "{}", render_board_to_string(board))?;
    writeln!(output, "{}", HELP_TEXT)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            ConsoleInput::Quit => {
                writeln!(output, "Bye!")?;
                return Ok(SessionOutcome::Quit);
            }
            ConsoleInput::Help => writeln!(output, "{}", HELP_TEXT)?,
            ConsoleInput::Unknown => {
                warn!(command = line.trim(), "unknown command");
                writeln!(output, "Unknown command {:?}. {}", line.trim(), HELP_TEXT)?;
            }
            ConsoleInput::UserAction(action) => {
                let status = board.apply(action);
                write!(output, "{}", render_board_to_string(board))?;
                writeln!(output, "{}", render_status(board))?;
                if status == BoardStatus::Won {
                    let moves = board.history().entries().len();
                    info!(moves, "level won");
                    writeln!(output, "You win!")?;
                    return Ok(SessionOutcome::Won { moves });
                }
            }
        }
    }
    Ok(SessionOutcome::EndOfInput)
}

//! Line-based terminal front end.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rand::Rng;
use tic_tac_toe_ai::{Difficulty, ParseDifficultyError};

use crate::controller::{Command, Controller};
use crate::session::Snapshot;

const HELP: &str = "\
commands:
  0-8                     place your X on that cell
  reset                   start a new game
  reset-score             clear the score and start a new game
  difficulty <level>      easy, medium or hard (starts a new game)
  history                 list recorded moves
  clear-history           forget recorded moves
  help                    show this message
  quit                    leave";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum InputError {
    #[error("unknown command {input:?}, type `help` for the list")]
    Unknown { input: String },
    #[error("missing difficulty level (easy, medium or hard)")]
    MissingDifficulty,
    #[error(transparent)]
    Difficulty(#[from] ParseDifficultyError),
}

/// One line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Empty,
    Command(Command),
    History,
    ClearHistory,
    Help,
    Quit,
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(Input::Empty);
        };
        if let Ok(index) = first.parse::<usize>() {
            return Ok(Input::Command(Command::PlayerMoveRequested(index)));
        }
        let input = match first.to_ascii_lowercase().as_str() {
            "reset" | "r" => Input::Command(Command::Reset),
            "reset-score" => Input::Command(Command::ResetScore),
            "difficulty" | "d" => {
                let level = words.next().ok_or(InputError::MissingDifficulty)?;
                Input::Command(Command::SetDifficulty(level.parse::<Difficulty>()?))
            }
            "history" | "h" => Input::History,
            "clear-history" => Input::ClearHistory,
            "help" | "?" => Input::Help,
            "quit" | "exit" | "q" => Input::Quit,
            _ => {
                return Err(InputError::Unknown {
                    input: s.trim().to_string(),
                })
            }
        };
        Ok(input)
    }
}

pub fn render<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out, "{}", snapshot.board)?;
    if let Some(line) = snapshot.winning_line {
        writeln!(out, "winning line: {:?}", line)?;
    }
    writeln!(out, "{}", snapshot.status_line())?;
    writeln!(
        out,
        "score (you / computer / draws): {} / {} / {}   difficulty: {}",
        snapshot.score.player_wins,
        snapshot.score.opponent_wins,
        snapshot.score.draws,
        snapshot.difficulty
    )
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Lines that are not valid UTF-8 are decoded lossily and reported like any
/// other unknown command.
pub fn run<R, I, W>(controller: &mut Controller<R>, mut input: I, mut out: W) -> io::Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(out, "{}", HELP)?;
    render(&mut out, &controller.snapshot())?;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        match String::from_utf8_lossy(&buf).parse::<Input>() {
            Ok(Input::Empty) => continue,
            Ok(Input::Quit) => break,
            Ok(Input::Help) => writeln!(out, "{}", HELP)?,
            Ok(Input::History) => {
                for (n, record) in controller.history().iter().enumerate() {
                    writeln!(
                        out,
                        "{}. {} @ {} ({})",
                        n + 1,
                        record.mark,
                        record.index,
                        record.timestamp.format("%Y-%m-%d %H:%M:%S")
                    )?;
                }
            }
            Ok(Input::ClearHistory) => {
                controller.clear_history();
                writeln!(out, "history cleared")?;
            }
            Ok(Input::Command(command)) => {
                if let Err(err) = controller.handle(command) {
                    writeln!(out, "invalid move: {}", err)?;
                }
                render(&mut out, &controller.snapshot())?;
            }
            Err(err) => writeln!(out, "{}", err)?,
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_moves_and_commands() {
        assert_eq!(
            "4".parse::<Input>(),
            Ok(Input::Command(Command::PlayerMoveRequested(4)))
        );
        assert_eq!(
            " 12 ".parse::<Input>(),
            Ok(Input::Command(Command::PlayerMoveRequested(12)))
        );
        assert_eq!("Reset".parse::<Input>(), Ok(Input::Command(Command::Reset)));
        assert_eq!(
            "reset-score".parse::<Input>(),
            Ok(Input::Command(Command::ResetScore))
        );
        assert_eq!(
            "difficulty hard".parse::<Input>(),
            Ok(Input::Command(Command::SetDifficulty(Difficulty::Hard)))
        );
        assert_eq!("".parse::<Input>(), Ok(Input::Empty));
        assert_eq!("quit".parse::<Input>(), Ok(Input::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            "difficulty".parse::<Input>(),
            Err(InputError::MissingDifficulty)
        );
        assert!(matches!(
            "difficulty extreme".parse::<Input>(),
            Err(InputError::Difficulty(_))
        ));
        assert_eq!(
            "jump".parse::<Input>(),
            Err(InputError::Unknown {
                input: "jump".to_string()
            })
        );
    }
}

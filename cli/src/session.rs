use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use sweeper_core::{Game, GameError, GameState};

use crate::input::{parse_coords, to_board_coords};
use crate::render::BoardView;

const PROMPT: &str = "Please enter the coordinates of the cell you would like to search: ";
const REENTER: &str = "Please reenter a valid input.";
const LOST: &str = "You've exploded! Please play again.";
const WON: &str = "You've disarmed the bombs! Congrats";

/// Prompts for moves until the game ends or input runs out, returns the last state.
pub fn play(game: &mut Game, input: impl BufRead, mut output: impl Write) -> Result<GameState> {
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            log::debug!("Input closed while the game was ongoing");
            writeln!(output)?;
            return Ok(game.state());
        };
        let line = line.context("Failed to read move")?;

        let coords = match parse_coords(&line) {
            Ok(coords) => coords,
            Err(err) => {
                log::debug!("Malformed input {:?}: {}", line, err);
                writeln!(output, "{REENTER}")?;
                continue;
            }
        };

        let result = to_board_coords(coords)
            .ok_or(GameError::InvalidCoords)
            .and_then(|coords| game.apply_move(coords));
        let snapshot = match result {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::info!("Move {:?} rejected: {}", coords, err);
                writeln!(output, "{REENTER}")?;
                continue;
            }
        };

        writeln!(output, "{}", BoardView(&snapshot))?;
        match snapshot.state {
            GameState::Ongoing => {}
            GameState::Lost => {
                writeln!(output, "{LOST}")?;
                return Ok(GameState::Lost);
            }
            GameState::Won => {
                writeln!(output, "{WON}")?;
                return Ok(GameState::Won);
            }
        }
    }
}

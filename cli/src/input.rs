use sweeper_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Expected `row,col` but got {0} value(s)")]
    TokenCount(usize),
    #[error("`{0}` is not a number")]
    NotANumber(String),
}

/// Parses a `row,col` pair. Values may be negative or large, board bounds are checked separately.
pub fn parse_coords(line: &str) -> Result<(i64, i64), InputError> {
    let tokens: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::TokenCount(tokens.len()));
    };
    Ok((parse_number(row)?, parse_number(col)?))
}

fn parse_number(token: &str) -> Result<i64, InputError> {
    token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))
}

/// Narrows parsed values to board coordinates, `None` when they cannot be on any board.
pub fn to_board_coords((row, col): (i64, i64)) -> Option<Coord2> {
    Some((Coord::try_from(row).ok()?, Coord::try_from(col).ok()?))
}

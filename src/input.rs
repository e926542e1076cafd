use std::io::Read;

use anyhow::Context;

use crate::error::InputError;
use crate::puzzle::Board;

/// Parses `N` followed by `N²` tile values, row-major, separated by any
/// whitespace.
pub fn parse_board(text: &str) -> Result<Board, InputError> {
    let mut tokens = text.split_whitespace();
    let size: usize = match tokens.next() {
        Some(token) => parse_token(token)?,
        None => return Err(InputError::MissingSize),
    };

    let cells = tokens
        .map(parse_token::<u32>)
        .collect::<Result<Vec<_>, _>>()?;
    Board::new(size, cells)
}

/// Reads the whole of `reader` and parses it with [`parse_board`].
pub fn read_board<R: Read>(mut reader: R) -> anyhow::Result<Board> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Failed to read puzzle input")?;
    let board = parse_board(&text).context("Invalid puzzle input")?;
    Ok(board)
}

fn parse_token<T: std::str::FromStr>(token: &str) -> Result<T, InputError> {
    token.parse().map_err(|_| InputError::InvalidToken {
        token: token.to_string(),
    })
}

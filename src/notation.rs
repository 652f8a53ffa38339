//! Move text encoding: `<file><rank>-<file><rank>` with an optional
//! promotion letter, e.g. `e2-e4` or `b7-b8n`.

use crate::board::{PieceKind, Square};
use crate::error::MoveError;
use crate::movegen::Move;

pub fn parse_move(text: &str) -> Result<Move, MoveError> {
    let malformed = || MoveError::MalformedMoveSyntax(text.to_string());
    let trimmed = text.trim();

    let (from, rest) = trimmed.split_once('-').ok_or_else(malformed)?;
    let from: Square = from.parse().map_err(|_| malformed())?;

    if !rest.is_ascii() || !(2..=3).contains(&rest.len()) {
        return Err(malformed());
    }
    let (to, suffix) = rest.split_at(2);
    let to: Square = to.parse().map_err(|_| malformed())?;

    let promotion = match suffix.chars().next() {
        None => None,
        Some(c) => Some(PieceKind::from_letter(c).ok_or_else(malformed)?),
    };

    Ok(Move { from, to, promotion })
}

pub fn format_move(mv: &Move) -> String {
    mv.to_string()
}

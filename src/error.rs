use thiserror::Error;

use crate::board::{Color, PieceKind, Square};
use crate::game::GameStatus;

/// Why a move was not applied. None of these leave the game changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("malformed move '{0}', expected e.g. e2-e4 or e7-e8q")]
    MalformedMoveSyntax(String),
    #[error("no piece on {0}")]
    NoPieceAtOrigin(Square),
    #[error("it is {expected}'s turn, the piece on {square} is {found}")]
    WrongTurn {
        square: Square,
        expected: Color,
        found: Color,
    },
    #[error("a {kind} cannot move from {from} to {to}")]
    IllegalForPieceKind {
        kind: PieceKind,
        from: Square,
        to: Square,
    },
    #[error("moving from {from} to {to} leaves the {color} king in check")]
    LeavesKingInCheck {
        color: Color,
        from: Square,
        to: Square,
    },
    #[error("the game is over ({0})")]
    GameOver(GameStatus),
}

/// Why a hand-built position cannot start a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("the {0} king is missing")]
    MissingKing(Color),
    #[error("{color} has {count} kings")]
    ExtraKing { color: Color, count: usize },
    #[error("pawn on back rank square {0}")]
    PawnOnBackRank(Square),
    #[error("{0} is in check but it is not their move")]
    OpponentInCheck(Color),
}

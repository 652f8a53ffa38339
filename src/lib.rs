pub mod board;
pub mod cli;
pub mod console;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;

pub use board::{Board, Color, Piece, PieceKind, Square};
pub use error::{MoveError, PositionError};
pub use game::{GameState, GameStatus};
pub use movegen::{Move, MoveValidator};

use std::fmt;

use log::{debug, info};

use crate::board::{Board, Color, Piece, PieceKind, Square};
use crate::error::{MoveError, PositionError};
use crate::movegen::{is_king_in_check, Move, MoveValidator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        write!(f, "{}", s)
    }
}

/// A game in progress. The only way to change the board is `apply_move`.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    ply: u32,
    fullmove_number: u32,
    status: GameStatus,
    validator: MoveValidator,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Color::White,
            ply: 0,
            fullmove_number: 1,
            status: GameStatus::InProgress,
            validator: MoveValidator::new(),
        }
    }

    /// Starts a game from a hand-built position. The position must have one
    /// king per color, no pawns on the first or last rank, and the side not
    /// to move must not be in check.
    pub fn from_position(board: Board, side_to_move: Color) -> Result<Self, PositionError> {
        for color in [Color::White, Color::Black] {
            match board.count(Piece::new(PieceKind::King, color)) {
                0 => return Err(PositionError::MissingKing(color)),
                1 => {}
                count => return Err(PositionError::ExtraKing { color, count }),
            }
        }

        if let Some((square, _)) = board
            .pieces()
            .find(|(sq, p)| p.kind == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7))
        {
            return Err(PositionError::PawnOnBackRank(square));
        }

        let waiting = side_to_move.opposite();
        if is_king_in_check(&board, waiting) {
            return Err(PositionError::OpponentInCheck(waiting));
        }

        let mut game = Self {
            board,
            side_to_move,
            ply: 0,
            fullmove_number: 1,
            status: GameStatus::InProgress,
            validator: MoveValidator::new(),
        };
        game.status = game.classify();
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get_piece_at(square)
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Half-moves applied since the game was created.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Starts at 1 and increases after each black move.
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn is_in_check(&self) -> bool {
        matches!(self.status, GameStatus::Check | GameStatus::Checkmate)
    }

    /// The side that delivered mate, if the game ended that way.
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Checkmate => Some(self.side_to_move.opposite()),
            _ => None,
        }
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.validator.legal_moves(&self.board, self.side_to_move)
    }

    /// Validates `mv` against the current position and commits it. On error
    /// the game is left exactly as it was.
    pub fn apply_move(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            debug!("rejected {}: game already ended in {}", mv, self.status);
            return Err(MoveError::GameOver(self.status));
        }

        if let Err(err) = self.validator.validate(&self.board, self.side_to_move, &mv) {
            debug!("rejected {}: {}", mv, err);
            return Err(err);
        }

        self.board.make_move(mv);
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.opposite();
        self.ply += 1;
        self.status = self.classify();

        debug!("applied {}, {} to move, {}", mv, self.side_to_move, self.status);
        match self.status {
            GameStatus::Checkmate => info!("checkmate, {} wins", self.side_to_move.opposite()),
            GameStatus::Stalemate => info!("stalemate, {} has no legal move", self.side_to_move),
            _ => {}
        }
        Ok(self.status)
    }

    /// Parses move text and applies it.
    pub fn apply_text(&mut self, text: &str) -> Result<GameStatus, MoveError> {
        let mv: Move = text.parse()?;
        self.apply_move(mv)
    }

    fn classify(&self) -> GameStatus {
        let in_check = is_king_in_check(&self.board, self.side_to_move);
        let can_move = self.validator.has_legal_move(&self.board, self.side_to_move);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::InProgress,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Color, PieceKind, Square};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn new_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::notation::parse_move(s)
    }
}

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1), (1, -1), (-1, 1), (-1, -1),
    (1, 0), (-1, 0), (0, 1), (0, -1),
];

type TargetFn = fn(&Board, Square, Color, &mut Vec<Square>);

/// Move-generation routine for each kind, in `PieceKind` declaration order.
const GENERATORS: [TargetFn; 6] = [
    pawn_targets,
    knight_targets,
    bishop_targets,
    rook_targets,
    queen_targets,
    king_targets,
];

fn generator_for(kind: PieceKind) -> TargetFn {
    GENERATORS[kind as usize]
}

fn can_land(board: &Board, square: Square, color: Color) -> bool {
    match board.get_piece_at(square) {
        Some(piece) => piece.color != color,
        None => true,
    }
}

fn pawn_targets(board: &Board, from: Square, color: Color, targets: &mut Vec<Square>) {
    let dir = color.forward();

    if let Some(one) = from.offset(0, dir).filter(|&sq| board.is_empty(sq)) {
        targets.push(one);
        if from.rank() == color.pawn_rank() {
            if let Some(two) = from.offset(0, 2 * dir).filter(|&sq| board.is_empty(sq)) {
                targets.push(two);
            }
        }
    }

    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir) {
            if matches!(board.get_piece_at(to), Some(piece) if piece.color != color) {
                targets.push(to);
            }
        }
    }
}

fn step_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    targets: &mut Vec<Square>,
) {
    for &(df, dr) in offsets {
        if let Some(to) = from.offset(df, dr) {
            if can_land(board, to, color) {
                targets.push(to);
            }
        }
    }
}

fn slide_targets(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    targets: &mut Vec<Square>,
) {
    for &(df, dr) in directions {
        let mut current = from;
        while let Some(to) = current.offset(df, dr) {
            match board.get_piece_at(to) {
                None => targets.push(to),
                Some(piece) => {
                    if piece.color != color {
                        targets.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

fn knight_targets(board: &Board, from: Square, color: Color, targets: &mut Vec<Square>) {
    step_targets(board, from, color, &KNIGHT_OFFSETS, targets);
}

fn bishop_targets(board: &Board, from: Square, color: Color, targets: &mut Vec<Square>) {
    slide_targets(board, from, color, &DIAGONALS, targets);
}

fn rook_targets(board: &Board, from: Square, color: Color, targets: &mut Vec<Square>) {
    slide_targets(board, from, color, &ORTHOGONALS, targets);
}

fn queen_targets(board: &Board, from: Square, color: Color, targets: &mut Vec<Square>) {
    slide_targets(board, from, color, &ALL_DIRECTIONS, targets);
}

fn king_targets(board: &Board, from: Square, color: Color, targets: &mut Vec<Square>) {
    step_targets(board, from, color, &KING_OFFSETS, targets);
}

/// Squares the piece on `from` could reach, ignoring the safety of its own
/// king. Empty when `from` holds no piece.
pub fn pseudo_legal_targets(board: &Board, from: Square) -> Vec<Square> {
    let mut targets = Vec::new();
    if let Some(piece) = board.get_piece_at(from) {
        generator_for(piece.kind)(board, from, piece.color, &mut targets);
    }
    targets
}

/// Whether any piece of `attacker` could move onto `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    board
        .pieces_of(attacker)
        .any(|(from, _)| pseudo_legal_targets(board, from).contains(&square))
}

pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    }
}

/// Decides legality of moves against a borrowed board. Holds no state
/// between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveValidator;

impl MoveValidator {
    pub fn new() -> Self {
        MoveValidator
    }

    pub fn validate(&self, board: &Board, side_to_move: Color, mv: &Move) -> Result<(), MoveError> {
        let piece = board
            .get_piece_at(mv.from)
            .ok_or(MoveError::NoPieceAtOrigin(mv.from))?;

        if piece.color != side_to_move {
            return Err(MoveError::WrongTurn {
                square: mv.from,
                expected: side_to_move,
                found: piece.color,
            });
        }

        let illegal = MoveError::IllegalForPieceKind {
            kind: piece.kind,
            from: mv.from,
            to: mv.to,
        };
        if !pseudo_legal_targets(board, mv.from).contains(&mv.to) {
            return Err(illegal);
        }

        let promotes = piece.kind == PieceKind::Pawn && mv.to.rank() == piece.color.promotion_rank();
        match mv.promotion {
            Some(kind) if !promotes || !kind.is_promotion_target() => return Err(illegal),
            _ => {}
        }

        let mut scratch = board.clone();
        scratch.make_move(*mv);
        if is_king_in_check(&scratch, side_to_move) {
            return Err(MoveError::LeavesKingInCheck {
                color: side_to_move,
                from: mv.from,
                to: mv.to,
            });
        }

        Ok(())
    }

    pub fn is_legal(&self, board: &Board, side_to_move: Color, mv: &Move) -> bool {
        self.validate(board, side_to_move, mv).is_ok()
    }

    pub fn reason_if_illegal(&self, board: &Board, side_to_move: Color, mv: &Move) -> Option<MoveError> {
        self.validate(board, side_to_move, mv).err()
    }

    /// Every legal move for `side`. A promoting pawn move appears once per
    /// promotion kind.
    pub fn legal_moves(&self, board: &Board, side: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, piece) in board.pieces_of(side) {
            for to in pseudo_legal_targets(board, from) {
                if piece.kind == PieceKind::Pawn && to.rank() == side.promotion_rank() {
                    for kind in PieceKind::PROMOTIONS {
                        moves.push(Move::new_promotion(from, to, kind));
                    }
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves.retain(|mv| self.is_legal(board, side, mv));
        moves
    }

    pub fn has_legal_move(&self, board: &Board, side: Color) -> bool {
        board.pieces_of(side).any(|(from, _)| {
            pseudo_legal_targets(board, from)
                .into_iter()
                .any(|to| self.is_legal(board, side, &Move::new(from, to)))
        })
    }
}

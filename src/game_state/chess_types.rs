//! Shared value types for the rules engine.
//!
//! Teams, piece kinds, board coordinates, the game status code and the
//! render-facing `PieceInfo` projection all live here so every other module
//! can import them from one place.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::undo_state::UndoState;

/// `(col, row)`, zero-based, origin at a1.
pub type BoardLocation = (i8, i8);

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Light,
    Dark,
}

impl Team {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::Light => 0,
            Team::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::Light => Team::Dark,
            Team::Dark => Team::Light,
        }
    }

    /// Row direction pawns of this team advance in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::Light => 1,
            Team::Dark => -1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Light => write!(f, "light"),
            Team::Dark => write!(f, "dark"),
        }
    }
}

/// Piece kind (team is carried separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_TYPES: [PieceType; 6] = [
    PieceType::Pawn,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
    PieceType::King,
];

impl PieceType {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceType::Pawn => 0,
            PieceType::Knight => 1,
            PieceType::Bishop => 2,
            PieceType::Rook => 3,
            PieceType::Queen => 4,
            PieceType::King => 5,
        }
    }

    /// Rooks, bishops and queens move along lines and can be blocked.
    #[inline]
    pub const fn is_sliding(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    /// Lower-case letter used by layouts and move text.
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "pawn"),
            PieceType::Knight => write!(f, "knight"),
            PieceType::Bishop => write!(f, "bishop"),
            PieceType::Rook => write!(f, "rook"),
            PieceType::Queen => write!(f, "queen"),
            PieceType::King => write!(f, "king"),
        }
    }
}

/// Render-only projection of a piece: no position, no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceInfo {
    pub team: Team,
    pub piece_type: PieceType,
}

impl PieceInfo {
    /// Layout letter: upper case for Light, lower case for Dark.
    pub fn to_char(&self) -> char {
        let c = self.piece_type.to_char();
        match self.team {
            Team::Light => c.to_ascii_uppercase(),
            Team::Dark => c,
        }
    }
}

/// Column-major `[col][row]` snapshot handed to renderers.
pub type BoardSnapshot = Vec<Vec<Option<PieceInfo>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatusCode {
    InProgress,
    LightWon,
    DarkWon,
    Stalemate,
}

impl GameStatusCode {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatusCode::InProgress)
    }

    pub const fn won_by(team: Team) -> Self {
        match team {
            Team::Light => GameStatusCode::LightWon,
            Team::Dark => GameStatusCode::DarkWon,
        }
    }

    /// Result token used by move records.
    pub const fn result_token(self) -> &'static str {
        match self {
            GameStatusCode::InProgress => "*",
            GameStatusCode::LightWon => "1-0",
            GameStatusCode::DarkWon => "0-1",
            GameStatusCode::Stalemate => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatusCode::InProgress => write!(f, "in progress"),
            GameStatusCode::LightWon => write!(f, "light won"),
            GameStatusCode::DarkWon => write!(f, "dark won"),
            GameStatusCode::Stalemate => write!(f, "stalemate"),
        }
    }
}

//! The fundamental and simple types of `gridmax_engine`.

use std::convert::TryFrom;
use std::fmt::{self, Display, Write};
use std::ops::{Add, Mul, Not};
use std::str::FromStr;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////
pub const NUM_FILES: usize = 8; // a, b, c, d, e, f, g, h
pub const NUM_ROWS: usize = 8; // row 0 is rank 8, row 7 is rank 1
pub const NUM_CELLS: usize = NUM_FILES * NUM_ROWS;

// Every cell occupied, every cell emitting all 8 neighbors.
// No candidate generator on this board produces more than this.
pub const MAX_MOVES: usize = NUM_CELLS * 8;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Type alias for search depth, in plies.
pub type PlyKind = u8;

// Type alias to make changing Cp inner type easy if needed.
pub type CpKind = i32;

/// Score of a position. Larger is better for the maximizing side of a search.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Cp(pub CpKind);

/// Side can represent the owner of a piece, or a player.
/// First owns the uppercase pieces, Second the lowercase ones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    First,
    Second,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    pub(crate) side: Side,
    pub(crate) piece_kind: PieceKind,
}

/// Content of a single board cell. `None` is an empty cell.
pub type Cell = Option<Piece>;

/// Move
/// Origin and destination grid coordinates of a single ply.
/// Coordinates are signed so that validators can see and reject out of range
/// values; the type itself does not enforce `0..8`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    pub from_file: i8,
    pub from_row: i8,
    pub to_file: i8,
    pub to_row: i8,
}

//////////////////////
/// Implementations //
//////////////////////

impl Cp {
    /// Below or equal to every score an evaluator can return.
    pub const MIN: Cp = Self(CpKind::MIN);
    pub const MAX: Cp = Self(CpKind::MAX);
}

impl Add for Cp {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl Mul<CpKind> for Cp {
    type Output = Cp;
    fn mul(self, rhs: CpKind) -> Self::Output {
        Self(self.0 * rhs)
    }
}
impl Display for Cp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Cp::MIN => f.write_str("-inf"),
            Cp::MAX => f.write_str("+inf"),
            Cp(value) => write!(f, "{:+}", value),
        }
    }
}

impl Not for Side {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

impl PieceKind {
    /// Single letter code, as the First side's uppercase piece.
    pub const fn to_char(&self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }
}

impl Piece {
    pub const fn new(side: Side, piece_kind: PieceKind) -> Self {
        Piece { side, piece_kind }
    }
    /// Immutable Getters.
    pub const fn side(&self) -> Side {
        self.side
    }
    pub const fn piece_kind(&self) -> PieceKind {
        self.piece_kind
    }

    pub const fn to_char(&self) -> char {
        match self.side {
            Side::First => self.piece_kind.to_char(),
            Side::Second => self.piece_kind.to_char().to_ascii_lowercase(),
        }
    }
}

impl From<Piece> for char {
    fn from(piece: Piece) -> Self {
        piece.to_char()
    }
}

impl TryFrom<char> for Piece {
    type Error = error::Error;
    fn try_from(value: char) -> error::Result<Self> {
        let side = match value.is_ascii_uppercase() {
            true => Side::First,
            false => Side::Second,
        };
        let piece_kind = match value.to_ascii_uppercase() {
            'K' => PieceKind::King,
            'Q' => PieceKind::Queen,
            'R' => PieceKind::Rook,
            'B' => PieceKind::Bishop,
            'N' => PieceKind::Knight,
            'P' => PieceKind::Pawn,
            _ => {
                return Err((
                    ErrorKind::ParsePieceMalformed,
                    format!("{value:?} is not in KQRBNPkqrbnp"),
                )
                    .into())
            }
        };
        Ok(Piece { side, piece_kind })
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(char::from(*self))
    }
}

/// Returns true if `value` is a valid file or row index.
pub const fn in_bounds(value: i8) -> bool {
    0 <= value && value < NUM_FILES as i8
}

impl Move {
    pub const fn new(from_file: i8, from_row: i8, to_file: i8, to_row: i8) -> Self {
        Self {
            from_file,
            from_row,
            to_file,
            to_row,
        }
    }

    /// Returns true if all four coordinates lie on the board.
    pub const fn in_bounds(&self) -> bool {
        in_bounds(self.from_file)
            && in_bounds(self.from_row)
            && in_bounds(self.to_file)
            && in_bounds(self.to_row)
    }
}

fn file_from_char(ch: char) -> Option<i8> {
    match ch {
        'a'..='h' => Some((ch as u8 - b'a') as i8),
        _ => None,
    }
}

fn row_from_char(ch: char) -> Option<i8> {
    match ch {
        '1'..='8' => Some(NUM_ROWS as i8 - (ch as u8 - b'0') as i8),
        _ => None,
    }
}

const fn file_to_char(file: i8) -> char {
    (b'a' + file as u8) as char
}

const fn row_to_char(row: i8) -> char {
    (b'0' + (NUM_ROWS as i8 - row) as u8) as char
}

/// Move ::= <file><rank><file><rank>, for example `e2e4`.
impl FromStr for Move {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let mut chars = s.chars();
        let (Some(f0), Some(r0), Some(f1), Some(r1), None) = (
            chars.next(),
            chars.next(),
            chars.next(),
            chars.next(),
            chars.next(),
        ) else {
            return Err((
                ErrorKind::InvalidMoveFormat,
                format!("{:?} is not 4 characters", s),
            )
                .into());
        };

        let malformed = || error::Error::from((ErrorKind::InvalidMoveFormat, s.escape_debug()));
        Ok(Self {
            from_file: file_from_char(f0).ok_or_else(malformed)?,
            from_row: row_from_char(r0).ok_or_else(malformed)?,
            to_file: file_from_char(f1).ok_or_else(malformed)?,
            to_row: row_from_char(r1).ok_or_else(malformed)?,
        })
    }
}

/// # Example
/// Move { from_file: 4, from_row: 6, to_file: 4, to_row: 4 } -> `e2e4`.
/// Moves with any coordinate off the board display as `0000`.
impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.in_bounds() {
            return f.write_str("0000");
        }
        f.write_char(file_to_char(self.from_file))?;
        f.write_char(row_to_char(self.from_row))?;
        f.write_char(file_to_char(self.to_file))?;
        f.write_char(row_to_char(self.to_row))
    }
}

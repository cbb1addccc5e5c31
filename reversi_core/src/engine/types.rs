use core::fmt;
use core::str::FromStr;

/// 手番（石の色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 先手。
    Black,
    /// 後手。
    White,
}

impl Color {
    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl fmt::Display for Color {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Black => f.write_str("Black"),
            Self::White => f.write_str("White"),
        }
    }
}

/// 1マスの状態。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum CellState {
    /// 黒石。
    Black,
    /// 空きマス。
    #[default]
    Empty,
    /// 白石。
    White,
}

impl CellState {
    /// 石の色を返す（空きマスなら `None`）。
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Black => Some(Color::Black),
            Self::Empty => None,
            Self::White => Some(Color::White),
        }
    }
}

impl From<Color> for CellState {
    #[inline]
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }
}

impl From<Option<Color>> for CellState {
    #[inline]
    fn from(piece: Option<Color>) -> Self {
        piece.map_or(Self::Empty, Self::from)
    }
}

/// 盤面上のマス（`row * 8 + col` の0..=63インデックス）。
///
/// 範囲外の座標は構築できない。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Square(
    /// `row * 8 + col` に対応する0..=63の値。
    u8,
);

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 8;

    /// そのマスを表すビット（`u64`）を返す。
    #[inline]
    #[must_use]
    pub fn bit(self) -> u64 {
        let one = u64::MIN.wrapping_add(1);
        let shift = u32::from(self.0);

        one.checked_shl(shift).unwrap_or(u64::MIN)
    }

    /// 列（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// インデックスから `Square` を生成する（範囲チェックなし）。
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// 盤面座標（row, col）から `Square` を生成する。範囲外なら `None`。
    #[inline]
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row >= Self::BOARD_LEN || col >= Self::BOARD_LEN {
            return None;
        }

        let mut idx = match row.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        idx = match idx.checked_add(col) {
            Some(value) => value,
            None => return None,
        };

        Some(Self(idx))
    }

    /// 0..=63 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 行（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }
}

impl fmt::Display for Square {
    /// `d3` 形式（列の英字＋行番号）で表示する。
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a'.wrapping_add(self.col()));
        let rank = self.row().wrapping_add(1);
        write!(f, "{file}{rank}")
    }
}

/// `Square` の文字列解析に失敗した理由。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SquareParseError {
    /// 列が `a`..=`h` ではない。
    #[error("invalid column {0:?} (expected a-h)")]
    Column(char),
    /// 長さが2文字ではない。
    #[error("expected a square like `d3`, got {0:?}")]
    Length(String),
    /// 行が `1`..=`8` ではない。
    #[error("invalid row {0:?} (expected 1-8)")]
    Row(char),
}

impl FromStr for Square {
    type Err = SquareParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut chars = text.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
            _ => return Err(SquareParseError::Length(text.to_owned())),
        };

        if !('a'..='h').contains(&file) {
            return Err(SquareParseError::Column(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(SquareParseError::Row(rank));
        }

        let col = match u8::try_from(file) {
            Ok(value) => value.wrapping_sub(b'a'),
            Err(_conversion_error) => return Err(SquareParseError::Column(file)),
        };
        let row = match u8::try_from(rank) {
            Ok(value) => value.wrapping_sub(b'1'),
            Err(_conversion_error) => return Err(SquareParseError::Row(rank)),
        };

        Self::from_row_col(row, col).ok_or_else(|| SquareParseError::Length(text.to_owned()))
    }
}

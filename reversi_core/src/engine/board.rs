use core::fmt;
use core::str::FromStr;

use crate::engine::types::{CellState, Color, Square};

/// 0列目（col = 0）のマスク。
const FILE_A: u64 = 0x0101_0101_0101_0101;

/// 7列目（col = 7）のマスク。
const FILE_H: u64 = 0x8080_8080_8080_8080;

/// 盤面の拡張（Kogge-Stone）を行う反復回数。
const SPREAD_STEPS: u8 = 5;

/// 1ビット分のシフト量。
const SHIFT_1: u32 = 1;

/// 7ビット分のシフト量。
const SHIFT_7: u32 = 7;

/// 8ビット分のシフト量。
const SHIFT_8: u32 = 8;

/// 9ビット分のシフト量。
const SHIFT_9: u32 = 9;

/// 初期配置（黒）の1つ目: (3, 4)。
const START_BLACK_0: u32 = 28;

/// 初期配置（黒）の2つ目: (4, 3)。
const START_BLACK_1: u32 = 35;

/// 初期配置（白）の1つ目: (3, 3)。
const START_WHITE_0: u32 = 27;

/// 初期配置（白）の2つ目: (4, 4)。
const START_WHITE_1: u32 = 36;

/// `u64` の 1 を表す値。
const U64_ONE: u64 = u64::MIN.wrapping_add(1);

/// 全64マス。
pub const CELL_COUNT: u32 = 64;

/// 8×8 の盤面（色ごとのビットボード）。
///
/// ビット `row * 8 + col` がマス (row, col) に対応する。
/// 値型（`Copy`）なので、着手は常に新しい盤面を返し、元の盤面は変化しない。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 黒石のビットボード。
    black: u64,
    /// 白石のビットボード。
    white: u64,
}

impl Board {
    /// 合法手 `square` に `color` の石を置き、挟んだ石を反転させた盤面を返す。
    ///
    /// # Panics
    ///
    /// `square` が `color` の合法手でない場合（空きマスでない、または1石も返せない）。
    /// 合法性は呼び出し側（`legal_moves` / `GameState`）が保証する前提。
    #[inline]
    #[must_use]
    pub fn apply_move(self, square: Square, color: Color) -> Self {
        let (player, opponent) = self.sides(color);
        let flipped = flips(player, opponent, square);
        assert!(
            self.occupied() & square.bit() == u64::MIN && flipped != u64::MIN,
            "apply_move: {square} is not a legal move for {color}"
        );

        self.with_flips(square, color, flipped)
    }

    /// 黒石のビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn black(self) -> u64 {
        self.black
    }

    /// 指定色の石のビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn bits_of(self, color: Color) -> u64 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// 指定マスの状態を返す。
    #[inline]
    #[must_use]
    pub fn cell(self, square: Square) -> CellState {
        CellState::from(self.piece_at(square))
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub const fn counts(self) -> (u32, u32) {
        (self.black.count_ones(), self.white.count_ones())
    }

    /// 空きマスの数を返す。
    #[inline]
    #[must_use]
    pub const fn empty_count(self) -> u32 {
        CELL_COUNT.wrapping_sub(self.occupied().count_ones())
    }

    /// 行優先の 8×8 配列から盤面を生成する。
    #[inline]
    #[must_use]
    pub fn from_cells(cells: [[CellState; 8]; 8]) -> Self {
        let mut black = u64::MIN;
        let mut white = u64::MIN;

        for (row, line) in (u8::MIN..).zip(cells.iter()) {
            for (col, cell) in (u8::MIN..).zip(line.iter()) {
                let bit = match Square::from_row_col(row, col) {
                    Some(square) => square.bit(),
                    None => continue,
                };
                match *cell {
                    CellState::Black => black |= bit,
                    CellState::White => white |= bit,
                    CellState::Empty => {}
                }
            }
        }

        Self { black, white }
    }

    /// 初期盤面を返す。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        let b0 = match U64_ONE.checked_shl(START_BLACK_0) {
            Some(value) => value,
            None => u64::MIN,
        };
        let b1 = match U64_ONE.checked_shl(START_BLACK_1) {
            Some(value) => value,
            None => u64::MIN,
        };
        let w0 = match U64_ONE.checked_shl(START_WHITE_0) {
            Some(value) => value,
            None => u64::MIN,
        };
        let w1 = match U64_ONE.checked_shl(START_WHITE_1) {
            Some(value) => value,
            None => u64::MIN,
        };

        Self {
            black: b0 | b1,
            white: w0 | w1,
        }
    }

    /// `color` が `square` に打てるかどうかを返す。
    ///
    /// 空きマスであり、8方向のいずれかで相手の石の連続を自分の石で挟めるときに合法。
    #[inline]
    #[must_use]
    pub fn is_legal(self, square: Square, color: Color) -> bool {
        if self.occupied() & square.bit() != u64::MIN {
            return false;
        }

        let (player, opponent) = self.sides(color);
        flips(player, opponent, square) != u64::MIN
    }

    /// 指定色の合法手ビットボードを返す。
    #[inline]
    #[must_use]
    pub fn legal_mask(self, color: Color) -> u64 {
        let (player, opponent) = self.sides(color);
        legal_moves(player, opponent)
    }

    /// 指定色の合法手を行優先（row 昇順、col 昇順）で返す。
    #[inline]
    #[must_use]
    pub fn legal_moves(self, color: Color) -> Vec<Square> {
        squares(self.legal_mask(color)).collect()
    }

    /// 盤面の占有ビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn occupied(self) -> u64 {
        self.black | self.white
    }

    /// 指定マスの石を返す。
    #[inline]
    #[must_use]
    pub fn piece_at(self, square: Square) -> Option<Color> {
        let mask = square.bit();
        if self.black & mask != u64::MIN {
            Some(Color::Black)
        } else if self.white & mask != u64::MIN {
            Some(Color::White)
        } else {
            None
        }
    }

    /// （自分、相手）の順にビットボードを返す。
    const fn sides(self, color: Color) -> (u64, u64) {
        match color {
            Color::Black => (self.black, self.white),
            Color::White => (self.white, self.black),
        }
    }

    /// 合法性を確認せずに石を置き、挟んだ石を反転させた盤面を返す（探索用）。
    ///
    /// 1石も挟めないマスでも石は置かれる。
    #[inline]
    #[must_use]
    pub(crate) fn simulate_move(self, square: Square, color: Color) -> Self {
        let (player, opponent) = self.sides(color);
        let flipped = flips(player, opponent, square);
        self.with_flips(square, color, flipped)
    }

    /// 白石のビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn white(self) -> u64 {
        self.white
    }

    /// `square` に石を置き、`flipped` を `color` に塗り替えた盤面を返す。
    fn with_flips(self, square: Square, color: Color, flipped: u64) -> Self {
        let (player, opponent) = self.sides(color);
        let next_player = player | square.bit() | flipped;
        let next_opponent = opponent & !flipped;

        match color {
            Color::Black => Self {
                black: next_player,
                white: next_opponent,
            },
            Color::White => Self {
                black: next_opponent,
                white: next_player,
            },
        }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    /// 8行×8文字（`X` = 黒、`O` = 白、`.` = 空き）で表示する。
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in u8::MIN..Square::BOARD_LEN {
            for col in u8::MIN..Square::BOARD_LEN {
                let cell = Square::from_row_col(row, col).map_or(CellState::Empty, |sq| self.cell(sq));
                let ch = match cell {
                    CellState::Black => 'X',
                    CellState::White => 'O',
                    CellState::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// `Board` の文字列解析に失敗した理由。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BoardParseError {
    /// 行の長さが8ではない。
    #[error("row {row} has {found} cells, expected 8")]
    RowLength {
        /// 見つかったマス数。
        found: usize,
        /// 行番号（0始まり）。
        row: usize,
    },
    /// 行数が8ではない。
    #[error("board has {0} rows, expected 8")]
    RowCount(usize),
    /// 解釈できない文字。
    #[error("unknown cell {ch:?} at row {row}, col {col}")]
    UnknownCell {
        /// 問題の文字。
        ch: char,
        /// 列番号（0始まり）。
        col: usize,
        /// 行番号（0始まり）。
        row: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// `Display` と同じ形式を読む。`B`/`W`/`-` も受け付け、空行は無視する。
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != 8 {
            return Err(BoardParseError::RowCount(lines.len()));
        }

        let mut cells = [[CellState::Empty; 8]; 8];
        for (row, (line, target)) in lines.iter().zip(cells.iter_mut()).enumerate() {
            let found = line.chars().count();
            if found != 8 {
                return Err(BoardParseError::RowLength { found, row });
            }

            for (col, (ch, cell)) in line.chars().zip(target.iter_mut()).enumerate() {
                *cell = match ch {
                    'X' | 'x' | 'B' | 'b' => CellState::Black,
                    'O' | 'o' | 'W' | 'w' => CellState::White,
                    '.' | '-' => CellState::Empty,
                    _ => return Err(BoardParseError::UnknownCell { ch, col, row }),
                };
            }
        }

        Ok(Self::from_cells(cells))
    }
}

/// ビットボードに立っているマスを下位ビット（行優先）から順に返す。
#[inline]
pub fn squares(mut bits: u64) -> impl Iterator<Item = Square> {
    core::iter::from_fn(move || {
        if bits == u64::MIN {
            return None;
        }

        let index = u8::try_from(bits.trailing_zeros()).unwrap_or(u8::MAX);
        bits &= bits.wrapping_sub(1);
        Some(Square::from_index_unchecked(index))
    })
}

/// 反転させる石の集合を返す（全方向）。
fn flips(player: u64, opponent: u64, mv: Square) -> u64 {
    let mv_bb = mv.bit();

    flips_in_dir(player, opponent, mv_bb, shift_e)
        | flips_in_dir(player, opponent, mv_bb, shift_n)
        | flips_in_dir(player, opponent, mv_bb, shift_ne)
        | flips_in_dir(player, opponent, mv_bb, shift_nw)
        | flips_in_dir(player, opponent, mv_bb, shift_s)
        | flips_in_dir(player, opponent, mv_bb, shift_se)
        | flips_in_dir(player, opponent, mv_bb, shift_sw)
        | flips_in_dir(player, opponent, mv_bb, shift_w)
}

/// 反転させる石の集合を返す（1方向）。
///
/// 隣接する相手の石の連続が盤内の自分の石で終端されている場合のみ、その連続を返す。
fn flips_in_dir<F: Fn(u64) -> u64>(player: u64, opponent: u64, mv: u64, shift: F) -> u64 {
    let x1 = shift(mv) & opponent;
    if x1 == u64::MIN {
        return u64::MIN;
    }

    let x = spread(x1, opponent, &shift);
    if shift(x) & player != u64::MIN {
        x
    } else {
        u64::MIN
    }
}

/// 合法手の集合を返す。
fn legal_moves(player: u64, opponent: u64) -> u64 {
    let occupied = player | opponent;
    let empty = !occupied;

    moves_in_dir(player, opponent, empty, shift_e)
        | moves_in_dir(player, opponent, empty, shift_n)
        | moves_in_dir(player, opponent, empty, shift_ne)
        | moves_in_dir(player, opponent, empty, shift_nw)
        | moves_in_dir(player, opponent, empty, shift_s)
        | moves_in_dir(player, opponent, empty, shift_se)
        | moves_in_dir(player, opponent, empty, shift_sw)
        | moves_in_dir(player, opponent, empty, shift_w)
}

/// ある方向における合法手の集合を返す。
fn moves_in_dir<F: Fn(u64) -> u64>(player: u64, opponent: u64, empty: u64, shift: F) -> u64 {
    let x1 = shift(player) & opponent;
    if x1 == u64::MIN {
        return u64::MIN;
    }

    let x = spread(x1, opponent, &shift);
    shift(x) & empty
}

/// 8近傍のいずれかに `bb` の石があるマスの集合を返す。
#[inline]
#[must_use]
pub fn neighbours(bb: u64) -> u64 {
    shift_e(bb)
        | shift_n(bb)
        | shift_ne(bb)
        | shift_nw(bb)
        | shift_s(bb)
        | shift_se(bb)
        | shift_sw(bb)
        | shift_w(bb)
}

/// 東方向（col + 1）へシフトする。
#[inline]
const fn shift_e(bb: u64) -> u64 {
    (bb & !FILE_H).wrapping_shl(SHIFT_1)
}

/// 北方向（row - 1）へシフトする。
#[inline]
const fn shift_n(bb: u64) -> u64 {
    bb.wrapping_shr(SHIFT_8)
}

/// 北東方向（row - 1, col + 1）へシフトする。
#[inline]
const fn shift_ne(bb: u64) -> u64 {
    (bb & !FILE_H).wrapping_shr(SHIFT_7)
}

/// 北西方向（row - 1, col - 1）へシフトする。
#[inline]
const fn shift_nw(bb: u64) -> u64 {
    (bb & !FILE_A).wrapping_shr(SHIFT_9)
}

/// 南方向（row + 1）へシフトする。
#[inline]
const fn shift_s(bb: u64) -> u64 {
    bb.wrapping_shl(SHIFT_8)
}

/// 南東方向（row + 1, col + 1）へシフトする。
#[inline]
const fn shift_se(bb: u64) -> u64 {
    (bb & !FILE_H).wrapping_shl(SHIFT_9)
}

/// 南西方向（row + 1, col - 1）へシフトする。
#[inline]
const fn shift_sw(bb: u64) -> u64 {
    (bb & !FILE_A).wrapping_shl(SHIFT_7)
}

/// 西方向（col - 1）へシフトする。
#[inline]
const fn shift_w(bb: u64) -> u64 {
    (bb & !FILE_A).wrapping_shr(SHIFT_1)
}

/// Kogge-Stone法の拡張処理。
fn spread<F: Fn(u64) -> u64>(mut x: u64, opponent: u64, shift: F) -> u64 {
    for _ in u8::MIN..SPREAD_STEPS {
        x |= shift(x) & opponent;
    }
    x
}

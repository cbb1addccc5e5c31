use crate::engine::board::{Board, squares};
use crate::engine::types::{Color, Square};

/// マスごとの位置評価値（行優先）。
///
/// 角を高く、角の隣（X/C打ち）を低く、辺を内側よりやや高く評価する。
pub const WEIGHTS: [[i32; 8]; 8] = [
    [100, -10, 10, 5, 5, 10, -10, 100],
    [-10, -20, 1, 1, 1, 1, -20, -10],
    [10, 1, 5, 2, 2, 5, 1, 10],
    [5, 1, 2, 1, 1, 2, 1, 5],
    [5, 1, 2, 1, 1, 2, 1, 5],
    [10, 1, 5, 2, 2, 5, 1, 10],
    [-10, -20, 1, 1, 1, 1, -20, -10],
    [100, -10, 10, 5, 5, 10, -10, 100],
];

/// `perspective` から見た盤面の評価値（自石の重み合計 - 相手石の重み合計）。
#[inline]
#[must_use]
pub fn score(board: Board, perspective: Color) -> i32 {
    let own = weight_sum(board.bits_of(perspective));
    let other = weight_sum(board.bits_of(perspective.opponent()));
    own.wrapping_sub(other)
}

/// マスの位置評価値を返す。
#[inline]
#[must_use]
pub fn weight(square: Square) -> i32 {
    WEIGHTS
        .get(usize::from(square.row()))
        .and_then(|row| row.get(usize::from(square.col())))
        .copied()
        .unwrap_or(0_i32)
}

/// ビットボードに含まれるマスの重み合計。
fn weight_sum(bits: u64) -> i32 {
    squares(bits).fold(0_i32, |acc, square| acc.wrapping_add(weight(square)))
}

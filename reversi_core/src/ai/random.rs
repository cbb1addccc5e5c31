use rand::Rng;

use crate::ai::types::Ai;
use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// 合法手から一様ランダムに1手を選択するAI（初級）。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent<R> {
    /// 乱数生成器。
    rng: R,
}

impl<R: Rng> Agent<R> {
    /// 乱数生成器を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Ai for Agent<R> {
    #[inline]
    fn select_move(&mut self, _board: Board, _color: Color, legal_moves: &[Square]) -> Option<Square> {
        pick_uniform(&mut self.rng, legal_moves)
    }
}

/// `moves` から一様ランダムに1つ選ぶ（空なら `None`）。
#[inline]
pub(crate) fn pick_uniform<R: Rng + ?Sized>(rng: &mut R, moves: &[Square]) -> Option<Square> {
    if moves.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..moves.len());
    moves.get(index).copied()
}

use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// 手を選択するAI。
pub trait Ai {
    /// `color` の手番で、合法手 `legal_moves`（行優先）から1手を選ぶ。
    ///
    /// 合法手が空なら `None` を返す（呼び出し側は着手しない）。
    fn select_move(&mut self, board: Board, color: Color, legal_moves: &[Square]) -> Option<Square>;
}

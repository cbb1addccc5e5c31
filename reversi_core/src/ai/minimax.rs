use crate::ai::types::Ai;
use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// 探索の制限（深さ、候補手の生成方法）と統計。
mod limits;
/// ミニマックス探索本体。
mod search;

pub use limits::{Candidates, SearchLimits};
pub use search::{advanced_move, candidates, minimax};

/// ルートの各合法手を打った後に探索する深さ（ply）。
pub const SEARCH_DEPTH: u8 = 3;

/// ミニマックス探索を行うAI（上級）。
#[derive(Copy, Clone, Debug, Default)]
#[non_exhaustive]
pub struct Agent {
    /// 探索の制限。
    limits: SearchLimits,
}

impl Agent {
    /// 探索の制限を返す。
    #[inline]
    #[must_use]
    pub const fn limits(self) -> SearchLimits {
        self.limits
    }

    /// 既定の制限（深さ3、隣接マス候補）で初期化する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limits: SearchLimits::new(SEARCH_DEPTH, Candidates::Adjacent),
        }
    }

    /// 探索の制限を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: Board, color: Color, legal_moves: &[Square]) -> Option<Square> {
        advanced_move(board, color, legal_moves, self.limits)
    }
}

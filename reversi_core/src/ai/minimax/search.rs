use crate::ai::eval::score;
use crate::engine::board::{Board, neighbours, squares};
use crate::engine::types::{Color, Square};

use super::limits::{Candidates, SearchLimits, SearchStats};

/// 探索実行に必要なコンテキスト。
pub(super) struct SearchContext {
    /// 探索制限。
    limits: SearchLimits,
    /// 末端評価の視点（ルートで手を選ぶ側）。
    perspective: Color,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchContext {
    /// 探索コンテキストを生成する。
    pub(super) fn new(limits: SearchLimits, perspective: Color) -> Self {
        Self {
            limits,
            perspective,
            stats: SearchStats::default(),
        }
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// 上級AIの着手選択。
///
/// 各合法手を打った盤面から相手番・最小化ノードとして `limits.depth()` の探索を行い、
/// 評価値が最大の手を返す（同値なら先に現れた手）。合法手が空なら `None`。
#[inline]
#[must_use]
pub fn advanced_move(
    board: Board,
    color: Color,
    legal_moves: &[Square],
    limits: SearchLimits,
) -> Option<Square> {
    let mut ctx = SearchContext::new(limits, color);
    let mut best: Option<(i32, Square)> = None;

    for &square in legal_moves {
        // 合法手に対しては apply_move と同じ盤面になる。
        let next = board.simulate_move(square, color);
        let value = search(next, limits.depth(), color.opponent(), false, &mut ctx);
        tracing::trace!(%square, value, "root candidate evaluated");

        if best.is_none_or(|(best_value, _)| value > best_value) {
            best = Some((value, square));
        }
    }

    let stats = ctx.stats();
    match best {
        Some((value, square)) => {
            tracing::debug!(
                player = %color,
                %square,
                value,
                nodes = stats.nodes(),
                leaves = stats.leaves(),
                "minimax search finished"
            );
            Some(square)
        }
        None => None,
    }
}

/// 候補手のビットボードを返す。
pub(super) fn candidate_mask(board: Board, to_move: Color, policy: Candidates) -> u64 {
    match policy {
        Candidates::Adjacent => neighbours(board.occupied()) & !board.occupied(),
        Candidates::Legal => board.legal_mask(to_move),
    }
}

/// 探索ノードで展開する候補手を行優先で返す。
///
/// `Candidates::Adjacent` は合法性を問わず、石に隣接する空きマスをすべて返す。
#[inline]
#[must_use]
pub fn candidates(board: Board, to_move: Color, policy: Candidates) -> Vec<Square> {
    squares(candidate_mask(board, to_move, policy)).collect()
}

/// 既定の制限でのミニマックス値を返す。
///
/// 深さ0、または候補手がないノードでは `perspective` から見た `score` を返す。
/// 最大化ノードは子の最大値、最小化ノードは子の最小値（枝刈りなし）。
#[inline]
#[must_use]
pub fn minimax(board: Board, depth: u8, to_move: Color, maximizing: bool, perspective: Color) -> i32 {
    let mut ctx = SearchContext::new(SearchLimits::default(), perspective);
    search(board, depth, to_move, maximizing, &mut ctx)
}

/// ミニマックス本体。子局面は盤面のコピーに対して生成する。
pub(super) fn search(
    board: Board,
    depth: u8,
    to_move: Color,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.stats.inc_nodes();

    if depth == u8::MIN {
        ctx.stats.inc_leaves();
        return score(board, ctx.perspective);
    }

    let mask = candidate_mask(board, to_move, ctx.limits.candidates());
    if mask == u64::MIN {
        ctx.stats.inc_leaves();
        return score(board, ctx.perspective);
    }

    let next_depth = depth.wrapping_sub(1);
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for square in squares(mask) {
        let child = board.simulate_move(square, to_move);
        let value = search(child, next_depth, to_move.opponent(), !maximizing, ctx);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

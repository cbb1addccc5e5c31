use rand::Rng;

use crate::ai::eval::weight;
use crate::ai::random::pick_uniform;
use crate::ai::types::Ai;
use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// 位置評価値が最大の手を選ぶ確率。
pub const GREEDY_PROBABILITY: f64 = 0.8;

/// 位置評価値の高い手を確率的に選ぶAI（中級）。
///
/// 確率 `greedy_probability` で評価値最大の手、残りで一様ランダムな手を選ぶ。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent<R> {
    /// 最善手を選ぶ確率（0.0..=1.0）。
    greedy_probability: f64,
    /// 乱数生成器。
    rng: R,
}

impl<R: Rng> Agent<R> {
    /// 既定の確率（`GREEDY_PROBABILITY`）で初期化する。
    #[inline]
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self {
            greedy_probability: GREEDY_PROBABILITY,
            rng,
        }
    }

    /// 最善手を選ぶ確率を指定して初期化する。範囲外の値は 0.0..=1.0 に丸める。
    #[inline]
    #[must_use]
    pub fn with_probability(rng: R, greedy_probability: f64) -> Self {
        Self {
            greedy_probability: greedy_probability.clamp(0.0, 1.0),
            rng,
        }
    }
}

impl<R: Rng> Ai for Agent<R> {
    #[inline]
    fn select_move(&mut self, _board: Board, _color: Color, legal_moves: &[Square]) -> Option<Square> {
        if legal_moves.is_empty() {
            return None;
        }

        if self.rng.gen_bool(self.greedy_probability) {
            best_by_weight(legal_moves)
        } else {
            pick_uniform(&mut self.rng, legal_moves)
        }
    }
}

/// 位置評価値が最大の手を返す（同値なら先に現れた手）。
#[inline]
#[must_use]
pub fn best_by_weight(moves: &[Square]) -> Option<Square> {
    let mut best: Option<(i32, Square)> = None;
    for &square in moves {
        let value = weight(square);
        if best.is_none_or(|(best_value, _)| value > best_value) {
            best = Some((value, square));
        }
    }

    best.map(|(_, square)| square)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    use super::{Agent, best_by_weight};
    use crate::ai::types::Ai as _;
    use crate::engine::board::Board;
    use crate::engine::types::{Color, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::from_row_col(row, col).unwrap_or_else(|| panic!("({row}, {col}) is off board"))
    }

    #[test]
    fn best_by_weight_prefers_heavier_square_then_first() {
        // (1,1)=-20, (0,2)=10, (2,0)=10
        let moves = [sq(1, 1), sq(0, 2), sq(2, 0)];
        assert_eq!(best_by_weight(&moves), Some(sq(0, 2)));
        assert_eq!(best_by_weight(&[sq(1, 1), sq(0, 0)]), Some(sq(0, 0)));
        assert_eq!(best_by_weight(&[]), None);
    }

    #[test]
    fn greedy_branch_is_taken_with_low_draw() {
        // StepRng(0) は gen_bool(0.8) で常に true。
        let moves = [sq(1, 1), sq(0, 2), sq(2, 0)];
        let mut agent = Agent::new(StepRng::new(0, 0));
        assert_eq!(
            agent.select_move(Board::initial(), Color::Black, &moves),
            Some(sq(0, 2))
        );
    }

    #[test]
    fn probability_bounds_select_branch() {
        let moves = [sq(1, 1), sq(0, 2), sq(2, 0)];

        let mut always = Agent::with_probability(StdRng::seed_from_u64(3), 1.0);
        for _ in 0..16 {
            assert_eq!(
                always.select_move(Board::initial(), Color::Black, &moves),
                Some(sq(0, 2))
            );
        }

        // 確率0ではランダム側のみ。十分な試行で全候補が現れる。
        let mut never = Agent::with_probability(StdRng::seed_from_u64(3), 0.0);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let picked = never.select_move(Board::initial(), Color::Black, &moves);
            let position = moves.iter().position(|&square| Some(square) == picked);
            assert!(position.is_some(), "random branch must pick a listed move");
            if let Some(slot) = position.and_then(|index| seen.get_mut(index)) {
                *slot = true;
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn empty_moves_yield_none() {
        let mut agent = Agent::new(StepRng::new(0, 0));
        assert_eq!(agent.select_move(Board::initial(), Color::Black, &[]), None);
    }
}

use core::fmt;
use core::str::FromStr;

use rand::Rng;

use crate::ai::types::Ai as _;
use crate::engine::game::GameState;
use crate::engine::types::Square;

/// 盤面の位置評価。
pub mod eval;
/// 位置評価値に基づく確率的な貪欲AI（中級）。
pub mod greedy;
/// ミニマックス探索AI（上級）。
pub mod minimax;
/// 合法手からランダムに1手選ぶAI（初級）。
pub mod random;
pub mod types;

/// CPU の強さ。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Difficulty {
    /// 上級（ミニマックス探索）。
    Advanced,
    /// 初級（一様ランダム）。
    #[default]
    Beginner,
    /// 中級（位置評価の貪欲法＋ランダム）。
    Intermediate,
}

impl Difficulty {
    /// すべての難易度（弱い順）。
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// 表示・入力に使う名前を返す。
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Advanced => "advanced",
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
        }
    }
}

impl fmt::Display for Difficulty {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `Difficulty` の文字列解析に失敗した。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown difficulty {0:?} (expected beginner, intermediate or advanced)")]
pub struct DifficultyParseError(String);

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DifficultyParseError(name.to_owned()))
    }
}

/// 現手番の CPU の手を `difficulty` に応じて選ぶ。
///
/// 終局している、または合法手がない場合は `None`（呼び出し側は着手しない）。
#[inline]
pub fn select_cpu_move<R: Rng + ?Sized>(
    state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Square> {
    if state.is_game_over() {
        return None;
    }

    let board = state.board();
    let color = state.current_player();
    let legal_moves = state.valid_moves();

    match difficulty {
        Difficulty::Advanced => minimax::Agent::new().select_move(board, color, legal_moves),
        Difficulty::Beginner => random::Agent::new(rng).select_move(board, color, legal_moves),
        Difficulty::Intermediate => greedy::Agent::new(rng).select_move(board, color, legal_moves),
    }
}

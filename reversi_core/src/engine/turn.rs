use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// 手番解決の結果。
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Turn {
    /// 双方に合法手がなく終局。
    GameOver,
    /// 手番側に合法手がなく、相手が続けて打つ（暗黙のパス）。
    Pass {
        /// 合法手（行優先）。
        moves: Vec<Square>,
        /// 続けて打つ側。
        player: Color,
    },
    /// 通常どおり `player` の手番。
    Play {
        /// 合法手（行優先）。
        moves: Vec<Square>,
        /// 手番。
        player: Color,
    },
}

impl Turn {
    /// 次に打つ側を返す（終局なら `None`）。
    #[inline]
    #[must_use]
    pub const fn player(&self) -> Option<Color> {
        match *self {
            Self::GameOver => None,
            Self::Pass { player, .. } | Self::Play { player, .. } => Some(player),
        }
    }
}

/// `mover` が着手した直後の盤面から次の手番を決める。
///
/// 相手に合法手があれば相手番、なければ `mover` が続けて打ち、
/// 双方とも打てなければ終局。
#[inline]
#[must_use]
pub fn advance(board: Board, mover: Color) -> Turn {
    resolve(board, mover.opponent())
}

/// `to_move` の手番として盤面を解決する（打てなければパスを適用する）。
#[inline]
#[must_use]
pub fn resolve(board: Board, to_move: Color) -> Turn {
    let moves = board.legal_moves(to_move);
    if !moves.is_empty() {
        return Turn::Play {
            moves,
            player: to_move,
        };
    }

    let other = to_move.opponent();
    let other_moves = board.legal_moves(other);
    if other_moves.is_empty() {
        return Turn::GameOver;
    }

    Turn::Pass {
        moves: other_moves,
        player: other,
    }
}

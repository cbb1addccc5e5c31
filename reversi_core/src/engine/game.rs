use core::cmp::Ordering;

use crate::engine::board::Board;
use crate::engine::turn::{self, Turn};
use crate::engine::types::{Color, Square};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局（双方とも打てない）。
    GameOver {
        /// 黒の石数。
        black: u32,
        /// 白の石数。
        white: u32,
    },
    /// 進行中。
    InProgress,
}

/// 着手の適用に失敗した理由。いずれも状態は変化しない。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    #[error("the game is already over")]
    GameOver,
    /// 指定マスが現手番の合法手ではない。
    #[error("{square} is not a legal move")]
    IllegalMove {
        /// 指定されたマス。
        square: Square,
    },
    /// 座標が盤外。
    #[error("({row}, {col}) is off the board")]
    OutOfBounds {
        /// 列。
        col: u8,
        /// 行。
        row: u8,
    },
}

/// 1局の状態（盤面、手番、合法手、終局フラグ、石数）。
///
/// 着手は `self` を変更せず、後続の状態を新しく返す。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    /// 黒の石数。
    black_count: u32,
    /// 現在の盤面。
    board: Board,
    /// 手番。終局後は最後に打った側のまま。
    current_player: Color,
    /// 終局しているか。
    game_over: bool,
    /// 現手番の合法手（行優先）。終局後は空。
    valid_moves: Vec<Square>,
    /// 白の石数。
    white_count: u32,
}

impl GameState {
    /// 黒の石数を返す。
    #[inline]
    #[must_use]
    pub const fn black_count(&self) -> u32 {
        self.black_count
    }

    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> Board {
        self.board
    }

    /// 手番を返す。
    #[inline]
    #[must_use]
    pub const fn current_player(&self) -> Color {
        self.current_player
    }

    /// 任意の盤面と手番から状態を組み立てる。
    ///
    /// `to_move` に合法手がなければその場でパスし、双方打てなければ終局状態になる。
    #[inline]
    #[must_use]
    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self::resolved(board, to_move, turn::resolve(board, to_move))
    }

    /// 初期状態（中央4石、黒番）を返す。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        let board = Board::initial();
        let (black_count, white_count) = board.counts();

        Self {
            black_count,
            board,
            current_player: Color::Black,
            game_over: false,
            valid_moves: board.legal_moves(Color::Black),
            white_count,
        }
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// 現手番が `square` に打った後の状態を返す。
    ///
    /// # Errors
    ///
    /// - `PlayError::GameOver`: すでに終局している場合
    /// - `PlayError::IllegalMove`: `square` が `valid_moves` に含まれない場合
    #[inline]
    pub fn play(&self, square: Square) -> Result<Self, PlayError> {
        if self.game_over {
            return Err(PlayError::GameOver);
        }

        if !self.valid_moves.contains(&square) {
            return Err(PlayError::IllegalMove { square });
        }

        let mover = self.current_player;
        let board = self.board.apply_move(square, mover);
        tracing::debug!(%square, player = %mover, "move applied");

        Ok(Self::resolved(board, mover, turn::advance(board, mover)))
    }

    /// 初期状態に戻した状態を返す。
    #[inline]
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::initial()
    }

    /// 手番解決の結果から状態を組み立てる。`fallback` は終局時に残す手番。
    fn resolved(board: Board, fallback: Color, next: Turn) -> Self {
        let (black_count, white_count) = board.counts();
        let (current_player, valid_moves, game_over) = match next {
            Turn::Play { moves, player } => (player, moves, false),
            Turn::Pass { moves, player } => {
                tracing::debug!(passed = %player.opponent(), "no legal move, turn passes");
                (player, moves, false)
            }
            Turn::GameOver => {
                tracing::debug!(black = black_count, white = white_count, "game over");
                (fallback, Vec::new(), true)
            }
        };

        Self {
            black_count,
            board,
            current_player,
            game_over,
            valid_moves,
            white_count,
        }
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        if self.game_over {
            return Status::GameOver {
                black: self.black_count,
                white: self.white_count,
            };
        }

        Status::InProgress
    }

    /// 行・列で指定したマスに打った後の状態を返す。
    ///
    /// # Errors
    ///
    /// `play` のエラーに加え、座標が盤外なら `PlayError::OutOfBounds` を返す。
    #[inline]
    pub fn submit_move(&self, row: u8, col: u8) -> Result<Self, PlayError> {
        match Square::from_row_col(row, col) {
            Some(square) => self.play(square),
            None => Err(PlayError::OutOfBounds { col, row }),
        }
    }

    /// 現手番の合法手（行優先）を返す。
    #[inline]
    #[must_use]
    pub fn valid_moves(&self) -> &[Square] {
        &self.valid_moves
    }

    /// 白の石数を返す。
    #[inline]
    #[must_use]
    pub const fn white_count(&self) -> u32 {
        self.white_count
    }

    /// 勝者を返す（進行中または引き分けなら `None`）。
    #[inline]
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        if !self.game_over {
            return None;
        }

        match self.black_count.cmp(&self.white_count) {
            Ordering::Greater => Some(Color::Black),
            Ordering::Less => Some(Color::White),
            Ordering::Equal => None,
        }
    }
}

impl Default for GameState {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

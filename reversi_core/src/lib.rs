//! Reversi (Othello) core logic.
//!
//! このクレートはゲーム進行を管理する `engine` と、CPU の手を選択する `ai` を提供します。
//! 状態遷移はすべて純粋関数で、手番の管理や CPU を呼ぶタイミングは呼び出し側（`reversi_cli` など）が決めます。

#![forbid(unsafe_code)]

/// ゲームルール・盤面・進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;

pub use ai::{Difficulty, select_cpu_move};
pub use engine::{GameState, PlayError, Square};

/// 盤面表現と合法手判定/着手（ビットボード）の実装。
pub mod board;
/// ゲーム進行（状態遷移、終局判定など）の実装。
pub mod game;
/// 着手後の手番解決（パス、終局）。
pub mod turn;
pub mod types;

pub type Board = board::Board;
pub type CellState = types::CellState;
pub type Color = types::Color;
pub type GameState = game::GameState;
pub type GameStatus = game::Status;
pub type PlayError = game::PlayError;
pub type Square = types::Square;
pub type Turn = turn::Turn;

//! 結合テスト: CPU同士の対戦が終局まで進み、各局面で不変条件が保たれることを確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;
    use reversi_core::engine::board::CELL_COUNT;
    use reversi_core::engine::{Board, Color, GameState, GameStatus, Square};
    use reversi_core::{Difficulty, select_cpu_move};

    /// 盤面全体の不変条件を検査する。
    fn assert_state_invariants(state: &GameState) {
        let board = state.board();
        assert_eq!(
            state.black_count() + state.white_count() + board.empty_count(),
            CELL_COUNT,
            "stone counts must cover the board"
        );
        assert_eq!((state.black_count(), state.white_count()), board.counts());

        let black_moves = board.legal_moves(Color::Black);
        let white_moves = board.legal_moves(Color::White);
        assert_eq!(
            state.is_game_over(),
            black_moves.is_empty() && white_moves.is_empty(),
            "game over iff neither side can move"
        );

        if state.is_game_over() {
            assert!(state.valid_moves().is_empty());
        } else {
            assert_eq!(
                state.valid_moves(),
                board.legal_moves(state.current_player()).as_slice()
            );
        }
    }

    /// ビットボードの合法手生成と1マスずつの判定が一致することを検査する。
    fn assert_generator_matches_rule(board: Board) {
        for color in [Color::Black, Color::White] {
            let by_rule: Vec<Square> = (0..8)
                .flat_map(|row| (0..8).filter_map(move |col| Square::from_row_col(row, col)))
                .filter(|&square| board.is_legal(square, color))
                .collect();
            assert_eq!(board.legal_moves(color), by_rule, "{color}\n{board}");
        }
    }

    /// 1局を最後まで進め、終局時の状態を返す。
    fn play_game(black: Difficulty, white: Difficulty, seed: u64) -> GameState {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::initial();

        // 1手ごとに石が1つ増えるので、60手以内に必ず終局する。
        for _turn in 0_u16..64 {
            assert_state_invariants(&state);
            assert_generator_matches_rule(state.board());

            let level = match state.current_player() {
                Color::Black => black,
                Color::White => white,
                _ => black,
            };
            let Some(square) = select_cpu_move(&state, level, &mut rng) else {
                break;
            };
            assert!(
                state.valid_moves().contains(&square),
                "{level} chose {square}, which is not legal"
            );

            let occupied_before = state.board().occupied();
            let next = state.play(square);
            assert!(next.is_ok(), "play must succeed, got={next:?}");
            state = match next {
                Ok(value) => value,
                Err(_err) => return state,
            };

            // 石は取り除かれない。
            let occupied_after = state.board().occupied();
            assert_eq!(occupied_before & occupied_after, occupied_before);
            assert_eq!(occupied_after.count_ones(), occupied_before.count_ones() + 1);
        }

        assert_state_invariants(&state);
        state
    }

    /// 終局していることと、結果の整合を確認する。
    fn assert_finished(state: &GameState) {
        let status = state.status();
        assert!(
            matches!(status, GameStatus::GameOver { .. }),
            "game did not finish, status={status:?}"
        );
        let expected_winner = match state.black_count().cmp(&state.white_count()) {
            core::cmp::Ordering::Greater => Some(Color::Black),
            core::cmp::Ordering::Less => Some(Color::White),
            core::cmp::Ordering::Equal => None,
        };
        assert_eq!(state.winner(), expected_winner);
    }

    /// `beginner` 同士で終局する。
    #[test]
    fn beginner_vs_beginner_finishes() {
        for seed in [0_u64, 1, 42, 4242] {
            assert_finished(&play_game(Difficulty::Beginner, Difficulty::Beginner, seed));
        }
    }

    /// `intermediate` と `beginner` の対戦が終局する。
    #[test]
    fn intermediate_vs_beginner_finishes() {
        assert_finished(&play_game(Difficulty::Intermediate, Difficulty::Beginner, 7));
        assert_finished(&play_game(Difficulty::Beginner, Difficulty::Intermediate, 8));
    }

    /// `advanced` と `beginner` の対戦が終局する。
    #[test]
    fn advanced_vs_beginner_finishes() {
        assert_finished(&play_game(Difficulty::Beginner, Difficulty::Advanced, 3));
    }

    /// 同じ seed なら同じ棋譜になる。
    #[test]
    fn seeded_games_are_reproducible() {
        let first = play_game(Difficulty::Intermediate, Difficulty::Beginner, 99);
        let second = play_game(Difficulty::Intermediate, Difficulty::Beginner, 99);
        assert_eq!(first, second);
    }

    /// 途中からリセットすると初期状態に戻る。
    #[test]
    fn reset_after_a_game_matches_initial_state() {
        let finished = play_game(Difficulty::Beginner, Difficulty::Beginner, 5);
        assert_eq!(finished.reset(), GameState::initial());
    }
}

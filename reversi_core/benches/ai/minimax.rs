//! `reversi_core::ai::minimax` の性能計測（深さ3の着手選択）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use reversi_core::ai::minimax::{Candidates, SearchLimits, SEARCH_DEPTH, advanced_move};
use reversi_core::{Difficulty, engine, select_cpu_move};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ進めた局面を返す（途中で終局した場合はその時点で止める）。
fn state_after_plies(plies: u16) -> engine::GameState {
    let mut rng = StdRng::seed_from_u64(u64::MIN.wrapping_add(1));
    let mut state = engine::GameState::initial();

    for _turn in u16::MIN..plies {
        let Some(square) = select_cpu_move(&state, Difficulty::Beginner, &mut rng) else {
            break;
        };
        state = match state.play(square) {
            Ok(value) => value,
            Err(_err) => break,
        };
    }

    state
}

/// 候補手の生成方法ごとに `advanced_move` を計測する。
fn bench_advanced_move(criterion: &mut Criterion) {
    let samples = [state_after_plies(4), state_after_plies(20), state_after_plies(44)];
    let policies = [("adjacent", Candidates::Adjacent), ("legal", Candidates::Legal)];
    let mut group = criterion.benchmark_group("ai/minimax/advanced_move");
    group.sample_size(10);

    for (name, policy) in policies {
        let limits = SearchLimits::new(SEARCH_DEPTH, policy);
        for (index, state) in samples.iter().enumerate() {
            let bench_id = BenchmarkId::new(name, index);
            group.bench_with_input(bench_id, state, |bench, input| {
                bench.iter(|| {
                    black_box(advanced_move(
                        input.board(),
                        input.current_player(),
                        input.valid_moves(),
                        limits,
                    ))
                });
            });
        }
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_advanced_move(&mut criterion);
    criterion.final_summary();
}

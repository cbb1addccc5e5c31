//! `reversi_core::ai::random` / `ai::greedy` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use reversi_core::ai::types::Ai as _;
use reversi_core::{Difficulty, ai, engine, select_cpu_move};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ進めた局面を返す（途中で終局した場合はその時点で止める）。
fn state_after_plies(plies: u16) -> engine::GameState {
    let mut rng = StdRng::seed_from_u64(u64::MIN);
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

/// ベンチ用に代表局面をいくつか用意する。
fn state_samples() -> [engine::GameState; 3] {
    [
        engine::GameState::initial(),
        state_after_plies(8),
        state_after_plies(24),
    ]
}

/// `random::Agent::select_move` を計測する。
fn bench_random(criterion: &mut Criterion) {
    let samples = state_samples();
    let mut group = criterion.benchmark_group("ai/random/select_move");

    for (index, state) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        group.bench_with_input(bench_id, state, |bench, input| {
            bench.iter_batched(
                || ai::random::Agent::new(StdRng::seed_from_u64(u64::MIN)),
                |mut agent| {
                    black_box(agent.select_move(
                        input.board(),
                        input.current_player(),
                        input.valid_moves(),
                    ))
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// `greedy::Agent::select_move` を計測する。
fn bench_greedy(criterion: &mut Criterion) {
    let samples = state_samples();
    let mut group = criterion.benchmark_group("ai/greedy/select_move");

    for (index, state) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        group.bench_with_input(bench_id, state, |bench, input| {
            bench.iter_batched(
                || ai::greedy::Agent::new(StdRng::seed_from_u64(u64::MIN)),
                |mut agent| {
                    black_box(agent.select_move(
                        input.board(),
                        input.current_player(),
                        input.valid_moves(),
                    ))
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_random(&mut criterion);
    bench_greedy(&mut criterion);
    criterion.final_summary();
}

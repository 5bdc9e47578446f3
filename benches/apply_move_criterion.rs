use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use swap_chess::{apply_move_with_report, legal_moves, ChessMove, GameState};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    seed: u64,
    plies: usize,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "seed_1",
        seed: 1,
        plies: 40,
    },
    BenchCase {
        name: "seed_7",
        seed: 7,
        plies: 40,
    },
    BenchCase {
        name: "seed_2024",
        seed: 2024,
        plies: 80,
    },
];

/// Plays the first legal move at every ply, stopping early if a side runs out.
fn play_first_moves(start: &GameState, plies: usize) -> (GameState, usize) {
    let mut game = start.clone();
    let mut played = 0;
    for _ in 0..plies {
        let Some(mv) = legal_moves(&game).into_iter().next() else {
            break;
        };
        apply_move_with_report(&mut game, mv).expect("generated move should apply");
        played += 1;
    }
    (game, played)
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let start = GameState::new_game();
    assert_eq!(legal_moves(&start).len(), 20, "start position move count");

    group.bench_function("start_position", |b| {
        b.iter(|| black_box(legal_moves(black_box(&start)).len()));
    });
    group.finish();
}

fn bench_apply_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let opening: ChessMove = "e2e4".parse().expect("benchmark move should parse");
    let start = GameState::new_game();
    group.bench_function("single_opening_move", |b| {
        b.iter(|| {
            let mut game = start.clone();
            let report = apply_move_with_report(&mut game, black_box(opening))
                .expect("e2e4 is legal from the start position");
            black_box(report)
        });
    });

    for case in CASES {
        let game = GameState::new_game_with_seed(case.seed);

        // Same seed, same game: the line length is fixed per case.
        let (_, played) = play_first_moves(&game, case.plies);
        let (_, replayed) = play_first_moves(&game, case.plies);
        assert_eq!(played, replayed, "nondeterministic line for {}", case.name);

        group.throughput(Throughput::Elements(played as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &played, |b, expected| {
            b.iter(|| {
                let (end, count) = play_first_moves(black_box(&game), case.plies);
                assert_eq!(count, *expected);
                black_box(end)
            });
        });
    }

    group.finish();
}

criterion_group!(apply_move_benches, bench_legal_moves, bench_apply_move);
criterion_main!(apply_move_benches);

use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_rules::game_state::chess_game::ChessGame;
use plum_rules::game_state::chess_types::Team;
use plum_rules::game_state::game_mode::LosAlamosChess;
use plum_rules::move_generation::perft::perft;
use plum_rules::utils::self_play::play_random_game;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    layout: &'static str,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "start",
        layout: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "kiwipete",
        layout: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "rook_endgame",
        layout: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        expected_nodes: &[14, 191, 2812],
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in CASES {
        let game = ChessGame::from_layout(case.layout, Team::Light)
            .expect("benchmark layout should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut warmup = game.clone();
            assert_eq!(
                perft(&mut warmup, depth).expect("perft should run"),
                *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name,
                depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let mut bench_game = game.clone();
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let nodes = perft(black_box(&mut bench_game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(nodes, *expected);
                        black_box(nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let game = ChessGame::new_standard();
    c.bench_function("legal_moves_start", |b| {
        b.iter(|| black_box(black_box(&game).legal_moves().len()))
    });
}

fn bench_self_play(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_play");
    group.sample_size(10);
    group.bench_function("los_alamos_100_plies", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let result = play_random_game(Arc::new(LosAlamosChess), black_box(seed), 100)
                .expect("self-play should run");
            black_box(result.plies)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_perft, bench_legal_moves, bench_self_play);
criterion_main!(benches);

//! Benchmarks for engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use woodpusher::board::{Board, MoveList};

/// An open middlegame a few moves in, built by replaying an opening.
fn middlegame() -> Board {
    let mut board = Board::new();
    for token in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"] {
        let mv = board.parse_move(token).expect("scripted move is legal");
        board.make_move(mv);
    }
    board
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut board = Board::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut open = middlegame();
    for depth in 1..=3 {
        group.bench_with_input(
            BenchmarkId::new("middlegame", depth),
            &depth,
            |b, &depth| b.iter(|| open.perft(black_box(depth))),
        );
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    let mut moves = MoveList::new();

    let mut startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| startpos.generate_legal_moves(black_box(&mut moves)))
    });

    let mut open = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| open.generate_legal_moves(black_box(&mut moves)))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // fewer samples for slower benchmarks

    for depth in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut board = Board::new();
                board.find_best_move(black_box(depth))
            })
        });
    }

    for depth in [2, 3] {
        group.bench_with_input(
            BenchmarkId::new("middlegame", depth),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    let mut board = middlegame();
                    board.find_best_move(black_box(depth))
                })
            },
        );
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let startpos = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.evaluate())));

    let open = middlegame();
    group.bench_function("middlegame", |b| b.iter(|| black_box(open.evaluate())));

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_search, bench_eval);
criterion_main!(benches);

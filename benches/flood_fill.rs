use chainsweep::{Board, BoardConfig, Pos};

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn first_mine(board: &Board) -> Pos {
    let size = board.size();
    (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .find(|&pos| board.has_mine(pos))
        .expect("dense board has at least one mine")
}

fn bench_flood_fill_empty_board(c: &mut Criterion) {
    let pristine = Board::with_mines(64, &[]).expect("valid size");

    c.bench_function("flood fill 64x64 empty", |b| {
        b.iter_batched(
            || pristine.clone(),
            |mut board| black_box(board.reveal((32, 32))),
            BatchSize::SmallInput,
        )
    });
}

fn bench_chain_schedule_dense_board(c: &mut Criterion) {
    let config = BoardConfig::new(64, 0.9).expect("valid config");
    let pristine = Board::from_seed(config, 1234);
    let trigger = first_mine(&pristine);

    c.bench_function("chain schedule 64x64 dense", |b| {
        b.iter_batched(
            || pristine.clone(),
            |mut board| black_box(board.explode(trigger)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_flood_fill_empty_board,
    bench_chain_schedule_dense_board
);
criterion_main!(benches);

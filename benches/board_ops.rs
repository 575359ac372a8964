use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use demineur_core::{Board, BoardConfig, MineGenerator, MineLayout, RandomMineGenerator};

fn bench_generate(c: &mut Criterion) {
    let config = BoardConfig::new(30, 90).unwrap();
    c.bench_function("generate_30x30_90_mines", |b| {
        b.iter(|| RandomMineGenerator::new(black_box(42)).generate(config))
    });
}

fn bench_board_construction(c: &mut Criterion) {
    let config = BoardConfig::new(30, 90).unwrap();
    c.bench_function("new_seeded_30x30", |b| {
        b.iter(|| Board::new_seeded(black_box(config), black_box(7)))
    });
}

fn bench_flood_reveal(c: &mut Criterion) {
    // a mine-free board makes one reveal sweep all 4096 cells
    let layout = MineLayout::from_mine_coords(64, &[]).unwrap();
    c.bench_function("flood_reveal_64x64_mine_free", |b| {
        b.iter_batched(
            || Board::from_layout(layout.clone()).unwrap(),
            |mut board| board.reveal(black_box((0, 0))),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_board_construction,
    bench_flood_reveal
);
criterion_main!(benches);

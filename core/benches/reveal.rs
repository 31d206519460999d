use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::new(64, 600).unwrap();
    c.bench_function("generate 64x64/600", |b| {
        b.iter(|| RandomLayoutGenerator::new(black_box(7)).generate(config))
    });
}

fn bench_flood(c: &mut Criterion) {
    // single corner mine leaves one huge zero region
    let layout = MineLayout::from_mine_coords(256, &[(255, 255)]).unwrap();
    c.bench_function("flood 256x256", |b| {
        b.iter(|| {
            let mut game = Game::with_layout(layout.clone());
            game.apply_move(black_box((0, 0))).unwrap().remaining_hidden
        })
    });
}

criterion_group!(benches, bench_generate, bench_flood);
criterion_main!(benches);

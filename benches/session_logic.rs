use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sentence_puzzle::core::{GameSession, LevelCatalog, SessionSnapshot, SimpleRng};
use sentence_puzzle::term::{FrameBuffer, GameView, Viewport};

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("shuffle_10_tiles", |b| {
        b.iter(|| rng.shuffled_range(black_box(10)))
    });
}

fn bench_place_undo(c: &mut Criterion) {
    let mut session = GameSession::new(LevelCatalog::builtin(), 12345);

    c.bench_function("place_then_undo", |b| {
        b.iter(|| {
            session.place_bank_tile(black_box(0)).ok();
            session.undo().ok();
        })
    });
}

fn bench_check(c: &mut Criterion) {
    let mut session = GameSession::new(LevelCatalog::builtin(), 12345);
    for i in [4, 3, 2, 1, 0] {
        session.place_tile(i).ok();
    }

    // An incorrect verdict leaves the sequence editable, so it can be rechecked.
    c.bench_function("check_incorrect", |b| {
        b.iter(|| black_box(session.check()))
    });
}

fn bench_snapshot_render(c: &mut Criterion) {
    let session = GameSession::new(LevelCatalog::builtin(), 12345);
    let view = GameView::default();
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(100, 40);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(100, 40), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_shuffle,
    bench_place_undo,
    bench_check,
    bench_snapshot_render
);
criterion_main!(benches);

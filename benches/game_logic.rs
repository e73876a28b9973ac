use criterion::{black_box, criterion_group, criterion_main, Criterion};
use falling_star::core::{NeverSpawn, RandomSpawner, SharedWorld, World};
use falling_star::term::GameView;
use falling_star::types::GameAction;

fn bench_step(c: &mut Criterion) {
    let mut world = World::new(40, 20);
    let mut spawner = RandomSpawner::seeded(12345);

    c.bench_function("world_step", |b| {
        b.iter(|| {
            black_box(world.step(&mut spawner));
        })
    });
}

fn bench_shared_tick(c: &mut Criterion) {
    // Never spawning keeps the session alive (no collision) for every iteration.
    let shared = SharedWorld::new(World::new(40, 20));

    c.bench_function("shared_tick_uncontended", |b| {
        b.iter(|| {
            black_box(shared.tick(&mut NeverSpawn));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut world = World::new(40, 20);
    let mut spawner = RandomSpawner::seeded(12345);
    for _ in 0..200 {
        world.step(&mut spawner);
    }
    let shared = SharedWorld::new(world);
    let snap = shared.snapshot();
    let view = GameView::default();

    c.bench_function("render_full_board", |b| {
        b.iter(|| {
            black_box(view.render(black_box(&snap)));
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let shared = SharedWorld::new(World::new(40, 20));

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            shared.apply(black_box(GameAction::MoveLeft));
            shared.apply(black_box(GameAction::MoveRight));
        })
    });
}

criterion_group!(benches, bench_step, bench_shared_tick, bench_render, bench_move);
criterion_main!(benches);

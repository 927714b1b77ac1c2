use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spirokit_core::{ArmChain, Point, Spirograph};

fn bench_tick(c: &mut Criterion) {
    let lengths: Vec<f64> = (1..=8).map(|i| 10.0 * i as f64).collect();
    let speeds: Vec<f64> = (1..=8).map(|i| 0.3 * i as f64).collect();

    c.bench_function("tick_8_arms", |b| {
        let mut chain = ArmChain::new(&lengths, &speeds).unwrap();
        b.iter(|| black_box(chain.tick(Point::new(750.0, 400.0), 60.0)));
    });

    c.bench_function("run_1000_ticks_8_arms", |b| {
        b.iter(|| {
            let chain = ArmChain::new(&lengths, &speeds).unwrap();
            let mut sim = Spirograph::new(chain, Point::new(750.0, 400.0), 60.0).unwrap();
            sim.run(1000);
            black_box(sim.trail().len())
        });
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);

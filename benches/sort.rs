use criterion::Criterion;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random(len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen()).collect()
}

fn sort(c: &mut Criterion) {
    let data = random(1 << 10);
    let mut sorted = data.clone();
    sorted.sort();

    c.bench_function("sort-random", |b| {
        b.iter(|| {
            let mut v = data.clone();
            fastio::sort(&mut v);
            v
        })
    });
    // same cost as random input: every pass runs to completion
    c.bench_function("sort-sorted", |b| {
        b.iter(|| {
            let mut v = sorted.clone();
            fastio::sort(&mut v);
            v
        })
    });
    c.bench_function("sort-std", |b| {
        b.iter(|| {
            let mut v = data.clone();
            v.sort();
            v
        })
    });
}

criterion::criterion_group!(benches, sort);
criterion::criterion_main!(benches);

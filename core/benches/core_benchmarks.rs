use criterion::{Criterion, black_box, criterion_group, criterion_main};

use framegraph_core::pool::{ObjectPool, Poolable, Pooled};

#[derive(Debug, Default)]
struct Scratch {
    indices: Vec<u32>,
}

impl Poolable for Scratch {
    fn new_empty() -> Self {
        Self::default()
    }
    fn reset(&mut self) {
        self.indices.clear();
    }
}

// ---------------------------------------------------------------------------
// Object pool
// ---------------------------------------------------------------------------

fn bench_checkout_release_warm(c: &mut Criterion) {
    c.bench_function("object_pool_checkout_release_warm", |b| {
        let mut pool = ObjectPool::new();
        let warm = pool.checkout::<Scratch>();
        pool.release(warm);

        b.iter(|| {
            let mut scratch = pool.checkout::<Scratch>();
            scratch.indices.push(black_box(1));
            scratch.reset();
            pool.release(scratch);
        });
    });
}

fn bench_temp_arrays(c: &mut Criterion) {
    c.bench_function("object_pool_temp_arrays_8", |b| {
        let mut pool = ObjectPool::new();
        b.iter(|| {
            for i in 0..8u32 {
                pool.temp_array::<u32>(8).push(black_box(i));
            }
            pool.release_all_temp_arrays();
        });
    });
}

// ---------------------------------------------------------------------------
// Pooled container
// ---------------------------------------------------------------------------

fn bench_pooled_round_trip(c: &mut Criterion) {
    c.bench_function("pooled_activate_release_64", |b| {
        let mut pooled = Pooled::<Scratch>::default();
        b.iter(|| {
            let scratch = pooled.activate();
            for i in 0..64 {
                scratch.indices.push(black_box(i));
            }
            pooled.release();
        });
    });
}

criterion_group!(
    benches,
    bench_checkout_release_warm,
    bench_temp_arrays,
    bench_pooled_round_trip
);
criterion_main!(benches);

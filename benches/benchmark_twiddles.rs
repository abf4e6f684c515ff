use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use stockham2d::{ComputedTwiddles, Radix, TwiddleSource, TwiddleTable};

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("twiddle_table_build");

    for size in [256, 1024, 4096, 16384] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(TwiddleTable::new(size).unwrap()));
        });
    }

    group.finish();
}

/// Every radix-4 twiddle of one transform, computed versus looked up.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("twiddle_lookup");
    let size = 4096;
    let table = TwiddleTable::new(size).unwrap();

    fn sweep<T: TwiddleSource>(source: &T, size: usize) {
        let mut stride = 1;
        while stride < size {
            for j in 0..size / 4 {
                for r in 0..4 {
                    black_box(source.twiddle(j, r, stride, size, Radix::Factor4));
                }
            }
            stride *= 2;
        }
    }

    group.bench_function("computed", |b| b.iter(|| sweep(&ComputedTwiddles, size)));
    group.bench_function("cached", |b| b.iter(|| sweep(&table, size)));

    group.finish();
}

criterion_group!(benches, bench_table_build, bench_lookup);
criterion_main!(benches);

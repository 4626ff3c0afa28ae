use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uwu_builtins::sort as typed;
use uwu_eval::sort as dynamic;
use uwu_value::Value;

/// A fixed pseudo-random permutation of `0..len`.
fn input(len: usize) -> Vec<f64> {
    (0..len).map(|ix| ((ix * 7919) % len) as f64).collect()
}

fn sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for len in [16, 128, 512] {
        let numbers = input(len);
        let value = Value::from(numbers.clone());

        group.bench_with_input(BenchmarkId::new("typed_merge_sort", len), &numbers, |b, numbers| {
            b.iter(|| typed::merge_sort(black_box(numbers)))
        });
        group.bench_with_input(BenchmarkId::new("typed_bubble_sort", len), &numbers, |b, numbers| {
            b.iter(|| typed::bubble_sort(typed::number_cmp, black_box(numbers)))
        });
        group.bench_with_input(BenchmarkId::new("dynamic_merge_sort", len), &value, |b, value| {
            b.iter(|| dynamic::merge_sort(black_box(value)))
        });
        group.bench_with_input(BenchmarkId::new("dynamic_bubble_sort", len), &value, |b, value| {
            b.iter(|| dynamic::bubble_sort(dynamic::number_cmp, black_box(value)))
        });
    }
    group.finish();
}

criterion_group!(benches, sorts);
criterion_main!(benches);

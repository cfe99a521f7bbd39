use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use stockroom_core::OrderedList;

fn titles(n: usize) -> Vec<String> {
    // Deterministic, non-monotonic key sequence.
    (0..n)
        .map(|i| format!("title-{:06}", (i * 7919) % n.max(1)))
        .collect()
}

fn bench_sorted_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_list_sorted_add");
    for n in [100usize, 1_000, 10_000] {
        let keys = titles(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut list: OrderedList<String> = OrderedList::new();
                for key in keys {
                    list.sorted_add(key.clone());
                }
                black_box(list.size())
            })
        });
    }
    group.finish();
}

fn bench_locate_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_list_locate_index");
    for n in [100usize, 1_000, 10_000] {
        let list: OrderedList<String> = titles(n).into_iter().collect();
        let probe = format!("title-{:06}", n / 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &probe, |b, probe| {
            b.iter(|| black_box(list.locate_index(black_box(probe))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sorted_add, bench_locate_index);
criterion_main!(benches);

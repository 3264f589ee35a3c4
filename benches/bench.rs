use rand::seq::SliceRandom;

use std::collections::BTreeSet;

use bisect_array::{OrderedArray, OrderedArraySet};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const COUNTS: [usize; 2] = [1000, 10000];

fn shuffled(count: usize) -> Vec<u64> {
    let mut keys = (0..count as u64).collect::<Vec<_>>();
    keys.shuffle(&mut rand::thread_rng());
    keys
}

fn benchmark_ordered_array(c: &mut Criterion) {
    for count in COUNTS {
        let keys = shuffled(count);

        c.bench_function(format!("array random_insert {count}").as_str(), |b| {
            b.iter(|| {
                let mut array = OrderedArray::with_capacity(count);
                for k in keys.iter() {
                    array.insert(*k);
                }
            });
        });

        c.bench_function(format!("array duplicate_insert {count}").as_str(), |b| {
            b.iter(|| {
                let mut array = OrderedArray::with_capacity(count);
                for k in keys.iter() {
                    array.insert(*k % 16);
                }
            });
        });

        let array: OrderedArray<u64> = keys.iter().copied().collect();

        c.bench_function(format!("array random_delete {count}").as_str(), |b| {
            b.iter(|| {
                let mut array = array.clone();
                for k in keys.iter() {
                    array.delete(k);
                }
            });
        });

        c.bench_function(format!("array random_search {count}").as_str(), |b| {
            b.iter(|| {
                for k in keys.iter() {
                    black_box(array.search(k));
                }
            });
        });

        c.bench_function(format!("array occurrences {count}").as_str(), |b| {
            b.iter(|| {
                let c = array.occurrences().fold(0, |a, (_, n)| a + black_box(n));
                assert_eq!(c, array.len());
            });
        });
    }
}

fn benchmark_ordered_set(c: &mut Criterion) {
    for count in COUNTS {
        let keys = shuffled(count);

        c.bench_function(format!("set random_add {count}").as_str(), |b| {
            b.iter(|| {
                let mut set = OrderedArraySet::new();
                for k in keys.iter() {
                    set.add(*k);
                }
            });
        });

        let set: OrderedArraySet<u64> = keys.iter().copied().collect();

        c.bench_function(format!("set random_remove {count}").as_str(), |b| {
            b.iter(|| {
                let mut set = set.clone();
                for k in keys.iter() {
                    set.remove(k);
                }
            });
        });

        c.bench_function(format!("set random_has {count}").as_str(), |b| {
            b.iter(|| {
                for k in keys.iter() {
                    black_box(set.has(k));
                }
            });
        });
    }
}

fn benchmark_btree(c: &mut Criterion) {
    for count in COUNTS {
        let keys = shuffled(count);

        c.bench_function(format!("btree random_insert {count}").as_str(), |b| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for k in keys.iter() {
                    set.insert(*k);
                }
            });
        });

        let set: BTreeSet<u64> = keys.iter().copied().collect();

        c.bench_function(format!("btree random_remove {count}").as_str(), |b| {
            b.iter(|| {
                let mut set = set.clone();
                for k in keys.iter() {
                    set.remove(k);
                }
            });
        });

        c.bench_function(format!("btree random_get {count}").as_str(), |b| {
            b.iter(|| {
                for k in keys.iter() {
                    black_box(set.contains(k));
                }
            });
        });
    }
}

criterion_group!(
    benches,
    benchmark_ordered_array,
    benchmark_ordered_set,
    benchmark_btree
);
criterion_main!(benches);

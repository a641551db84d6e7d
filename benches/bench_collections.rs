use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1_000;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_get(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        values.push(key);
    }

    c.bench_function("bench btreeset get", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(set.get(key));
            }
        })
    });
}

macro_rules! collection_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use collections_with_get::{$type_name, CollectionWithGet};
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;
                use criterion::{Criterion, black_box};

                pub fn bench_add(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} add", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut collection = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            black_box(collection.add(rng.next_u32())).unwrap();
                        }
                    }));
                }

                pub fn bench_get(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut collection = $type_name::new();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        collection.insert(key);
                        values.push(key);
                    }

                    c.bench_function(&format!("bench {} get", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &values {
                            black_box(collection.get(key).unwrap());
                        }
                    }));
                }

                pub fn bench_get_working_set(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut collection = $type_name::new();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        collection.insert(key);
                        values.push(key);
                    }
                    values.truncate(16);

                    c.bench_function(&format!("bench {} get working set", stringify!($module_name)), move |b| b.iter(|| {
                        for key in values.iter().cycle().take(NUM_OF_OPERATIONS) {
                            black_box(collection.get(key).unwrap());
                        }
                    }));
                }
            }
        )*
    }
}

collection_benches!(
    sorted_list: SortedList,
    splay_tree: SplayTree,
);

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_btreeset_get,
    sorted_list::bench_add,
    sorted_list::bench_get,
    sorted_list::bench_get_working_set,
    splay_tree::bench_add,
    splay_tree::bench_get,
    splay_tree::bench_get_working_set,
);
criterion_main!(benches);

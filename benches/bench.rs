use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ordered_tree::OrderedTree;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 2] = [100, 10_000];

fn rng() -> StdRng { StdRng::seed_from_u64(0x5eed) }

fn random_tree(n: usize, rng: &mut StdRng) -> OrderedTree<usize> {
    (0..n).map(|_| rng.gen_range(0..n)).collect()
}

fn insert_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_rand");

    for n in SIZES {
        let mut rng = rng();
        let mut tree = random_tree(n, &mut rng);

        group.bench_function(BenchmarkId::from_parameter(n), |b| b.iter(|| {
            let k = rng.gen_range(0..n);
            tree.insert(k);
            tree.remove(&k);
        }));
    }

    group.finish();
}

// Sequential keys degrade the tree to a list, so sizes stay small here.
fn insert_seq(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_seq");

    for n in [100, 1000] {
        let mut tree: OrderedTree<usize> = (0..n).map(|i| i * 2).collect();
        let mut i = 1;

        group.bench_function(BenchmarkId::from_parameter(n), |b| b.iter(|| {
            tree.insert(i);
            tree.remove(&i);
            i = (i + 2) % (2 * n);
        }));
    }

    group.finish();
}

fn find_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_rand");

    for n in SIZES {
        let mut rng = rng();
        let mut keys: Vec<_> = (0..n).map(|_| rng.gen_range(0..n)).collect();
        let tree: OrderedTree<_> = keys.iter().cloned().collect();
        keys.shuffle(&mut rng);
        let mut i = 0;

        group.bench_function(BenchmarkId::from_parameter(n), |b| b.iter(|| {
            black_box(tree.get(&keys[i]));
            i = (i + 1) % n;
        }));
    }

    group.finish();
}

fn neighbors_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors_rand");

    for n in SIZES {
        let mut rng = rng();
        let tree = random_tree(n, &mut rng);

        group.bench_function(BenchmarkId::from_parameter(n), |b| b.iter(|| {
            let k = rng.gen_range(0..2 * n);
            black_box((tree.floor(&k), tree.ceiling(&k)));
        }));
    }

    group.finish();
}

fn iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");

    for n in [100, 1000, 100_000] {
        let mut rng = rng();
        let tree: OrderedTree<u32> = (0..n).map(|_| rng.gen()).collect();

        group.bench_function(BenchmarkId::from_parameter(n), |b| b.iter(|| {
            for item in &tree { black_box(item); }
        }));
    }

    group.finish();
}

fn cursor_remove_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_remove_all");

    for n in SIZES {
        let mut rng = rng();
        let tree = random_tree(n, &mut rng);

        group.bench_function(BenchmarkId::from_parameter(n), |b| b.iter(|| {
            let mut tree = tree.clone();
            tree.retain(|_| false);
            black_box(tree);
        }));
    }

    group.finish();
}

criterion_group!(benches, insert_rand, insert_seq, find_rand, neighbors_rand, iter,
                 cursor_remove_all);
criterion_main!(benches);

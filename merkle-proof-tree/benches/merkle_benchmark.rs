#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use merkle_proof_tree::{Element, MerkleTree, check_proof, check_proof_ordered};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Distinct pseudo-leaf elements for benchmarking.
fn elements(count: u32) -> Vec<Element> {
    (0..count)
        .map(|i| *blake3::hash(&i.to_le_bytes()).as_bytes())
        .collect()
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("tree construction");
        for count in [100u32, 1_000, 10_000] {
            let leaves = elements(count);
            group.bench_with_input(BenchmarkId::new("unordered", count), &leaves, |b, leaves| {
                b.iter(|| MerkleTree::new(leaves, false).unwrap());
            });
            group.bench_with_input(BenchmarkId::new("ordered", count), &leaves, |b, leaves| {
                b.iter(|| MerkleTree::new(leaves, true).unwrap());
            });
        }
    }

    c.bench_function("proof extraction", |b| {
        let leaves = elements(10_000);
        let tree = MerkleTree::new(&leaves, false).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            let element = leaves.choose(&mut rng).unwrap();
            tree.proof(element).unwrap()
        });
    });

    c.bench_function("verify unordered", |b| {
        let leaves = elements(10_000);
        let tree = MerkleTree::new(&leaves, false).unwrap();
        let root = tree.root().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let proofs: Vec<(Element, Vec<Element>)> = (0..1_000)
            .map(|_| {
                let element = *leaves.choose(&mut rng).unwrap();
                let proof = tree.proof(&element).unwrap();
                (element, proof)
            })
            .collect();
        b.iter(|| {
            let (element, proof) = proofs.choose(&mut rng).unwrap();
            assert!(check_proof(proof, &root, element));
        });
    });

    c.bench_function("verify ordered", |b| {
        let leaves = elements(10_000);
        let tree = MerkleTree::new(&leaves, true).unwrap();
        let root = tree.root().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let proofs: Vec<(usize, Element, Vec<Element>)> = (0..1_000)
            .map(|_| {
                let index = rng.random_range(0..leaves.len());
                let element = leaves[index];
                let proof = tree.proof_ordered(&element, index + 1).unwrap();
                (index + 1, element, proof)
            })
            .collect();
        b.iter(|| {
            let (index, element, proof) = proofs.choose(&mut rng).unwrap();
            assert!(check_proof_ordered(proof, &root, element, *index));
        });
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);

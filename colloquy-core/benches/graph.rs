//! Benchmarks for the dialogue graph's structural operations.
//!
//! Deletion is the interesting one: it pays for a full index rebuild plus a
//! sweep of every surviving children list.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use colloquy_core::graph::Dialogue;

fn create_nodes(c: &mut Criterion) {
    c.bench_function("create 1000 nodes", |b| {
        b.iter(|| {
            let mut dialogue = Dialogue::new();
            for _ in 0..1000 {
                dialogue.create_node();
            }
            black_box(dialogue.len())
        })
    });
}

fn resolve_children(c: &mut Criterion) {
    let mut dialogue = Dialogue::new();
    let root = dialogue.root().id().clone();
    for _ in 0..1000 {
        dialogue.create_child(&root).unwrap();
    }

    c.bench_function("resolve 1000 children", |b| {
        b.iter(|| black_box(dialogue.children(dialogue.root()).count()))
    });
}

fn delete_with_sweep(c: &mut Criterion) {
    c.bench_function("delete from a 1000 node chain", |b| {
        b.iter_batched(
            || {
                let mut dialogue = Dialogue::new();
                let mut tail = dialogue.root().id().clone();
                for _ in 0..1000 {
                    tail = dialogue.create_child(&tail).unwrap().id().clone();
                }
                let middle = dialogue.nodes()[500].id().clone();
                (dialogue, middle)
            },
            |(mut dialogue, middle)| {
                black_box(dialogue.delete_node(&middle));
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, create_nodes, resolve_children, delete_with_sweep);
criterion_main!(benches);

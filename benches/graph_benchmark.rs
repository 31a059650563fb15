use criterion::{black_box, criterion_group, criterion_main, Criterion};
use setgraph::{DirectedEdge, Graph, Tree};

fn path(n: u32) -> Graph<u32> {
    let mut g = Graph::with_capacity(n as usize, n as usize);
    for i in 0..n - 1 {
        g.add_edge(i, i + 1).unwrap();
    }
    g
}

fn bench_graph_build(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("graph_build_path", |b| {
        b.iter(|| black_box(path(size)));
    });

    c.bench_function("graph_collect_edges", |b| {
        b.iter(|| {
            let g: Graph<u32> = (0..size - 1)
                .filter_map(|i| setgraph::Edge::new(i, i + 1).ok())
                .collect();
            black_box(g)
        });
    });
}

fn bench_graph_queries(c: &mut Criterion) {
    let size = 1000;
    let g = path(size);

    c.bench_function("graph_degree", |b| {
        b.iter(|| black_box(g.degree(black_box(&(size / 2)))));
    });

    c.bench_function("graph_neighbors", |b| {
        b.iter(|| black_box(g.neighbors(black_box(&(size / 2)))));
    });

    c.bench_function("graph_structural_hash", |b| {
        b.iter(|| black_box(g.structural_hash()));
    });
}

fn bench_graph_sparse_remove(c: &mut Criterion) {
    let size = 1000;
    let g = path(size);

    c.bench_function("graph_sparse_remove", |b| {
        b.iter(|| {
            let mut g = g.clone();
            // Remove middle vertex
            black_box(g.remove_vertex(&(size / 2)))
        });
    });
}

fn bench_tree_cascade(c: &mut Criterion) {
    let size = 500;
    let mut tree = Tree::new(0u32);
    // Binary heap layout: i -> 2i+1, 2i+2
    for i in 0..size {
        for child in [2 * i + 1, 2 * i + 2] {
            if let Ok(arc) = DirectedEdge::new(i, child) {
                tree.insert_edge(arc);
            }
        }
    }

    c.bench_function("tree_remove_subtree", |b| {
        b.iter(|| {
            let mut tree = tree.clone();
            black_box(tree.remove_vertex(&1))
        });
    });
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_graph_queries,
    bench_graph_sparse_remove,
    bench_tree_cascade
);
criterion_main!(benches);

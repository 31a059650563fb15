//! Builds a small friendship graph and lists its cliques.
//!
//! Run with `RUST_LOG=setgraph=debug cargo run --example clique_demo --features tracing`
//! to see the enumerator's events.

use anyhow::Result;
use setgraph::{DirectedGraph, Graph};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let mut friends = Graph::new();
    for (a, b) in [
        ("ada", "bob"),
        ("bob", "cy"),
        ("cy", "ada"),
        ("cy", "dee"),
        ("dee", "eve"),
        ("eve", "cy"),
        ("fay", "gus"),
    ] {
        friends.add_edge(a, b)?;
    }
    friends.add_vertex("hal");

    tracing::info!(vertices = friends.vertex_count(), edges = friends.edge_count(), "graph built");
    println!("{friends}");

    let mut cliques: Vec<Vec<&str>> = friends
        .cliques()
        .into_iter()
        .map(|c| {
            let mut members: Vec<&str> = c.into_iter().collect();
            members.sort_unstable();
            members
        })
        .collect();
    cliques.sort();
    for clique in &cliques {
        println!("clique: {}", clique.join(", "));
    }
    println!("largest clique size: {}", friends.maximum_clique().len());

    let mut follows = DirectedGraph::new();
    for (a, b) in [("ada", "bob"), ("bob", "ada"), ("bob", "cy")] {
        follows.add_edge(a, b)?;
    }
    println!("{follows}");
    println!("mutual cliques: {}", follows.cliques().len());

    Ok(())
}

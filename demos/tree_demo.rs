//! Grows a directory-like tree and prunes a branch.

use anyhow::{Context, Result};
use setgraph::{GraphError, Tree};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let mut tree = Tree::new("/");
    tree.add_edge("/", "usr")?;
    tree.add_edge("usr", "lib")?;
    tree.add_edge("usr", "bin")?;
    tree.add_edge("/", "etc")?;
    tree.add_vertex("tmp");

    // A second parent is rejected without error.
    let accepted = tree.add_edge("etc", "lib")?;
    tracing::info!(accepted, "offered etc -> lib");

    println!("{tree}");
    println!(
        "parent of lib: {}",
        tree.parent(&"lib").context("lib should have a parent")?
    );

    tree.remove_vertex(&"usr")?;
    println!("after pruning usr: {tree}");

    match tree.remove_vertex(&"/") {
        Err(GraphError::RootRemoval) => println!("root stays: {}", tree.root()),
        other => anyhow::bail!("unexpected result removing root: {other:?}"),
    }

    Ok(())
}

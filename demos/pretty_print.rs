//! Builds a tree out of random numbers, knocks it off balance and rebalances
//! it, drawing it along the way.
//!
//! Run with `RUST_LOG=debug cargo run --example pretty_print` to see the
//! library's own diagnostics too.

use balanced_bst::{Order, Tree};
use rand::Rng;
use tracing_subscriber::EnvFilter;

/// `n` random numbers between 0 and 100, inclusive.
fn random_values(n: usize) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(0..=100)).collect()
}

fn print_orders(tree: &Tree<u32>) {
    for order in [Order::Level, Order::Pre, Order::Post, Order::In] {
        let values: Vec<_> = tree.traverse(order).map(|node| node.data()).collect();
        println!("{order:?}: {values:?}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = Tree::build(random_values(11));
    print!("{tree}");
    println!("balanced: {}", tree.is_balanced());
    print_orders(&tree);

    tree.extend([101, 150, 200, 250, 300]);
    println!();
    print!("{tree}");
    println!("balanced: {}", tree.is_balanced());

    tree.rebalance();
    println!();
    print!("{tree}");
    println!("balanced: {}", tree.is_balanced());
    print_orders(&tree);
}

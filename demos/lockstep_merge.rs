//! Lockstep Merge
//!
//! This example demonstrates walking multiple sequences in lockstep and
//! merging them into a new sequence.
//!
//! Key concepts:
//! - Shortest-sequence-wins truncation, never an error
//! - Callback variant for side effects, selector variant for collection
//! - Absent sequences are rejected before iteration begins
//!
//! Run with: cargo run --example lockstep_merge

use lockstep::iterate;

fn main() {
    println!("=== Lockstep Merge Example ===\n");

    let names = ["ada", "grace", "edsger"];
    let scores = [90, 87];

    // Selector variant: collect one merged entry per aligned pair. The
    // third name has no score, so it is dropped.
    let merged = iterate::map2(Some(names), Some(scores), |name, score| {
        format!("{name}: {score}")
    })
    .unwrap();
    println!("merged: {merged:?}");

    // Callback variant: same truncation, side effects only.
    iterate::for_each3(
        Some(["mon", "tue", "wed"]),
        Some([12.5, 13.0, 11.75]),
        Some(["sunny", "overcast"]),
        |day, temperature, sky| println!("{day}: {temperature} degrees, {sky}"),
    )
    .unwrap();

    // An absent sequence is reported before any element is visited.
    let absent = iterate::map2(None::<Vec<i32>>, Some(vec![1, 2]), |a, b| a + b);
    println!("absent input: {}", absent.unwrap_err());

    println!("\n=== Example Complete ===");
}

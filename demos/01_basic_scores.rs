//! Basic Access Scores
//!
//! The minimal example: hard and soft threshold scores for one distance,
//! and the two destination-array reductions.
//!
//! # Score Selection Guide
//!
//! | Score | Range | Use Case |
//! |-------|-------|----------|
//! | Hard  | {0, 1} | Policy compliance ("within 400 m of a bus stop") |
//! | Soft  | [0, 1] | Composite indices, where 390 m and 410 m should score alike |
//!
//! ```bash
//! cargo run --example 01_basic_scores --release
//! ```

use accessr::{array_min, count_in_threshold, threshold_hard, threshold_soft};

fn main() {
    let threshold = 800;

    println!("distance  hard  soft    (threshold {} m)", threshold);
    for d in [0, 200, 400, 600, 790, 800, 810, 1000, 1600, 3200, 20_000] {
        let hard = threshold_hard(Some(d), threshold);
        let soft = threshold_soft(Some(d), threshold);
        println!(
            "{:>8}  {:>4}  {:.4}",
            d,
            hard.map_or("-".to_string(), |h| h.to_string()),
            soft.unwrap_or(f64::NAN)
        );
    }

    // At the threshold the soft score is exactly one half
    assert_eq!(threshold_soft(Some(threshold), threshold), Some(0.5));

    // No data is not the same as no access
    println!(
        "\nmissing distance: hard={:?} soft={:?}",
        threshold_hard(None, threshold),
        threshold_soft(None, threshold)
    );

    // Distances from one address to every public transport stop within 3200 m
    let stops = [180, 420, 655, 1310, 2900];
    println!("\nstops within 400 m: {}", count_in_threshold(&stops, 400));
    println!("stops within 800 m: {}", count_in_threshold(&stops, 800));
    println!("closest stop: {:?} m", array_min(&stops));
}

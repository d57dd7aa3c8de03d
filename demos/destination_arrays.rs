//! Scoring Destination Arrays from Published Columns
//!
//! Reads distance arrays the way they appear in the released CSV files
//! (Postgres array literals), scores the closest destination, and summarises
//! the column. Set `RUST_LOG=accessr=debug` to see parse and summary events.
//!
//! ```bash
//! RUST_LOG=accessr=debug cargo run --example destination_arrays --release
//! ```

use accessr::batch::{batch_array_min, batch_count_in_threshold, batch_threshold_soft, BatchSummary};
use accessr::literal::parse_pg_array;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // dest_distances_3200m column, one row per address point
    let column = [
        "{1480,620,2950}",
        "{}",
        "{305,NULL,2210,118}",
        "{3100}",
        "{12,oops,40}",
        "{760,790}",
    ];

    // Position of each parsed row in the source column
    let mut source_index = Vec::with_capacity(column.len());
    let mut rows = Vec::with_capacity(column.len());
    for (i, literal) in column.iter().enumerate() {
        match parse_pg_array(literal) {
            Ok(row) => {
                source_index.push(i);
                rows.push(row);
            }
            Err(e) => {
                tracing::warn!(row = i, error = %e, "skipping malformed row");
            }
        }
    }

    let counts = batch_count_in_threshold(&rows, 1000);
    let closest = batch_array_min(&rows);
    let soft = batch_threshold_soft(&closest, 1000);

    println!("{:>4}  {:>8}  {:>7}  {:>6}", "row", "closest", "n<1000", "soft");
    for i in 0..rows.len() {
        println!(
            "{:>4}  {:>8}  {:>7}  {:>6}",
            source_index[i],
            closest[i].map_or("-".into(), |d| d.to_string()),
            counts[i],
            soft[i].map_or("-".into(), |s| format!("{:.3}", s))
        );
    }

    let summary = BatchSummary::from_soft(&soft);
    println!(
        "\nrows={} scored={} coverage={:.0}% mean={:.3}",
        summary.rows,
        summary.scored,
        summary.coverage() * 100.0,
        summary.mean.unwrap_or(f64::NAN)
    );
}

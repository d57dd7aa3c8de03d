//! Indicator Sets
//!
//! Loads named thresholds from TOML and applies them to one address's
//! distances, printing the resulting indicator row as JSON.
//!
//! ```bash
//! cargo run --example indicator_set --release
//! ```

use accessr::indicator::IndicatorSet;
use accessr::literal::parse_aos_distances;

const CONFIG: &str = r#"
[[indicator]]
name = "pos_any_400m_hard"
threshold_m = 400
kind = "hard"

[[indicator]]
name = "pos_any_400m_soft"
threshold_m = 400
kind = "soft"

[[indicator]]
name = "pos_large_800m_soft"
threshold_m = 800
kind = "soft"
"#;

fn main() -> accessr::Result<()> {
    tracing_subscriber::fmt().init();

    let set = IndicatorSet::from_toml_str(CONFIG)?;

    // od_aos_jsonb entry for one address point
    let links = parse_aos_distances(
        r#"[{"aos_id": 10342, "distance": 512}, {"aos_id": 10398, "distance": 1044}]"#,
    )?;
    let distances = accessr::literal::AosDistance::distances(&links);

    let row = set.evaluate_array(&distances);
    println!("{}", serde_json::to_string_pretty(&row)?);

    // The built-in set covers 400/800/1000/1600 m
    for score in IndicatorSet::standard("pos_any").evaluate(Some(512)) {
        println!("{:<22} {:?}", score.name, score.score);
    }

    Ok(())
}

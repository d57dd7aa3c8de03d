//! Release Metadata
//!
//! Prints the `datasets` and `locations` blocks of the release metadata as
//! YAML, then finds the study region for a few address coordinates.
//!
//! ```bash
//! cargo run --example release_metadata --release
//! ```

use accessr::catalogue;

fn main() -> accessr::Result<()> {
    println!("{}", catalogue::metadata_yaml()?);

    // (lon, lat) in CRS84
    let points = [
        ("Flinders St, Melbourne", 144.9671, -37.8183),
        ("Hobart waterfront", 147.3338, -42.8821),
        ("Alice Springs", 133.8807, -23.6980),
    ];
    for (label, lon, lat) in points {
        match catalogue::locate(lon, lat) {
            Some(region) => println!("{label}: {}", region.name),
            None => println!("{label}: outside every study region"),
        }
    }

    Ok(())
}

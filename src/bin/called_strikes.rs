use anyhow::{Context, Result};
use polars::prelude::*;

use statcast::{SearchOutcome, Statcast};

const MISS_THRESHOLD_INCHES: f64 = 3.0;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let start = args.first().map(String::as_str).unwrap_or("2024-03-20");
    let end = args.get(1).map(String::as_str).unwrap_or("2024-11-15");

    let mut session = Statcast::new();
    let outcome = session.search([
        ("start_date", start.into()),
        ("end_date", end.into()),
        ("descriptions", vec!["called_strike"].into()),
    ])?;

    if outcome == SearchOutcome::NoData {
        println!("No pitches found between {start} and {end}");
        return Ok(());
    }

    session.umpire_calls()?;
    let table = session
        .take_table()
        .context("search reported data but held no table")?;

    let worst = table
        .lazy()
        .filter(col("total_miss").gt_eq(lit(MISS_THRESHOLD_INCHES)))
        .sort(
            ["total_miss"],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .select([
            col("pitch_id"),
            col("game_date"),
            col("player_name"),
            col("release_speed"),
            col("total_miss"),
        ])
        .collect()?;

    println!(
        "Worst called strikes between {start} and {end} ({} at least {MISS_THRESHOLD_INCHES}\" outside):",
        worst.height()
    );
    println!("{}", worst.head(Some(25)));
    Ok(())
}

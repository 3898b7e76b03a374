use polars::prelude::*;

use crate::error::Result;

/// Split `delta_home_win_exp` into the batter's and pitcher's perspective.
/// The home team bats in the bottom of the inning, so the sign flips with
/// `inning_topbot`.
pub fn delta_win_exp(df: DataFrame) -> Result<DataFrame> {
    let missing = col("delta_home_win_exp").is_null();
    let home_delta = col("delta_home_win_exp");
    let batting_home = col("inning_topbot").eq(lit("Bot")).fill_null(lit(false));

    let batter = when(batting_home.clone())
        .then(home_delta.clone())
        .otherwise(home_delta.clone() * lit(-1.0));
    let pitcher = when(batting_home)
        .then(home_delta.clone() * lit(-1.0))
        .otherwise(home_delta);

    let df = df
        .lazy()
        .with_columns([
            when(missing.clone())
                .then(lit(0.0))
                .otherwise(batter)
                .alias("batter_delta_win_exp"),
            when(missing)
                .then(lit(0.0))
                .otherwise(pitcher)
                .alias("pitcher_delta_win_exp"),
        ])
        .collect()?;
    Ok(df)
}

use polars::prelude::*;

use crate::error::Result;

const INCHES_PER_FOOT: f64 = 12.0;
// Regulation ball diameter is ~2.9in; a pitch is a strike while any part of
// the ball crosses the zone.
const BALL_RADIUS_FT: f64 = 1.45 / 12.0;
// The plate is 17in wide.
const ZONE_HALF_WIDTH_FT: f64 = 8.5 / 12.0;

/// How far outside the strike zone each called strike was, in inches.
/// Non-called-strike rows and rows with a null location or zone bound get
/// `0.00` in every derived column.
pub fn umpire_calls(df: DataFrame) -> Result<DataFrame> {
    let missing = col("plate_x")
        .is_null()
        .or(col("plate_z").is_null())
        .or(col("sz_bot").is_null())
        .or(col("sz_top").is_null());
    let called_strike = col("description").eq(lit("called_strike")).fill_null(lit(false));

    let edge = lit(ZONE_HALF_WIDTH_FT + BALL_RADIUS_FT);
    let horizontal = (col("plate_x").abs() - edge) * lit(INCHES_PER_FOOT);
    let above = (col("plate_z") - (col("sz_top") + lit(BALL_RADIUS_FT))) * lit(INCHES_PER_FOOT);
    let below = ((col("sz_bot") - lit(BALL_RADIUS_FT)) - col("plate_z")) * lit(INCHES_PER_FOOT);

    let horizontal_miss = at_least_zero(horizontal);
    // A pitch misses high or low, never both, so the clamped sum is the miss.
    let vertical_miss = at_least_zero(above) + at_least_zero(below);

    let gate = |value: Expr| {
        when(missing.clone().or(called_strike.clone().not()))
            .then(lit(0.0))
            .otherwise(value)
    };

    let df = df
        .lazy()
        .with_columns([
            gate(horizontal_miss.clone()).alias("horizontal_miss"),
            gate(vertical_miss.clone()).alias("vertical_miss"),
            gate(horizontal_miss + vertical_miss).alias("total_miss"),
        ])
        .collect()?;
    Ok(df)
}

fn at_least_zero(value: Expr) -> Expr {
    when(value.clone().gt(lit(0.0)))
        .then(value)
        .otherwise(lit(0.0))
}

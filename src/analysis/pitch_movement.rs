use polars::prelude::*;

use crate::error::Result;

const INCHES_PER_FOOT: f64 = 12.0;

/// Horizontal and vertical break in inches from the `pfx_x`/`pfx_z`
/// movement components. Horizontal break flips sign so glove-side movement
/// reads positive.
pub fn pitch_movement(df: DataFrame) -> Result<DataFrame> {
    let missing = col("pfx_x").is_null().or(col("pfx_z").is_null());
    let horizontal = col("pfx_x") * lit(-INCHES_PER_FOOT);
    let vertical = col("pfx_z") * lit(INCHES_PER_FOOT);

    let df = df
        .lazy()
        .with_columns([
            when(missing.clone())
                .then(lit(0.0))
                .otherwise(horizontal.clone())
                .alias("horizontal_break"),
            when(missing.clone())
                .then(lit(0.0))
                .otherwise(vertical.clone())
                .alias("vertical_break"),
            when(missing.clone())
                .then(lit(0.0))
                .otherwise(horizontal.clone() + vertical.clone())
                .alias("total_break"),
            when(missing)
                .then(lit(0.0))
                .otherwise((horizontal + vertical).abs())
                .alias("total_break_abs"),
        ])
        .collect()?;
    Ok(df)
}

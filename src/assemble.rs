//! Merging per-request tables into the final pitch dataset.

use polars::prelude::*;

use crate::error::{Error, Result};

/// Row identity and sort order of the assembled table.
pub const SORT_KEYS: [&str; 3] = ["game_pk", "at_bat_number", "pitch_number"];

const FILL_ZERO_COLS: [&str; 4] = ["plate_x", "plate_z", "sz_bot", "sz_top"];

/// Concatenate normalized tables into one dataset: skip empties, abort on an
/// upstream `error` column, outer-union the column sets, sort by the pitch
/// key, prepend `pitch_id` and zero-fill the strike-zone columns.
///
/// `Ok(None)` means every table was empty — a benign no-data outcome.
pub fn assemble_tables(tables: Vec<DataFrame>) -> Result<Option<DataFrame>> {
    let mut frames: Vec<LazyFrame> = Vec::with_capacity(tables.len());
    for table in tables {
        if table.height() == 0 {
            continue;
        }
        if let Some(message) = upstream_error(&table)? {
            return Err(Error::UpstreamQuery(message));
        }
        frames.push(table.lazy());
    }
    if frames.is_empty() {
        return Ok(None);
    }

    let lf = concat(
        frames,
        UnionArgs {
            rechunk: true,
            to_supertypes: true,
            diagonal: true,
            ..Default::default()
        },
    )?;

    let lf = lf.sort(SORT_KEYS, SortMultipleOptions::default()).with_column(
        // A null key renders as the literal "None" inside the composite id.
        concat_str(
            SORT_KEYS.map(|key| col(key).cast(DataType::String).fill_null(lit("None"))),
            "|",
            false,
        )
        .alias("pitch_id"),
    );

    let df = pitch_id_first(lf.collect()?)?;
    Ok(Some(fill_zone_nulls(df)?))
}

fn upstream_error(table: &DataFrame) -> Result<Option<String>> {
    if !table.schema().contains("error") {
        return Ok(None);
    }
    let message = table
        .column("error")?
        .str()?
        .get(0)
        .unwrap_or("statcast returned an unspecified error")
        .to_string();
    Ok(Some(message))
}

fn pitch_id_first(df: DataFrame) -> Result<DataFrame> {
    let mut ordered: Vec<String> = vec!["pitch_id".to_string()];
    ordered.extend(
        df.get_column_names()
            .iter()
            .filter(|name| name.as_str() != "pitch_id")
            .map(|name| name.to_string()),
    );
    Ok(df.select(ordered)?)
}

fn fill_zone_nulls(df: DataFrame) -> Result<DataFrame> {
    let fills: Vec<Expr> = FILL_ZERO_COLS
        .iter()
        .filter(|name| df.schema().contains(name))
        .map(|name| {
            col(*name)
                .cast(DataType::Float64)
                .fill_null(lit(0.0))
                .alias(*name)
        })
        .collect();
    if fills.is_empty() {
        return Ok(df);
    }
    Ok(df.lazy().with_columns(fills).collect()?)
}

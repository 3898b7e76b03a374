//! Per-response CSV parsing and column type normalization.

use std::io::Cursor;

use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;

use crate::error::Result;

static PLAIN_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").expect("valid date pattern"));
static UTC_TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}T\d{2}:\d{2}:\d{2}\.\d{1,6}Z$")
        .expect("valid timestamp pattern")
});

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Parse one raw CSV payload into a typed table.
///
/// String columns are re-typed from their first non-null value alone:
/// percentage strings become fractions, date-shaped strings become temporal
/// columns (malformed cells turn null rather than failing the column), and
/// anything else stays text. Dotted column names are flattened to `_`.
pub fn parse_csv_response(body: &str) -> Result<DataFrame> {
    if body.trim().is_empty() {
        return Ok(DataFrame::empty());
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(Cursor::new(body.as_bytes()))
        .finish()?;

    normalize_table(df)
}

fn normalize_table(df: DataFrame) -> Result<DataFrame> {
    let mut conversions: Vec<Expr> = Vec::new();

    for series in df.iter() {
        if series.dtype() != &DataType::String {
            continue;
        }
        let name = series.name().as_str();
        let ca = series.str()?;
        let Some(sample) = ca.into_iter().flatten().next() else {
            continue;
        };

        if sample.ends_with('%') || name.ends_with('%') {
            conversions.push(percent_to_fraction(name));
        } else if PLAIN_DATE.is_match(sample) {
            conversions.push(col(name).str().to_date(strptime(DATE_FORMAT)).alias(name));
        } else if UTC_TIMESTAMP.is_match(sample) {
            conversions.push(
                col(name)
                    .str()
                    .to_datetime(
                        Some(TimeUnit::Microseconds),
                        None,
                        strptime(TIMESTAMP_FORMAT),
                        lit("raise"),
                    )
                    .alias(name),
            );
        }
    }

    let mut df = if conversions.is_empty() {
        df
    } else {
        df.lazy().with_columns(conversions).collect()?
    };

    let dotted: Vec<String> = df
        .get_column_names()
        .iter()
        .filter(|name| name.contains('.'))
        .map(|name| name.to_string())
        .collect();
    for old in dotted {
        let flat = old.replace('.', "_");
        df.rename(&old, flat.into())?;
    }

    Ok(df)
}

fn percent_to_fraction(name: &str) -> Expr {
    (col(name)
        .str()
        .replace_all(lit("%"), lit(""), true)
        .cast(DataType::Float64)
        / lit(100.0))
    .alias(name)
}

fn strptime(format: &str) -> StrptimeOptions {
    StrptimeOptions {
        format: Some(format.into()),
        strict: false,
        ..Default::default()
    }
}

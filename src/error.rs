use polars::error::PolarsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unrecognized search parameter {0:?}")]
    InvalidParameter(String),

    #[error("search parameter {key:?}: {reason}")]
    ParameterValue { key: String, reason: String },

    #[error("search needs game_pks or a start_date to iterate over")]
    MissingIterationKey,

    #[error("statcast request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("statcast rejected the query: {0}")]
    UpstreamQuery(String),

    #[error(transparent)]
    Table(#[from] PolarsError),

    #[error("{0} requires a completed search that produced data")]
    NotReady(&'static str),
}

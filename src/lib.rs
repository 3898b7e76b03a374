//! Pitch-by-pitch statcast acquisition: turn a set of search filters into
//! one normalized pitch table.
//!
//! A search session validates its filters, picks an iteration strategy
//! (discrete games or a daily date range), builds one CSV request per unit,
//! fetches them on a bounded worker pool, and assembles the responses into a
//! single sorted table keyed by `pitch_id`.

pub mod analysis;
pub mod assemble;
pub mod dates;
pub mod error;
pub mod fetch;
pub mod filters;
pub mod http_client;
pub mod normalize;
pub mod statcast;
pub mod urls;

pub use error::{Error, Result};
pub use filters::{FilterSpec, IterationPlan, IterationUnit, ParamValue};
pub use statcast::{SearchOutcome, Stage, Statcast};

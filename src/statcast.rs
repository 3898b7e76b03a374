//! The search session: validate → plan → fetch → assemble.

use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::DataFrame;

use crate::analysis;
use crate::assemble::assemble_tables;
use crate::dates;
use crate::error::{Error, Result};
use crate::fetch::{fetch_all, fetch_parallelism};
use crate::filters::{FilterSpec, IterationPlan, ParamValue};
use crate::normalize::parse_csv_response;
use crate::urls::build_search_url;

const BASE_URL: &str = "https://baseballsavant.mlb.com";

/// Pipeline position of a session. `Failed` is terminal and reachable from
/// every step; post-processing hooks require `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Validated,
    Planned,
    Fetching,
    Assembling,
    Done,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Table { rows: usize },
    /// Zero responses, or every response was empty. Not an error.
    NoData,
}

pub struct Statcast {
    base_url: String,
    parallelism: usize,
    stage: Stage,
    table: Option<DataFrame>,
}

impl Default for Statcast {
    fn default() -> Self {
        Self::new()
    }
}

impl Statcast {
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            parallelism: fetch_parallelism(),
            stage: Stage::Idle,
            table: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn table(&self) -> Option<&DataFrame> {
        self.table.as_ref()
    }

    pub fn take_table(&mut self) -> Option<DataFrame> {
        self.table.take()
    }

    /// Run one search session from dynamic key/value parameters.
    pub fn search<I, K>(&mut self, params: I) -> Result<SearchOutcome>
    where
        I: IntoIterator<Item = (K, ParamValue)>,
        K: AsRef<str>,
    {
        self.stage = Stage::Idle;
        self.table = None;
        match FilterSpec::from_params(params) {
            Ok(spec) => self.search_with(spec),
            Err(err) => {
                self.stage = Stage::Failed;
                Err(err)
            }
        }
    }

    /// Run one search session from an already-built [`FilterSpec`].
    pub fn search_with(&mut self, spec: FilterSpec) -> Result<SearchOutcome> {
        self.stage = Stage::Idle;
        self.table = None;
        match self.run_search(spec) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                self.stage = Stage::Failed;
                Err(err)
            }
        }
    }

    fn run_search(&mut self, spec: FilterSpec) -> Result<SearchOutcome> {
        let spec = spec.normalized(dates::days_ago(1));
        self.stage = Stage::Validated;

        let plan = IterationPlan::select(&spec)?;
        let urls: Vec<String> = plan
            .units()
            .iter()
            .map(|unit| build_search_url(&self.base_url, &spec, unit))
            .collect();
        self.stage = Stage::Planned;
        tracing::info!(
            "validated search, iterating {} over {} request(s)",
            plan.label(),
            urls.len()
        );

        self.stage = Stage::Fetching;
        let progress = progress_bar(urls.len());
        let bodies = fetch_all(&urls, self.parallelism, Some(&progress))?;
        progress.finish_and_clear();

        if bodies.is_empty() {
            self.stage = Stage::Done;
            tracing::info!("no responses collected, finishing without data");
            return Ok(SearchOutcome::NoData);
        }

        self.stage = Stage::Assembling;
        let tables = bodies
            .iter()
            .map(|body| parse_csv_response(body))
            .collect::<Result<Vec<_>>>()?;
        match assemble_tables(tables)? {
            Some(table) => {
                let rows = table.height();
                self.table = Some(table);
                self.stage = Stage::Done;
                tracing::info!("assembled pitch table, {rows} row(s)");
                Ok(SearchOutcome::Table { rows })
            }
            None => {
                self.stage = Stage::Done;
                tracing::info!("all responses were empty, finishing without data");
                Ok(SearchOutcome::NoData)
            }
        }
    }

    pub fn pitch_movement(&mut self) -> Result<()> {
        self.apply_hook("pitch_movement", analysis::pitch_movement)
    }

    pub fn delta_win_exp(&mut self) -> Result<()> {
        self.apply_hook("delta_win_exp", analysis::delta_win_exp)
    }

    pub fn umpire_calls(&mut self) -> Result<()> {
        self.apply_hook("umpire_calls", analysis::umpire_calls)
    }

    fn apply_hook(
        &mut self,
        name: &'static str,
        transform: fn(DataFrame) -> Result<DataFrame>,
    ) -> Result<()> {
        if self.stage != Stage::Done {
            return Err(Error::NotReady(name));
        }
        let Some(table) = self.table.take() else {
            return Err(Error::NotReady(name));
        };
        match transform(table) {
            Ok(table) => {
                self.table = Some(table);
                Ok(())
            }
            Err(err) => {
                self.stage = Stage::Failed;
                Err(err)
            }
        }
    }
}

fn progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {prefix:.bold} [{bar:30.cyan/dim}] {pos}/{len} requests")
            .expect("valid template")
            .progress_chars("=> "),
    );
    pb.set_prefix("statcast");
    pb
}

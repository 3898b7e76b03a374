//! Validated search parameters and the iteration plan derived from them.

use chrono::NaiveDate;

use crate::dates;
use crate::error::{Error, Result};

/// One caller-supplied parameter value. Scalars are accepted everywhere a
/// list is and coerce to a one-element list during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Id(u64),
    TextList(Vec<String>),
    IdList(Vec<u64>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Id(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::TextList(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        Self::TextList(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<u64>> for ParamValue {
    fn from(values: Vec<u64>) -> Self {
        Self::IdList(values)
    }
}

impl From<&[u64]> for ParamValue {
    fn from(values: &[u64]) -> Self {
        Self::IdList(values.to_vec())
    }
}

impl ParamValue {
    fn into_ids(self, key: &str) -> Result<Vec<u64>> {
        match self {
            Self::Id(id) => Ok(vec![id]),
            Self::IdList(ids) => Ok(ids),
            _ => Err(Error::ParameterValue {
                key: key.to_string(),
                reason: "expected a numeric id or a list of ids".to_string(),
            }),
        }
    }

    fn into_texts(self, key: &str) -> Result<Vec<String>> {
        match self {
            Self::Text(value) => Ok(vec![value]),
            Self::TextList(values) => Ok(values),
            _ => Err(Error::ParameterValue {
                key: key.to_string(),
                reason: "expected a string or a list of strings".to_string(),
            }),
        }
    }

    fn into_date(self, key: &str) -> Result<NaiveDate> {
        let Self::Text(raw) = self else {
            return Err(Error::ParameterValue {
                key: key.to_string(),
                reason: "expected a single YYYY-MM-DD date".to_string(),
            });
        };
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| Error::ParameterValue {
            key: key.to_string(),
            reason: format!("{raw:?} is not a YYYY-MM-DD date"),
        })
    }
}

/// The validated, normalized parameter set for one search session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub game_pks: Vec<u64>,
    pub batter_ids: Vec<u64>,
    pub pitcher_ids: Vec<u64>,
    pub teams: Vec<String>,
    pub pitch_types: Vec<String>,
    pub events: Vec<String>,
    pub descriptions: Vec<String>,
}

impl FilterSpec {
    /// Build a spec from dynamic key/value pairs. Unknown keys fail before
    /// any network activity.
    pub fn from_params<I, K>(params: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, ParamValue)>,
        K: AsRef<str>,
    {
        let mut spec = Self::default();
        for (key, value) in params {
            let key = key.as_ref();
            match key {
                "start_date" => spec.start_date = Some(value.into_date(key)?),
                "end_date" => spec.end_date = Some(value.into_date(key)?),
                "game_pks" => spec.game_pks = value.into_ids(key)?,
                "batter_ids" => spec.batter_ids = value.into_ids(key)?,
                "pitcher_ids" => spec.pitcher_ids = value.into_ids(key)?,
                "teams" => spec.teams = value.into_texts(key)?,
                "pitch_types" => spec.pitch_types = value.into_texts(key)?,
                "events" => spec.events = value.into_texts(key)?,
                "descriptions" => spec.descriptions = value.into_texts(key)?,
                other => return Err(Error::InvalidParameter(other.to_string())),
            }
        }
        Ok(spec)
    }

    /// Fill `end_date` when only `start_date` was supplied. The orchestrator
    /// passes yesterday's date.
    pub fn normalized(mut self, fallback_end: NaiveDate) -> Self {
        if self.start_date.is_some() && self.end_date.is_none() {
            self.end_date = Some(fallback_end);
        }
        self
    }

    pub fn has_player_filter(&self) -> bool {
        !self.batter_ids.is_empty() || !self.pitcher_ids.is_empty()
    }
}

/// One outbound request is built per unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationUnit {
    Game(u64),
    Date(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationPlan {
    ByGame(Vec<u64>),
    ByDate(Vec<NaiveDate>),
}

impl IterationPlan {
    /// Game ids win over a date range whenever both are present.
    pub fn select(spec: &FilterSpec) -> Result<Self> {
        if !spec.game_pks.is_empty() {
            Ok(Self::ByGame(spec.game_pks.clone()))
        } else if let Some(start) = spec.start_date {
            let end = spec.end_date.unwrap_or(start);
            Ok(Self::ByDate(dates::date_range(start, end)))
        } else {
            Err(Error::MissingIterationKey)
        }
    }

    pub fn units(&self) -> Vec<IterationUnit> {
        match self {
            Self::ByGame(games) => games.iter().copied().map(IterationUnit::Game).collect(),
            Self::ByDate(days) => days.iter().copied().map(IterationUnit::Date).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::ByGame(games) => games.len(),
            Self::ByDate(days) => days.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ByGame(_) => "games",
            Self::ByDate(_) => "dates",
        }
    }
}

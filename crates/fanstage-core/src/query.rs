//! Inbox query types: sort options and filter criteria

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::CoreError;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Ordering requested by the inbox view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    DateDesc,
    DateAsc,
    TracksDesc,
    TracksAsc,
    PlaysDesc,
    PlaysAsc,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::DateDesc,
        SortOption::DateAsc,
        SortOption::TracksDesc,
        SortOption::TracksAsc,
        SortOption::PlaysDesc,
        SortOption::PlaysAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::DateDesc => "date-desc",
            SortOption::DateAsc => "date-asc",
            SortOption::TracksDesc => "tracks-desc",
            SortOption::TracksAsc => "tracks-asc",
            SortOption::PlaysDesc => "plays-desc",
            SortOption::PlaysAsc => "plays-asc",
        }
    }
}

impl FromStr for SortOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| CoreError::InvalidSortOption(s.to_string()))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inbox filter. Every field is optional and present fields combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_title: Option<String>,
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub date_from: Option<Date>,
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub date_to: Option<Date>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_track_title(mut self, title: impl Into<String>) -> Self {
        self.track_title = Some(title.into());
        self
    }

    pub fn with_date_from(mut self, date: Date) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn with_date_to(mut self, date: Date) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Name query, trimmed; blank input counts as absent
    pub fn name_query(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Track title query, trimmed; blank input counts as absent
    pub fn track_title_query(&self) -> Option<&str> {
        non_blank(self.track_title.as_deref())
    }

    pub fn has_date_bounds(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }

    /// True when no criterion constrains the collection
    pub fn is_empty(&self) -> bool {
        self.name_query().is_none() && self.track_title_query().is_none() && !self.has_date_bounds()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

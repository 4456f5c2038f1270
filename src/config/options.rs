// src/config/options.rs
use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::UsageError;

/// Metric the region table is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Read,
    Write,
    Total,
}

impl FromStr for SortField {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" => Ok(SortField::Read),
            "w" => Ok(SortField::Write),
            "t" => Ok(SortField::Total),
            _ => Err(UsageError::new("Please input 'w' or 'r' or 't'")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl FromStr for Direction {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inc" => Ok(Direction::Ascending),
            "desc" => Ok(Direction::Descending),
            _ => Err(UsageError::new("Please input 'inc' or 'desc'")),
        }
    }
}

/// Everything one run needs. Built once from argv, then only borrowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub target_url: String,
    pub sort_field: SortField,
    pub direction: Direction,
    output_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(
        target_url: impl Into<String>,
        sort_field: SortField,
        direction: Direction,
        output_path: Option<PathBuf>,
    ) -> Self {
        // An empty path means "don't persist"
        let output_path = output_path.filter(|p| !p.as_os_str().is_empty());
        Self { target_url: target_url.into(), sort_field, direction, output_path }
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output_path.as_ref()
    }
}

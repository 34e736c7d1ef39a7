//! Normalizes the line-based OCR output into a stat record.
//!
//! The OCR reader prints one item per line:
//!
//! ```text
//! HOME_TEAM:Arsenal
//! AWAY_TEAM:Chelsea
//! STAT:possession|55%|45%
//! ```
//!
//! Anything else is noise and gets skipped line by line.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StatParseError;

const HOME_TEAM_PREFIX: &str = "HOME_TEAM:";
const AWAY_TEAM_PREFIX: &str = "AWAY_TEAM:";
const STAT_PREFIX: &str = "STAT:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawStatLine {
    HomeTeam(String),
    AwayTeam(String),
    Stat {
        name: String,
        home: String,
        away: String,
    },
}

/// Raw, still string-typed values for one stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValues {
    pub home: String,
    pub away: String,
}

/// Lower-cased stat name -> raw home/away values.
///
/// A missing key means the stat was never observed. Nothing is defaulted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatRecord {
    entries: BTreeMap<String, StatValues>,
}

impl StatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&StatValues> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Last write wins. Keys are normalized the same way OCR stat names are.
    pub fn insert(&mut self, name: &str, home: impl Into<String>, away: impl Into<String>) {
        self.entries.insert(
            normalize_stat_name(name),
            StatValues {
                home: home.into(),
                away: away.into(),
            },
        );
    }

    /// Copies every entry of `other` over this record.
    pub fn overlay(&mut self, other: &StatRecord) {
        for (name, values) in &other.entries {
            self.entries.insert(name.clone(), values.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatValues)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Team names plus stats recovered from one OCR run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStats {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub record: StatRecord,
}

pub fn parse_line(raw: &str) -> Option<RawStatLine> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(rest) = line.strip_prefix(HOME_TEAM_PREFIX) {
        return Some(RawStatLine::HomeTeam(rest.trim().to_string()));
    }
    if let Some(rest) = line.strip_prefix(AWAY_TEAM_PREFIX) {
        return Some(RawStatLine::AwayTeam(rest.trim().to_string()));
    }
    if let Some(rest) = line.strip_prefix(STAT_PREFIX) {
        let mut fields = rest.split('|');
        let (Some(name), Some(home), Some(away)) = (fields.next(), fields.next(), fields.next())
        else {
            debug!(line, "skipping malformed stat line");
            return None;
        };
        return Some(RawStatLine::Stat {
            name: normalize_stat_name(name),
            home: home.trim().to_string(),
            away: away.trim().to_string(),
        });
    }

    debug!(line, "ignoring unrecognized line");
    None
}

pub fn build_stat_record<I>(lines: I) -> Result<ParsedStats, StatParseError>
where
    I: IntoIterator<Item = RawStatLine>,
{
    let mut out = ParsedStats::default();
    for line in lines {
        match line {
            RawStatLine::HomeTeam(name) => out.home_team = Some(name),
            RawStatLine::AwayTeam(name) => out.away_team = Some(name),
            RawStatLine::Stat { name, home, away } => {
                out.record.entries.insert(name, StatValues { home, away });
            }
        }
    }

    if out.home_team.is_none() && out.away_team.is_none() && out.record.is_empty() {
        warn!("no usable data recovered from stat lines");
        return Err(StatParseError::NoUsableData);
    }
    Ok(out)
}

/// Parses a full OCR dump (one item per line).
pub fn parse_ocr_output(text: &str) -> Result<ParsedStats, StatParseError> {
    build_stat_record(text.lines().filter_map(parse_line))
}

/// Parses a raw stat cell such as `"55%"`, `"1.72"` or `"12 (5/10)"`.
///
/// `None` means unavailable, never zero.
pub fn parse_number(value: &str) -> Option<f64> {
    let s = value.trim();
    if s.is_empty() {
        return None;
    }
    let s = s.strip_suffix('%').unwrap_or(s);
    let head = s.split_whitespace().next()?;
    head.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn normalize_stat_name(name: &str) -> String {
    name.trim().to_lowercase()
}

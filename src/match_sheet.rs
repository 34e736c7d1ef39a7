//! Hand-filled match sheet: everything the reporter would otherwise be asked for.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;
use crate::significance::{Competition, MatchContext, RivalryContext, SEASON_MATCHES, Side};
use crate::stat_lines::StatRecord;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSheet {
    pub competition: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub side: String,
    #[serde(default)]
    pub standings_home: Option<i32>,
    #[serde(default)]
    pub standings_away: Option<i32>,
    #[serde(default)]
    pub match_number: Option<u32>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub home_goals: u32,
    #[serde(default)]
    pub away_goals: u32,
    #[serde(default)]
    pub home_scorers: Vec<String>,
    #[serde(default)]
    pub away_scorers: Vec<String>,
    /// Manually keyed stats, `name -> [home, away]`.
    #[serde(default)]
    pub stats: BTreeMap<String, (SheetCell, SheetCell)>,
}

/// Stat cells may be typed either as JSON strings or numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetCell {
    Number(serde_json::Number),
    Text(String),
}

impl SheetCell {
    fn to_raw(&self) -> String {
        match self {
            SheetCell::Number(n) => n.to_string(),
            SheetCell::Text(s) => s.trim().to_string(),
        }
    }
}

pub fn parse_match_sheet_json(raw: &str) -> Result<MatchSheet, SheetError> {
    Ok(serde_json::from_str(raw)?)
}

impl MatchSheet {
    pub fn context(&self) -> Result<MatchContext, SheetError> {
        let competition = match self.competition.trim().to_lowercase().as_str() {
            "ucl" | "champions league" | "continental" | "continental cup" => {
                Competition::ContinentalCup
            }
            "domestic cup" | "domestic" | "cup" => Competition::DomesticCup,
            "derby" | "rivalry" => Competition::Rivalry(self.rivalry()?),
            other => return Err(SheetError::UnknownCompetition(other.to_string())),
        };

        let side = match self.side.trim().to_lowercase().as_str() {
            "home" => Side::Home,
            "away" => Side::Away,
            "neutral" | "" => Side::Neutral,
            other => return Err(SheetError::UnknownSide(other.to_string())),
        };

        Ok(MatchContext {
            competition,
            stage: self.stage.trim().to_string(),
            side,
        })
    }

    pub fn stat_record(&self) -> StatRecord {
        let mut record = StatRecord::new();
        for (name, (home, away)) in &self.stats {
            record.insert(name, home.to_raw(), away.to_raw());
        }
        record
    }

    pub fn home_scorers(&self) -> Vec<String> {
        clean_names(&self.home_scorers)
    }

    pub fn away_scorers(&self) -> Vec<String> {
        clean_names(&self.away_scorers)
    }

    fn rivalry(&self) -> Result<RivalryContext, SheetError> {
        let standings_home = self
            .standings_home
            .ok_or(SheetError::MissingRivalryField("standings_home"))?;
        let standings_away = self
            .standings_away
            .ok_or(SheetError::MissingRivalryField("standings_away"))?;
        let match_ordinal = self
            .match_number
            .ok_or(SheetError::MissingRivalryField("match_number"))?;
        if !(1..=SEASON_MATCHES).contains(&match_ordinal) {
            return Err(SheetError::MatchNumberOutOfRange(
                match_ordinal,
                SEASON_MATCHES,
            ));
        }
        Ok(RivalryContext {
            standings_home,
            standings_away,
            match_ordinal,
        })
    }
}

fn clean_names(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

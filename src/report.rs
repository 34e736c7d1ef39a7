use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SheetError;
use crate::match_sheet::MatchSheet;
use crate::narrative::{NarrativeResult, compute_narrative};
use crate::significance::{ImportanceResult, MatchContext, compute_importance};
use crate::stat_lines::{ParsedStats, StatRecord};
use crate::stat_resolve::MatchStats;

const FALLBACK_HOME: &str = "Home";
const FALLBACK_AWAY: &str = "Away";
// Placeholder the OCR reader prints when it could not read a team header.
const OCR_UNKNOWN_TEAM: &str = "unknown";

/// Everything the prompt renderer needs for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub context: MatchContext,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub home_scorers: Vec<String>,
    pub away_scorers: Vec<String>,
    pub stats: MatchStats,
    pub importance: ImportanceResult,
    pub narrative: NarrativeResult,
}

impl MatchReport {
    /// Builds a report from a match sheet and, optionally, an OCR read of the
    /// stats screen. Sheet values win over OCR values.
    pub fn build(sheet: &MatchSheet, ocr: Option<&ParsedStats>) -> Result<Self, SheetError> {
        let context = sheet.context()?;

        let mut record = StatRecord::new();
        if let Some(parsed) = ocr {
            record.overlay(&parsed.record);
        }
        record.overlay(&sheet.stat_record());

        let home_team = pick_team(
            sheet.home_team.as_deref(),
            ocr.and_then(|p| p.home_team.as_deref()),
            FALLBACK_HOME,
        );
        let away_team = pick_team(
            sheet.away_team.as_deref(),
            ocr.and_then(|p| p.away_team.as_deref()),
            FALLBACK_AWAY,
        );

        let mut report = Self::from_parts(
            context,
            home_team,
            away_team,
            sheet.home_goals,
            sheet.away_goals,
            &record,
        );
        report.home_scorers = sheet.home_scorers();
        report.away_scorers = sheet.away_scorers();
        Ok(report)
    }

    pub fn from_parts(
        context: MatchContext,
        home_team: String,
        away_team: String,
        home_goals: u32,
        away_goals: u32,
        record: &StatRecord,
    ) -> Self {
        let stats = MatchStats::from_record(record);
        let importance = compute_importance(&context);
        let narrative = compute_narrative(&home_team, &away_team, home_goals, away_goals, &stats);
        debug!(
            importance = importance.score,
            band = importance.band.label(),
            entertainment = narrative.entertainment_label.as_str(),
            aggression = narrative.aggression_label.as_str(),
            "match report built"
        );

        Self {
            context,
            home_team,
            away_team,
            home_goals,
            away_goals,
            home_scorers: Vec::new(),
            away_scorers: Vec::new(),
            stats,
            importance,
            narrative,
        }
    }

    pub fn score_line(&self) -> String {
        format!("{}-{}", self.home_goals, self.away_goals)
    }
}

fn pick_team(sheet: Option<&str>, ocr: Option<&str>, fallback: &str) -> String {
    [sheet, ocr]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty() && !name.eq_ignore_ascii_case(OCR_UNKNOWN_TEAM))
        .unwrap_or(fallback)
        .to_string()
}

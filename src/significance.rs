use serde::{Deserialize, Serialize};

pub const SEASON_MATCHES: u32 = 34;

const CONTINENTAL_STAGE_SCORES: &[(&str, f64)] = &[
    ("leaguephase", 2.0),
    ("ro32", 4.0),
    ("ro16", 5.0),
    ("qf", 6.0),
    ("sf", 8.0),
    ("final", 10.0),
];
const CONTINENTAL_DEFAULT: f64 = 2.0;
const AWAY_KNOCKOUT_MULTIPLIER: f64 = 1.3;

const DOMESTIC_STAGE_SCORES: &[(&str, f64)] = &[("qf", 2.0), ("sf", 3.0), ("final", 4.0)];
const DOMESTIC_DEFAULT: f64 = 2.0;

// (low inclusive, high exclusive, band), checked in order.
const IMPORTANCE_BANDS: &[(f64, f64, ImportanceBand)] = &[
    (0.0, 1.0, ImportanceBand::Low),
    (1.0, 2.0, ImportanceBand::Moderate),
    (2.0, 4.0, ImportanceBand::High),
    (4.0, 7.0, ImportanceBand::VeryHigh),
    (7.0, f64::INFINITY, ImportanceBand::ExtremelyHigh),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
    Neutral,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
            Side::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RivalryContext {
    pub standings_home: i32,
    pub standings_away: i32,
    /// 1-based position of the fixture in the league season.
    pub match_ordinal: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Competition {
    ContinentalCup,
    DomesticCup,
    Rivalry(RivalryContext),
}

impl Competition {
    pub fn label(&self) -> &'static str {
        match self {
            Competition::ContinentalCup => "UCL",
            Competition::DomesticCup => "DOMESTIC CUP",
            Competition::Rivalry(_) => "DERBY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchContext {
    pub competition: Competition,
    pub stage: String,
    pub side: Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportanceBand {
    Low,
    Moderate,
    High,
    VeryHigh,
    ExtremelyHigh,
}

impl ImportanceBand {
    pub fn label(self) -> &'static str {
        match self {
            ImportanceBand::Low => "Low importance",
            ImportanceBand::Moderate => "Moderate importance",
            ImportanceBand::High => "High importance",
            ImportanceBand::VeryHigh => "Very high importance",
            ImportanceBand::ExtremelyHigh => "Extremely high importance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonPhase {
    Early,
    Mid,
    Late,
}

impl SeasonPhase {
    pub fn from_ordinal(match_ordinal: u32) -> Self {
        if match_ordinal <= 8 {
            SeasonPhase::Early
        } else if match_ordinal <= 24 {
            SeasonPhase::Mid
        } else {
            SeasonPhase::Late
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            SeasonPhase::Early => 0.8,
            SeasonPhase::Mid => 1.0,
            SeasonPhase::Late => 1.3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeasonPhase::Early => "early season",
            SeasonPhase::Mid => "mid-season",
            SeasonPhase::Late => "late season",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImportanceResult {
    pub score: f64,
    pub band: ImportanceBand,
    /// Only set for rivalry matches.
    pub season_phase: Option<SeasonPhase>,
}

pub fn compute_importance(ctx: &MatchContext) -> ImportanceResult {
    let stage = normalize_stage(&ctx.stage);
    let (score, season_phase) = match ctx.competition {
        Competition::ContinentalCup => {
            let base = stage_score(CONTINENTAL_STAGE_SCORES, &stage, CONTINENTAL_DEFAULT);
            let knockout_leg = stage != "leaguephase" && stage != "final";
            if ctx.side == Side::Away && knockout_leg {
                (base * AWAY_KNOCKOUT_MULTIPLIER, None)
            } else {
                (base, None)
            }
        }
        Competition::DomesticCup => (
            stage_score(DOMESTIC_STAGE_SCORES, &stage, DOMESTIC_DEFAULT),
            None,
        ),
        Competition::Rivalry(rivalry) => {
            let phase = SeasonPhase::from_ordinal(rivalry.match_ordinal);
            (rivalry_base(&rivalry) * phase.multiplier(), Some(phase))
        }
    };

    ImportanceResult {
        score,
        band: classify_importance(score),
        season_phase,
    }
}

pub fn classify_importance(score: f64) -> ImportanceBand {
    IMPORTANCE_BANDS
        .iter()
        .find(|(low, high, _)| *low <= score && score < *high)
        .map(|(_, _, band)| *band)
        // Negative or NaN scores cannot come out of `compute_importance`.
        .unwrap_or(ImportanceBand::Low)
}

fn rivalry_base(rivalry: &RivalryContext) -> f64 {
    let gap = rivalry.standings_home.abs_diff(rivalry.standings_away);
    if gap <= 3 {
        7.0
    } else if gap <= 10 {
        5.0
    } else {
        3.0
    }
}

fn stage_score(table: &[(&str, f64)], stage: &str, default: f64) -> f64 {
    table
        .iter()
        .find(|(name, _)| *name == stage)
        .map(|(_, score)| *score)
        .unwrap_or(default)
}

/// `"League Phase"`, `"league_phase"` and `"leaguePhase"` all become `"leaguephase"`.
fn normalize_stage(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect();
    match compact.as_str() {
        "quarterfinal" | "quarterfinals" => "qf".to_string(),
        "semifinal" | "semifinals" => "sf".to_string(),
        "roundof16" | "last16" => "ro16".to_string(),
        "roundof32" | "last32" => "ro32".to_string(),
        _ => compact,
    }
}

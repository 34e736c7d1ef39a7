use serde::{Deserialize, Serialize};

use crate::stat_resolve::{MatchStats, StatKind};

pub const EQUALLY_AGGRESSIVE: &str = "Both teams equally aggressive";
pub const EQUALLY_CALM: &str = "Both teams equally calm";

const MATCH_RED_WEIGHT: u32 = 2;
// Team-level red cards weigh more than in the match-wide score.
const TEAM_RED_WEIGHT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entertainment {
    pub score: u8,
    pub label: &'static str,
}

pub fn compute_entertainment(home_goals: u32, away_goals: u32) -> Entertainment {
    let total = home_goals.saturating_add(away_goals);
    let (score, label) = match total {
        0 => (0, "Boring"),
        1 => (1, "Alright"),
        2..=3 => (2, "Decently fun"),
        4..=6 => (5, "Great game"),
        _ => (10, "Incredible match"),
    };
    Entertainment { score, label }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Aggression {
    /// `yellow total + 2 * red total`.
    pub aggression_score: u32,
    pub match_score: u8,
    pub match_label: &'static str,
    pub home_team_score: u32,
    pub away_team_score: u32,
}

pub fn compute_aggression(
    home_yellow: u32,
    away_yellow: u32,
    home_red: u32,
    away_red: u32,
) -> Aggression {
    // Counts come from noisy OCR, so the sums saturate instead of overflowing.
    let yellow_total = home_yellow.saturating_add(away_yellow);
    let red_total = home_red.saturating_add(away_red);
    let aggression_score = yellow_total.saturating_add(MATCH_RED_WEIGHT.saturating_mul(red_total));

    let (match_score, match_label) = if aggression_score == 0 {
        (0, "Peaceful")
    } else if aggression_score >= 10 {
        (3, "Brawl")
    } else if aggression_score >= 5 {
        (2, "Heated")
    } else {
        (1, "Regular")
    };

    Aggression {
        aggression_score,
        match_score,
        match_label,
        home_team_score: team_score(home_yellow, home_red),
        away_team_score: team_score(away_yellow, away_red),
    }
}

fn team_score(yellow: u32, red: u32) -> u32 {
    yellow.saturating_add(TEAM_RED_WEIGHT.saturating_mul(red))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineComparison {
    pub more_aggressive: String,
    pub less_aggressive: String,
    pub gap: u32,
    pub narrative: String,
}

pub fn compare_discipline(
    home_team: &str,
    away_team: &str,
    aggression: &Aggression,
) -> DisciplineComparison {
    let (home, away) = (aggression.home_team_score, aggression.away_team_score);
    let (more, less) = if home > away {
        (home_team, away_team)
    } else if away > home {
        (away_team, home_team)
    } else {
        (EQUALLY_AGGRESSIVE, EQUALLY_CALM)
    };
    let gap = home.abs_diff(away);

    let narrative = match gap {
        0 => "Both teams showed similar discipline".to_string(),
        1..=2 => format!("{more} was slightly more aggressive than {less}"),
        3..=5 => format!("{more} was noticeably more aggressive than {less}"),
        _ => format!("{more} was significantly more aggressive than {less}"),
    };

    DisciplineComparison {
        more_aggressive: more.to_string(),
        less_aggressive: less.to_string(),
        gap,
        narrative,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Efficiency {
    pub shot_accuracy_pct: f64,
    pub xg_efficiency_pct: f64,
}

pub fn compute_efficiency(
    goals: f64,
    xg: f64,
    shots_on_target: f64,
    total_shots: f64,
) -> Efficiency {
    let shot_accuracy_pct = if total_shots == 0.0 {
        0.0
    } else {
        shots_on_target / total_shots * 100.0
    };
    let xg_efficiency_pct = if xg == 0.0 { 0.0 } else { goals / xg * 100.0 };
    Efficiency {
        shot_accuracy_pct,
        xg_efficiency_pct,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeResult {
    pub entertainment_score: u8,
    pub entertainment_label: String,
    pub aggression_score: u8,
    pub aggression_label: String,
    pub more_aggressive_team: String,
    pub less_aggressive_team: String,
    pub aggression_gap: u32,
    pub aggression_gap_narrative: String,
    pub home_shot_accuracy: f64,
    pub away_shot_accuracy: f64,
    pub home_xg_efficiency: f64,
    pub away_xg_efficiency: f64,
}

/// Runs every narrative signal for one match. Cards, xG and shots come from
/// the resolved stats; unobserved stats count as zero.
pub fn compute_narrative(
    home_team: &str,
    away_team: &str,
    home_goals: u32,
    away_goals: u32,
    stats: &MatchStats,
) -> NarrativeResult {
    let entertainment = compute_entertainment(home_goals, away_goals);

    let (home_yellow, away_yellow) = stats.count(StatKind::YellowCards);
    let (home_red, away_red) = stats.count(StatKind::RedCards);
    let aggression = compute_aggression(home_yellow, away_yellow, home_red, away_red);
    let discipline = compare_discipline(home_team, away_team, &aggression);

    let xg = stats.get(StatKind::Xg);
    let on_target = stats.get(StatKind::ShotsOnTarget);
    let shots = stats.get(StatKind::Shots);
    let home_eff = compute_efficiency(home_goals as f64, xg.home, on_target.home, shots.home);
    let away_eff = compute_efficiency(away_goals as f64, xg.away, on_target.away, shots.away);

    NarrativeResult {
        entertainment_score: entertainment.score,
        entertainment_label: entertainment.label.to_string(),
        aggression_score: aggression.match_score,
        aggression_label: aggression.match_label.to_string(),
        more_aggressive_team: discipline.more_aggressive,
        less_aggressive_team: discipline.less_aggressive,
        aggression_gap: discipline.gap,
        aggression_gap_narrative: discipline.narrative,
        home_shot_accuracy: home_eff.shot_accuracy_pct,
        away_shot_accuracy: away_eff.shot_accuracy_pct,
        home_xg_efficiency: home_eff.xg_efficiency_pct,
        away_xg_efficiency: away_eff.xg_efficiency_pct,
    }
}

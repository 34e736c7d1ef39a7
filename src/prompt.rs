//! Press-conference prompt built from a finished match report.

use std::fmt::Write;

use crate::report::MatchReport;
use crate::stat_resolve::StatKind;

// Printed explicitly in MATCH STATS, so left out of the extra block.
const HEADLINE_STATS: &[StatKind] = &[
    StatKind::Xg,
    StatKind::Possession,
    StatKind::ShotsOnTarget,
    StatKind::YellowCards,
    StatKind::RedCards,
];

const GUIDELINES: &[&str] = &[
    "You are an experienced, insightful football journalist who asks probing questions that reveal deeper truths",
    "Focus on the psychological, tactical, and emotional aspects of the match rather than basic facts",
    "Ask about decision-making, team mentality, pressure handling, and strategic choices",
    "Consider the broader narrative: What does this result mean for the season? How does it change expectations?",
    "DO NOT invent or assume details not provided (like the fashion in which goals were scored or specific incidents)",
    "Base questions on the stats and context given, but explore their deeper implications",
    "Ask questions that would make a manager think deeply about their approach and decisions",
    "Consider the human drama: leadership under pressure, team psychology, managing expectations",
    "Make each question feel like it comes from someone who truly understands football's complexities",
];

const THEMES: &[&str] = &[
    "How tactical decisions influenced the outcome",
    "The stage of the season in which this match was played (early season, mid-season, season's end)",
    "The psychological impact of the result on players and season trajectory",
    "Leadership and decision-making under pressure",
    "Team mentality and character revealed by the performance",
    "Strategic implications for upcoming matches",
    "How this result fits into the bigger picture of the season",
];

pub const QUESTION_COUNT: usize = 5;

pub fn render_prompt(report: &MatchReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_prompt(&mut out, report);
    out
}

fn write_prompt(out: &mut String, r: &MatchReport) -> std::fmt::Result {
    let n = &r.narrative;
    let side = r.context.side.label();

    writeln!(out, "You are a football press conference reporter.")?;
    writeln!(out)?;
    writeln!(out, "MATCH CONTEXT:")?;
    writeln!(out, "Setting: {}", r.context.competition.label())?;
    if !r.context.stage.is_empty() {
        writeln!(out, "Stage: {}", r.context.stage)?;
    }
    if let Some(phase) = r.importance.season_phase {
        writeln!(out, "Season stage: {}", phase.label())?;
    }
    writeln!(
        out,
        "Importance: {:.1}/10 ({})",
        r.importance.score,
        r.importance.band.label()
    )?;
    writeln!(
        out,
        "Match: {} {} {} ({side})",
        r.home_team,
        r.score_line(),
        r.away_team
    )?;
    writeln!(out, "The manager is managing {side}")?;
    writeln!(out)?;

    writeln!(out, "MATCH STATS:")?;
    writeln!(out, "Home goal scorers: {}", join_or_none(&r.home_scorers))?;
    writeln!(out, "Away goal scorers: {}", join_or_none(&r.away_scorers))?;
    let xg = r.stats.get(StatKind::Xg);
    writeln!(out, "Expected Goals: {} vs {}", fmt_num(xg.home), fmt_num(xg.away))?;
    let pos = r.stats.get(StatKind::Possession);
    writeln!(out, "Possession: {}% vs {}%", fmt_num(pos.home), fmt_num(pos.away))?;
    let sot = r.stats.get(StatKind::ShotsOnTarget);
    writeln!(out, "Shots on target: {} vs {}", fmt_num(sot.home), fmt_num(sot.away))?;
    let (yh, ya) = r.stats.count(StatKind::YellowCards);
    writeln!(out, "Yellow cards: {yh} vs {ya}")?;
    let (rh, ra) = r.stats.count(StatKind::RedCards);
    writeln!(out, "Red cards: {rh} vs {ra}")?;
    if r.stats.observed(StatKind::Shots) {
        writeln!(
            out,
            "Shot accuracy: {:.0}% vs {:.0}%",
            n.home_shot_accuracy, n.away_shot_accuracy
        )?;
    }
    if r.stats.observed(StatKind::Xg) {
        writeln!(
            out,
            "Finishing vs xG: {:.0}% vs {:.0}%",
            n.home_xg_efficiency, n.away_xg_efficiency
        )?;
    }
    for kind in StatKind::ALL {
        if HEADLINE_STATS.contains(&kind) || !r.stats.observed(kind) {
            continue;
        }
        let pair = r.stats.get(kind);
        writeln!(
            out,
            "{}: {} vs {}",
            kind.label(),
            fmt_num(pair.home),
            fmt_num(pair.away)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "MATCH CHARACTER:")?;
    writeln!(out, "Team Discipline: {}", n.aggression_gap_narrative)?;
    writeln!(out, "Match Atmosphere: {}", n.aggression_label)?;
    writeln!(out, "Entertainment Value: {}", n.entertainment_label)?;
    writeln!(out)?;

    writeln!(
        out,
        "Generate {QUESTION_COUNT} realistic press conference questions a reporter might ask based on these stats and the match importance."
    )?;
    writeln!(out)?;
    writeln!(out, "GUIDELINES:")?;
    for line in GUIDELINES {
        writeln!(out, "- {line}")?;
    }
    writeln!(out)?;
    writeln!(out, "QUESTION THEMES TO EXPLORE:")?;
    for line in THEMES {
        writeln!(out, "- {line}")?;
    }
    writeln!(out)?;
    write!(out, "Only ask the questions - no introduction or commentary.")
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}

/// `2.0` prints as `2`, `1.75` as `1.75`.
fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_sheet::parse_match_sheet_json;

    fn report(json: &str) -> MatchReport {
        let sheet = parse_match_sheet_json(json).unwrap();
        MatchReport::build(&sheet, None).unwrap()
    }

    #[test]
    fn prompt_carries_context_and_character() {
        let r = report(
            r#"{"competition":"derby","side":"home","standings_home":10,"standings_away":12,
                "match_number":30,"home_team":"Dortmund","away_team":"Schalke",
                "home_goals":2,"away_goals":2,"home_scorers":["Adeyemi"," "],
                "stats":{"yellow cards":["2","0"],"red cards":["0","1"],"xg":["1.75","0.9"]}}"#,
        );
        let prompt = render_prompt(&r);
        assert!(prompt.contains("Setting: DERBY"));
        assert!(prompt.contains("Season stage: late season"));
        assert!(prompt.contains("Importance: 9.1/10 (Extremely high importance)"));
        assert!(prompt.contains("Match: Dortmund 2-2 Schalke (home)"));
        assert!(prompt.contains("Home goal scorers: Adeyemi\n"));
        assert!(prompt.contains("Away goal scorers: None"));
        assert!(prompt.contains("Expected Goals: 1.75 vs 0.9"));
        assert!(prompt.contains("Team Discipline: Schalke was slightly more aggressive than Dortmund"));
        assert!(prompt.contains("Entertainment Value: Great game"));
        assert!(prompt.ends_with("no introduction or commentary."));
    }

    #[test]
    fn extra_stats_only_when_observed() {
        let r = report(r#"{"competition":"cup","stats":{"corners":[7,2]}}"#);
        let prompt = render_prompt(&r);
        assert!(prompt.contains("Corners: 7 vs 2"));
        assert!(!prompt.contains("Fouls:"));
        assert!(!prompt.contains("Shot accuracy"));
    }

    #[test]
    fn numbers_print_compactly() {
        assert_eq!(fmt_num(2.0), "2");
        assert_eq!(fmt_num(1.75), "1.75");
        assert_eq!(fmt_num(0.9), "0.9");
        assert_eq!(fmt_num(0.001), "0");
    }
}

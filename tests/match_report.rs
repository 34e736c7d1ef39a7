use std::fs;
use std::path::PathBuf;

use matchday_presser::match_sheet::parse_match_sheet_json;
use matchday_presser::narrative::{EQUALLY_AGGRESSIVE, EQUALLY_CALM};
use matchday_presser::prompt::render_prompt;
use matchday_presser::report::MatchReport;
use matchday_presser::significance::{ImportanceBand, SeasonPhase};
use matchday_presser::stat_lines::parse_ocr_output;
use matchday_presser::stat_resolve::StatKind;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn derby_report() -> MatchReport {
    let sheet = parse_match_sheet_json(&read_fixture("derby_sheet.json")).expect("valid sheet");
    let ocr = parse_ocr_output(&read_fixture("ocr_output.txt")).expect("valid ocr dump");
    MatchReport::build(&sheet, Some(&ocr)).expect("report builds")
}

#[test]
fn derby_with_ocr_stats() {
    let report = derby_report();

    assert_eq!(report.home_team, "Arsenal");
    assert_eq!(report.away_team, "Chelsea");
    assert!((report.importance.score - 9.1).abs() < 1e-9);
    assert_eq!(report.importance.band, ImportanceBand::ExtremelyHigh);
    assert_eq!(report.importance.season_phase, Some(SeasonPhase::Late));

    // Sheet xG overrides the OCR read.
    assert_eq!(report.stats.get(StatKind::Xg).home, 2.4);

    let n = &report.narrative;
    assert_eq!(n.entertainment_score, 5);
    assert_eq!(n.aggression_score, 2);
    assert_eq!(n.aggression_label, "Heated");
    assert_eq!(n.more_aggressive_team, "Chelsea");
    assert_eq!(n.less_aggressive_team, "Arsenal");
    assert_eq!(n.aggression_gap, 5);
    assert_eq!(
        n.aggression_gap_narrative,
        "Chelsea was noticeably more aggressive than Arsenal"
    );
    assert!((n.home_shot_accuracy - 600.0 / 14.0).abs() < 1e-9);
    assert!((n.away_shot_accuracy - 300.0 / 9.0).abs() < 1e-9);
    assert!((n.home_xg_efficiency - 125.0).abs() < 1e-9);
    assert!((n.away_xg_efficiency - 100.0 / 0.85).abs() < 1e-9);
}

#[test]
fn away_quarter_final_without_stats() {
    let sheet = parse_match_sheet_json(&read_fixture("ucl_sheet.json")).expect("valid sheet");
    let report = MatchReport::build(&sheet, None).expect("report builds");

    assert!((report.importance.score - 7.8).abs() < 1e-9);
    assert_eq!(report.importance.band, ImportanceBand::ExtremelyHigh);
    assert!(report.importance.season_phase.is_none());

    let n = &report.narrative;
    assert_eq!(n.entertainment_label, "Boring");
    assert_eq!(n.aggression_label, "Peaceful");
    assert_eq!(n.more_aggressive_team, EQUALLY_AGGRESSIVE);
    assert_eq!(n.less_aggressive_team, EQUALLY_CALM);
    assert_eq!(n.home_shot_accuracy, 0.0);
    assert_eq!(n.away_xg_efficiency, 0.0);
}

#[test]
fn prompt_from_derby_report() {
    let prompt = render_prompt(&derby_report());
    assert!(prompt.starts_with("You are a football press conference reporter."));
    assert!(prompt.contains("Match: Arsenal 3-1 Chelsea (home)"));
    assert!(prompt.contains("Home goal scorers: Saka, Havertz, Saka"));
    assert!(prompt.contains("Possession: 58% vs 42%"));
    assert!(prompt.contains("Yellow cards: 1 vs 3"));
    assert!(prompt.contains("Red cards: 0 vs 1"));
    assert!(prompt.contains("Corners: 7 vs 2"));
    assert!(prompt.contains("Match Atmosphere: Heated"));
}

#[test]
fn report_serializes_for_consumers() {
    let json = serde_json::to_value(derby_report()).expect("report serializes");
    assert_eq!(json["importance"]["band"], "extremely_high");
    assert_eq!(json["narrative"]["entertainment_label"], "Great game");
    assert_eq!(json["context"]["competition"]["type"], "rivalry");
    assert_eq!(json["stats"]["values"]["possession"]["home"], 58.0);
}

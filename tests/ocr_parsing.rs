use std::fs;
use std::path::PathBuf;

use matchday_presser::error::StatParseError;
use matchday_presser::stat_lines::{parse_line, parse_number, parse_ocr_output};
use matchday_presser::stat_resolve::{MatchStats, StatKind, resolve};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_ocr_fixture() {
    let parsed = parse_ocr_output(&read_fixture("ocr_output.txt")).expect("fixture should parse");
    assert_eq!(parsed.home_team.as_deref(), Some("Arsenal"));
    assert_eq!(parsed.away_team.as_deref(), Some("Chelsea"));
    assert_eq!(parsed.record.len(), 11);
    assert!(!parsed.record.contains("onlyonefield"));
    assert!(!parsed.record.contains("tackles won"));

    let possession = parsed.record.get("possession").expect("possession present");
    assert_eq!(possession.home, "58%");
    assert_eq!(possession.away, "42%");
}

#[test]
fn resolves_fixture_stats() {
    let parsed = parse_ocr_output(&read_fixture("ocr_output.txt")).expect("fixture should parse");
    let stats = MatchStats::from_record(&parsed.record);

    assert_eq!(stats.get(StatKind::Possession).home, 58.0);
    assert_eq!(stats.get(StatKind::Xg).away, 0.85);
    assert_eq!(stats.count(StatKind::RedCards), (0, 1));
    assert!(stats.observed(StatKind::PassesCompleted));
    assert!(!stats.observed(StatKind::TacklesWon));
    assert!(!stats.observed(StatKind::HighIntensitySprints));
}

#[test]
fn possession_line_round_trip() {
    let line = parse_line("STAT:possession|55%|45%").expect("valid line");
    let parsed = matchday_presser::stat_lines::build_stat_record([line]).expect("has a stat");
    let values = parsed.record.get("possession").expect("possession present");
    assert_eq!(values.home, "55%");
    assert_eq!(values.away, "45%");
    assert_eq!(parse_number(&values.home), Some(55.0));
}

#[test]
fn noise_only_dump_signals_no_data() {
    let err = parse_ocr_output("=== ALL OCR LINES ===\nSTAT:onlyonefield\n").unwrap_err();
    assert_eq!(err, StatParseError::NoUsableData);
}

#[test]
fn alias_fallback_through_ocr_names() {
    let parsed = parse_ocr_output("STAT:Expected Goals|1.4|0.6\nSTAT:offside|2|N/A\n")
        .expect("has stats");
    assert_eq!(
        resolve(&parsed.record, &["xg", "expected goals"], 0.0, 0.0),
        (1.4, 0.6)
    );
    assert_eq!(
        resolve(&parsed.record, StatKind::Offsides.aliases(), -1.0, -1.0),
        (-1.0, -1.0)
    );
}

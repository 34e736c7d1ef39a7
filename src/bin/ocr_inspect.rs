use std::path::PathBuf;

use anyhow::{Context, Result};

use matchday_presser::ocr;
use matchday_presser::stat_resolve::{MatchStats, StatKind};
use matchday_presser::telemetry::init_tracing;

// Quick look at what the normalizer makes of an OCR dump. No network.
fn main() -> Result<()> {
    init_tracing()?;

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/ocr_output.txt"));

    let parsed = ocr::read_ocr_dump(&path).with_context(|| format!("parse {}", path.display()))?;

    println!("Home: {}", parsed.home_team.as_deref().unwrap_or("-"));
    println!("Away: {}", parsed.away_team.as_deref().unwrap_or("-"));
    println!("Raw stats: {}", parsed.record.len());
    for (name, values) in parsed.record.iter() {
        println!("  {name:<24} {:>8} | {:<8}", values.home, values.away);
    }

    let stats = MatchStats::from_record(&parsed.record);
    println!("Resolved:");
    for kind in StatKind::ALL {
        let pair = stats.get(kind);
        let mark = if stats.observed(kind) { ' ' } else { '*' };
        println!("  {:<24} {:>8.2} | {:<8.2}{mark}", kind.label(), pair.home, pair.away);
    }
    println!("(* = not observed, defaulted)");

    Ok(())
}

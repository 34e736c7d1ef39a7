use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::stat_lines::{StatRecord, parse_number};

/// Returns the first alias whose home and away values both parse, else the defaults.
///
/// Alias order is precedence. A present-but-unparseable alias does not stop the
/// search; a later alias may still supply the pair.
pub fn resolve(
    record: &StatRecord,
    aliases: &[&str],
    default_home: f64,
    default_away: f64,
) -> (f64, f64) {
    resolve_observed(record, aliases).unwrap_or((default_home, default_away))
}

/// Like [`resolve`] but reports a miss as `None` instead of substituting defaults.
pub fn resolve_observed(record: &StatRecord, aliases: &[&str]) -> Option<(f64, f64)> {
    for alias in aliases {
        let key = alias.trim().to_lowercase();
        let Some(values) = record.get(&key) else {
            continue;
        };
        match (parse_number(&values.home), parse_number(&values.away)) {
            (Some(h), Some(a)) => return Some((h, a)),
            _ => {
                debug!(
                    stat = key.as_str(),
                    home = values.home.as_str(),
                    away = values.away.as_str(),
                    "stat present but not numeric on both sides"
                );
            }
        }
    }
    None
}

/// The stats the OCR reader knows how to recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Shots,
    ShotsOnTarget,
    Xg,
    ShotsOffTarget,
    ClearCutChances,
    LongShots,
    Possession,
    Corners,
    Fouls,
    Offsides,
    PassesCompleted,
    CrossesCompleted,
    TacklesWon,
    HeadersWon,
    YellowCards,
    RedCards,
    AverageRating,
    ProgressivePasses,
    HighIntensitySprints,
}

impl StatKind {
    pub const ALL: [StatKind; 19] = [
        StatKind::Shots,
        StatKind::ShotsOnTarget,
        StatKind::Xg,
        StatKind::ShotsOffTarget,
        StatKind::ClearCutChances,
        StatKind::LongShots,
        StatKind::Possession,
        StatKind::Corners,
        StatKind::Fouls,
        StatKind::Offsides,
        StatKind::PassesCompleted,
        StatKind::CrossesCompleted,
        StatKind::TacklesWon,
        StatKind::HeadersWon,
        StatKind::YellowCards,
        StatKind::RedCards,
        StatKind::AverageRating,
        StatKind::ProgressivePasses,
        StatKind::HighIntensitySprints,
    ];

    /// Accepted names, most preferred first. The first entry is the name the
    /// OCR reader emits.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            StatKind::Shots => &["shots", "total shots"],
            StatKind::ShotsOnTarget => &["on target", "shots on target"],
            StatKind::Xg => &["xg", "expected goals"],
            StatKind::ShotsOffTarget => &["off target", "shots off target"],
            StatKind::ClearCutChances => &["clear cut chances", "big chances"],
            StatKind::LongShots => &["long shots"],
            StatKind::Possession => &["possession", "ball possession"],
            StatKind::Corners => &["corners"],
            StatKind::Fouls => &["fouls"],
            StatKind::Offsides => &["offsides", "offside"],
            StatKind::PassesCompleted => &["passes completed", "pass accuracy"],
            StatKind::CrossesCompleted => &["crosses completed"],
            StatKind::TacklesWon => &["tackles won"],
            StatKind::HeadersWon => &["headers won", "aerials won"],
            StatKind::YellowCards => &["yellow cards", "yellow"],
            StatKind::RedCards => &["red cards", "red"],
            StatKind::AverageRating => &["average rating"],
            StatKind::ProgressivePasses => &["progressive passes"],
            StatKind::HighIntensitySprints => &["high intensity sprints"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Shots => "Shots",
            StatKind::ShotsOnTarget => "Shots on target",
            StatKind::Xg => "Expected Goals",
            StatKind::ShotsOffTarget => "Shots off target",
            StatKind::ClearCutChances => "Clear cut chances",
            StatKind::LongShots => "Long shots",
            StatKind::Possession => "Possession",
            StatKind::Corners => "Corners",
            StatKind::Fouls => "Fouls",
            StatKind::Offsides => "Offsides",
            StatKind::PassesCompleted => "Passes completed",
            StatKind::CrossesCompleted => "Crosses completed",
            StatKind::TacklesWon => "Tackles won",
            StatKind::HeadersWon => "Headers won",
            StatKind::YellowCards => "Yellow cards",
            StatKind::RedCards => "Red cards",
            StatKind::AverageRating => "Average rating",
            StatKind::ProgressivePasses => "Progressive passes",
            StatKind::HighIntensitySprints => "High intensity sprints",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidePair {
    pub home: f64,
    pub away: f64,
}

/// Every known stat resolved to numbers, defaulting to `0 - 0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    values: BTreeMap<StatKind, SidePair>,
    observed: BTreeSet<StatKind>,
}

impl MatchStats {
    pub fn from_record(record: &StatRecord) -> Self {
        let mut out = Self::default();
        for kind in StatKind::ALL {
            let (home, away) = match resolve_observed(record, kind.aliases()) {
                Some(pair) => {
                    out.observed.insert(kind);
                    pair
                }
                None => (0.0, 0.0),
            };
            out.values.insert(kind, SidePair { home, away });
        }
        out
    }

    pub fn get(&self, kind: StatKind) -> SidePair {
        self.values
            .get(&kind)
            .copied()
            .unwrap_or(SidePair { home: 0.0, away: 0.0 })
    }

    /// Whether the value came from the record rather than the default.
    pub fn observed(&self, kind: StatKind) -> bool {
        self.observed.contains(&kind)
    }

    /// Card counts are whole numbers; OCR noise like `2.0` is rounded, negatives clamp to 0.
    pub fn count(&self, kind: StatKind) -> (u32, u32) {
        let pair = self.get(kind);
        (to_count(pair.home), to_count(pair.away))
    }
}

fn to_count(v: f64) -> u32 {
    v.round().max(0.0) as u32
}

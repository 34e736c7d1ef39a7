use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use matchday_presser::match_sheet::parse_match_sheet_json;
use matchday_presser::prompt::render_prompt;
use matchday_presser::report::MatchReport;
use matchday_presser::stat_lines::parse_ocr_output;
use matchday_presser::stat_resolve::MatchStats;

fn bench_ocr_parse(c: &mut Criterion) {
    c.bench_function("ocr_parse", |b| {
        b.iter(|| {
            let parsed = parse_ocr_output(black_box(OCR_DUMP)).unwrap();
            black_box(parsed.record.len());
        })
    });
}

fn bench_stat_resolve(c: &mut Criterion) {
    let parsed = parse_ocr_output(OCR_DUMP).unwrap();
    c.bench_function("stat_resolve_all", |b| {
        b.iter(|| {
            let stats = MatchStats::from_record(black_box(&parsed.record));
            black_box(stats);
        })
    });
}

fn bench_report_and_prompt(c: &mut Criterion) {
    let sheet = parse_match_sheet_json(SHEET_JSON).unwrap();
    let parsed = parse_ocr_output(OCR_DUMP).unwrap();
    c.bench_function("report_and_prompt", |b| {
        b.iter(|| {
            let report = MatchReport::build(black_box(&sheet), Some(&parsed)).unwrap();
            let prompt = render_prompt(&report);
            black_box(prompt.len());
        })
    });
}

criterion_group!(
    benches,
    bench_ocr_parse,
    bench_stat_resolve,
    bench_report_and_prompt
);
criterion_main!(benches);

const OCR_DUMP: &str = "\
HOME_TEAM:Arsenal
AWAY_TEAM:Chelsea
STAT:shots|14|9
STAT:on target|6|3
STAT:xg|2.10|0.85
STAT:off target|5|4
STAT:clear cut chances|3|1
STAT:long shots|4|2
STAT:possession|58%|42%
STAT:corners|7|2
STAT:fouls|9|13
STAT:offsides|1|3
STAT:passes completed|88%|81%
STAT:crosses completed|31%|22%
STAT:tackles won|70%|64%
STAT:headers won|55%|45%
STAT:yellow cards|1|3
STAT:red cards|0|1
STAT:average rating|7.2|6.4
STAT:progressive passes|41|29
STAT:high intensity sprints|112 (40/72)|98
noise line
STAT:broken
";

const SHEET_JSON: &str = r#"{
  "competition": "ucl",
  "stage": "sf",
  "side": "away",
  "home_goals": 2,
  "away_goals": 2,
  "home_scorers": ["Saka", "Rice"],
  "away_scorers": ["Palmer", "Jackson"]
}"#;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use matchday_presser::config::Config;
use matchday_presser::groq::GroqClient;
use matchday_presser::match_sheet::parse_match_sheet_json;
use matchday_presser::ocr;
use matchday_presser::prompt::render_prompt;
use matchday_presser::report::MatchReport;
use matchday_presser::telemetry::init_tracing;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Press conference questions from match stats", long_about = None)]
struct Args {
    /// Match sheet JSON (competition, stage, side, score, optional stats)
    sheet: PathBuf,

    /// Saved OCR output to merge under the sheet's stats
    #[arg(long, conflicts_with = "screenshot")]
    ocr_text: Option<PathBuf>,

    /// Stats screenshot to run through the OCR reader (OCR_BIN)
    #[arg(long)]
    screenshot: Option<PathBuf>,

    /// Print the match report as JSON and exit
    #[arg(long)]
    json: bool,

    /// Print the prompt without calling the question generator
    #[arg(long)]
    prompt_only: bool,
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_tracing()?;

    let args = Args::parse();
    let cfg = Config::from_env();

    let raw = fs::read_to_string(&args.sheet)
        .with_context(|| format!("read match sheet {}", args.sheet.display()))?;
    let sheet = parse_match_sheet_json(&raw).context("parse match sheet")?;

    let ocr_stats = if let Some(path) = &args.ocr_text {
        Some(
            ocr::read_ocr_dump(path)
                .with_context(|| format!("read ocr dump {}", path.display()))?,
        )
    } else if let Some(shot) = &args.screenshot {
        Some(
            ocr::run_ocr(&cfg.ocr_bin, shot)
                .context("ocr failed; fill the stats in the match sheet instead")?,
        )
    } else {
        None
    };

    let report = MatchReport::build(&sheet, ocr_stats.as_ref()).context("invalid match sheet")?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
        return Ok(());
    }

    let prompt = render_prompt(&report);
    if args.prompt_only {
        println!("{prompt}");
        return Ok(());
    }

    let client = GroqClient::from_config(&cfg)?;
    tracing::info!(model = client.model(), "prompt ready");
    let questions = client
        .generate_questions(&prompt)
        .context("question generation failed")?;

    println!("Press Conference Questions:");
    println!("{questions}");
    Ok(())
}

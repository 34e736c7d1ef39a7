pub mod config;
pub mod error;
pub mod groq;
pub mod http_client;
pub mod match_sheet;
pub mod narrative;
pub mod ocr;
pub mod prompt;
pub mod report;
pub mod significance;
pub mod stat_lines;
pub mod stat_resolve;
pub mod telemetry;

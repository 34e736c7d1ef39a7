use thiserror::Error;

/// Failure to recover anything usable from OCR-style stat lines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatParseError {
    #[error("no team names or stats recovered from input")]
    NoUsableData,
}

/// Match sheet could not be turned into a valid match context.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("unknown competition: {0}")]
    UnknownCompetition(String),

    #[error("unknown side designation: {0}")]
    UnknownSide(String),

    #[error("rivalry match is missing required field `{0}`")]
    MissingRivalryField(&'static str),

    #[error("match number {0} is outside the 1..={1} season range")]
    MatchNumberOutOfRange(u32, u32),

    #[error("invalid match sheet json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("failed to launch ocr program `{bin}`: {source}")]
    Launch {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ocr program exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("ocr output could not be read: {0}")]
    Read(#[from] std::io::Error),

    #[error("ocr recovered no usable data")]
    NoData,
}

impl From<StatParseError> for OcrError {
    fn from(err: StatParseError) -> Self {
        match err {
            StatParseError::NoUsableData => OcrError::NoData,
        }
    }
}

#[derive(Error, Debug)]
pub enum GroqError {
    #[error("GROQ_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("failed to build http client: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("http {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid completion json: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response contained no completion text")]
    EmptyResponse,
}

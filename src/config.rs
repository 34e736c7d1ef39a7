use std::path::PathBuf;

const DEFAULT_GROQ_MODEL: &str = "llama3-70b-8192";
const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 5;
const DEFAULT_OCR_BIN: &str = "./ocr";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub groq_base_url: String,
    pub groq_timeout_secs: u64,
    pub ocr_bin: PathBuf,
}

impl Config {
    /// Reads the process environment. Call `dotenvy` first if `.env` files should count.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let groq_timeout_secs = non_empty("GROQ_TIMEOUT_SECS")
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .max(MIN_TIMEOUT_SECS);

        Self {
            groq_api_key: non_empty("GROQ_API_KEY"),
            groq_model: non_empty("GROQ_MODEL").unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
            groq_base_url: non_empty("GROQ_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GROQ_BASE_URL.to_string()),
            groq_timeout_secs,
            ocr_bin: non_empty("OCR_BIN")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OCR_BIN)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[]);
        assert!(cfg.groq_api_key.is_none());
        assert_eq!(cfg.groq_model, "llama3-70b-8192");
        assert_eq!(cfg.groq_base_url, "https://api.groq.com/openai/v1");
        assert_eq!(cfg.groq_timeout_secs, 30);
        assert_eq!(cfg.ocr_bin, PathBuf::from("./ocr"));
    }

    #[test]
    fn overrides_are_read_and_cleaned() {
        let cfg = config(&[
            ("GROQ_API_KEY", " secret "),
            ("GROQ_MODEL", "llama-3.3-70b-versatile"),
            ("GROQ_BASE_URL", "http://localhost:9000/v1/"),
            ("GROQ_TIMEOUT_SECS", "1"),
            ("OCR_BIN", "/usr/local/bin/ocr"),
        ]);
        assert_eq!(cfg.groq_api_key.as_deref(), Some("secret"));
        assert_eq!(cfg.groq_model, "llama-3.3-70b-versatile");
        assert_eq!(cfg.groq_base_url, "http://localhost:9000/v1");
        assert_eq!(cfg.groq_timeout_secs, 5);
        assert_eq!(cfg.ocr_bin, PathBuf::from("/usr/local/bin/ocr"));
    }

    #[test]
    fn blank_and_bad_values_fall_back() {
        let cfg = config(&[("GROQ_API_KEY", "   "), ("GROQ_TIMEOUT_SECS", "soon")]);
        assert!(cfg.groq_api_key.is_none());
        assert_eq!(cfg.groq_timeout_secs, 30);
    }
}

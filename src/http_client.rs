use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::error::GroqError;

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Process-wide blocking client. The timeout of the first call sticks.
pub fn http_client(timeout_secs: u64) -> Result<&'static Client, GroqError> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("matchday_presser/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| GroqError::Client(err.to_string()))
    })
}

// src/core/net.rs
//
// One blocking session per run. The site sets session cookies on first
// contact and serves a stripped-down page to clients without browser
// headers, so the client carries both.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use tracing::debug;

use crate::error::ScrapeError;
use crate::params::{REQUEST_TIMEOUT_SECS, USER_AGENT};

pub struct Session {
    client: Client,
}

impl Session {
    pub fn new() -> Result<Self, ScrapeError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("ro,en;q=0.7"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client })
    }

    /// GET a page and return its body. Anything but 200 is fatal.
    pub fn get(&self, url: &str) -> Result<String, ScrapeError> {
        debug!(url, "fetching");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ScrapeError::Status {
                status: status.as_u16(),
                url: s!(url),
            });
        }
        Ok(response.text()?)
    }
}

// src/core/net.rs
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Result, ScrapeError};

/// Page source for the scrapers. `HttpClient` hits the network; tests swap in fixtures.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP GET with a fixed browser user-agent and per-request timeout.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str) -> Result<String> {
        let request_err = |source| ScrapeError::Request { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(request_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status });
        }
        log::debug!("GET {url} -> {status}");
        resp.text().map_err(request_err)
    }
}

// src/core/net.rs
// Blocking HTTPS GET. No retries and no custom timeout: a failed fetch is
// terminal for the district being processed.

use std::time::Instant;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

/// Source of page text. `HttpFetcher` talks to the site; tests hand in canned pages.
pub trait Fetch {
    /// Return the body of `url`, or an error for transport failures and any status but 200.
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        let t = Instant::now();
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| Error::Fetch { url: s!(url), source })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(Error::Status { url: s!(url), status: status.as_u16() });
        }

        let body = resp
            .text()
            .map_err(|source| Error::Fetch { url: s!(url), source })?;
        debug!(url, bytes = body.len(), elapsed = ?t.elapsed(), "fetched");
        Ok(body)
    }
}

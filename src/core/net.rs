// src/core/net.rs
// One blocking GET per run. No retries, no auth, no timeout.

use color_eyre::eyre::{Result, WrapErr};
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::consts::{FETCH_TIMEOUT, STATUS_PATH, USER_AGENT};

/// `<target>/rs-status?filter=all`, concatenated as given.
pub fn status_url(target_url: &str) -> String {
    join!(target_url, STATUS_PATH)
}

/// Fetch the region server status page and return its body.
/// Transport failures and non-2xx statuses are both errors.
pub fn http_get(url: &str) -> Result<String> {
    // reqwest's blocking client defaults to 30s; the status page gets no limit at all
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .wrap_err("Failed to build HTTP client")?;

    debug!("GET {url}");
    let resp = client
        .get(url)
        .send()
        .wrap_err_with(|| format!("Request to {url} failed"))?
        .error_for_status()
        .wrap_err_with(|| format!("HTTP error from {url}"))?;

    let body = resp
        .text()
        .wrap_err_with(|| format!("Failed to read response body from {url}"))?;
    info!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}

pub fn fetch_status_page(target_url: &str) -> Result<String> {
    http_get(&status_url(target_url))
}

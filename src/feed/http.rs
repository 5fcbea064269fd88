//! HTTP access to the stat feed.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client,
};
use std::path::Path;

use super::types::RawPlayerStat;
use crate::{error::FantasyError, Result, FEED_TOKEN_ENV_VAR, FEED_URL_ENV_VAR};

/// Default endpoint for the published VDC stat batches.
pub const DEFAULT_FEED_URL: &str = "https://stats.vdc.gg/api/fantasy/players";

/// Resolve the feed URL: explicit flag, then `VDC_FANTASY_FEED_URL`, then
/// the built-in default.
pub fn resolve_feed_url(flag: Option<&str>) -> String {
    match flag {
        Some(url) => url.to_string(),
        None => std::env::var(FEED_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_FEED_URL.to_string()),
    }
}

/// Build request headers, adding a bearer token from `VDC_FANTASY_FEED_TOKEN`
/// if one is set. Public feeds work without it.
pub fn feed_headers() -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Ok(token) = std::env::var(FEED_TOKEN_ENV_VAR) {
        let value = format!("Bearer {}", token);
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&value)?);
    }
    Ok(headers)
}

/// Fetch one raw stat batch from the feed.
pub async fn fetch_stat_batch(client: &Client, url: &str) -> Result<Vec<RawPlayerStat>> {
    log::debug!("fetching stat batch from {url}");

    let batch = client
        .get(url)
        .headers(feed_headers()?)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<RawPlayerStat>>()
        .await?;

    if batch.is_empty() {
        return Err(FantasyError::NoData);
    }
    Ok(batch)
}

/// Read a stat batch from a local JSON file (offline ingestion).
pub fn read_stat_batch_file(path: &Path) -> Result<Vec<RawPlayerStat>> {
    let contents = std::fs::read_to_string(path)?;
    let batch: Vec<RawPlayerStat> = serde_json::from_str(&contents)?;
    if batch.is_empty() {
        return Err(FantasyError::NoData);
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_feed_url_flag_wins() {
        let url = resolve_feed_url(Some("http://localhost:9000/stats"));
        assert_eq!(url, "http://localhost:9000/stats");
    }

    #[test]
    fn test_feed_headers_without_token() {
        std::env::remove_var(FEED_TOKEN_ENV_VAR);
        let headers = feed_headers().unwrap();
        assert!(headers.contains_key(ACCEPT));
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_read_stat_batch_file_empty_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "[]").unwrap();

        let result = read_stat_batch_file(&path);
        assert!(matches!(result, Err(FantasyError::NoData)));
    }

    #[test]
    fn test_read_stat_batch_file_round() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.json");
        std::fs::write(
            &path,
            r#"[{"name":"cNed","kills":18,"deaths":11,"assists":4,"acs":231.0}]"#,
        )
        .unwrap();

        let batch = read_stat_batch_file(&path).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].name, "cNed");
    }
}

use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::config::FetchSettings;
use crate::error::{ExtractError, FetchError, ParseError};

const MARKUP_CONTENT_TYPES: &[&str] = &["text/html", "application/xhtml+xml", "text/plain"];

/// Prepend `https://` when the input has no scheme.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Normalize and parse a user-supplied URL.
pub fn parse_target(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(&normalize_url(raw)).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.host_str().is_none() {
        return Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(url)
}

pub fn build_client(settings: &FetchSettings) -> Result<Client, FetchError> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .user_agent(settings.user_agent.as_str())
        .redirect(reqwest::redirect::Policy::limited(settings.max_redirects));
    if !settings.use_system_proxy {
        builder = builder.no_proxy();
    }
    builder.build().map_err(|e| FetchError::Request(e.to_string()))
}

/// Single GET, no retries. Returns the body of a 2xx markup response.
pub async fn fetch_html(client: &Client, url: &Url) -> Result<String, ExtractError> {
    let start = Instant::now();
    debug!(%url, "fetching page");

    let response = client.get(url.clone()).send().await.map_err(|e| classify(e, url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            url: url.to_string(),
        }
        .into());
    }

    if let Some(content_type) = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        let mime = content_type.split(';').next().unwrap_or("").trim().to_lowercase();
        if !mime.is_empty() && !MARKUP_CONTENT_TYPES.contains(&mime.as_str()) {
            return Err(ParseError::UnsupportedContentType {
                content_type: mime,
                url: url.to_string(),
            }
            .into());
        }
    }

    let body = response.text().await.map_err(|e| classify(e, url))?;
    if body.trim().is_empty() {
        return Err(ParseError::EmptyDocument(url.to_string()).into());
    }

    info!(
        %url,
        bytes = body.len(),
        latency_ms = start.elapsed().as_millis() as u64,
        "fetched page"
    );
    Ok(body)
}

fn classify(e: reqwest::Error, url: &Url) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else {
        FetchError::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemeless_gets_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(
            parse_target("  example.com/path?q=1 ").unwrap().as_str(),
            "https://example.com/path?q=1"
        );
    }

    #[test]
    fn existing_scheme_kept() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(parse_target("http://example.com").unwrap().scheme(), "http");
        assert_eq!(parse_target("https://example.com/a").unwrap().path(), "/a");
    }

    #[test]
    fn invalid_urls_rejected() {
        assert!(matches!(parse_target(""), Err(FetchError::InvalidUrl { .. })));
        assert!(matches!(parse_target("http://"), Err(FetchError::InvalidUrl { .. })));
    }

    #[test]
    fn client_builds_with_defaults() {
        assert!(build_client(&FetchSettings::default()).is_ok());
    }
}

use std::time::Duration;

use crawl_logging::crawl_trace;
use futures_util::StreamExt;
use reqwest::StatusCode;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, USER_AGENT,
};

use crate::{FailureKind, FetchError, FetchMetadata, FetchOutput};

/// Some servers reject non-browser user agents, so every request sends these.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                                      (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
}

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: usize = 5;
const MAX_BODY_BYTES: u64 = 20 * 1024 * 1024;

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            redirect_limit: MAX_REDIRECTS,
            max_bytes: MAX_BODY_BYTES,
            user_agent: BROWSER_USER_AGENT.to_string(),
            accept: BROWSER_ACCEPT.to_string(),
            accept_language: BROWSER_ACCEPT_LANGUAGE.to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError>;
}

/// HTTP GET over a single reused `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .default_headers(default_headers(&settings)?)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Client, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

fn default_headers(settings: &FetchSettings) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();
    for (name, value) in [
        (USER_AGENT, &settings.user_agent),
        (ACCEPT, &settings.accept),
        (ACCEPT_LANGUAGE, &settings.accept_language),
    ] {
        let value = HeaderValue::from_str(value).map_err(|err| {
            FetchError::new(FailureKind::Client, format!("invalid {name} header: {err}"))
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        let target = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Redirects are already followed; only a final 200 carries a full body.
        let status = response.status();
        if status != StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or("unexpected status");
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                reason,
            ));
        }
        if let Some(declared) = response.content_length() {
            if declared > self.settings.max_bytes {
                return Err(self.too_large(declared));
            }
        }

        let final_url = response.url().to_string();
        let content_type = header_text(response.headers(), CONTENT_TYPE);
        let bytes = self.read_body(response).await?;
        crawl_trace!("GET {} -> {} ({} bytes)", url, status, bytes.len());

        Ok(FetchOutput {
            metadata: FetchMetadata {
                original_url: url.to_string(),
                final_url,
                status: status.as_u16(),
                content_type,
                byte_len: bytes.len() as u64,
            },
            bytes,
        })
    }
}

impl ReqwestFetcher {
    /// Servers may omit or understate Content-Length, so the cap is also
    /// enforced while streaming.
    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let received = (body.len() + chunk.len()) as u64;
            if received > self.settings.max_bytes {
                return Err(self.too_large(received));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

fn header_text(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else if err.is_redirect() {
        FailureKind::RedirectLimitExceeded
    } else {
        FailureKind::Network
    };
    FetchError::new(kind, err.to_string())
}

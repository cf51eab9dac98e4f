//! Downloading changelog pages.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::instrument;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Something that can fetch the raw HTML of a changelog page.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches changelogs over HTTP(S), blocking until the whole body has arrived.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}
impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .or_raise(|| ErrorKind::Client)?;
        Ok(Self { client })
    }
}
impl Fetch for HttpFetcher {
    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().or_raise(|| ErrorKind::Fetch(url.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            exn::bail!(ErrorKind::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().or_raise(|| ErrorKind::Fetch(url.to_string()))?;
        tracing::debug!(bytes = body.len(), "fetched changelog");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorKind::Fetch("https://www.php.net/ChangeLog-5.php".to_string()), true)]
    #[case(ErrorKind::HttpStatus { url: String::new(), status: 503 }, true)]
    #[case(ErrorKind::HttpStatus { url: String::new(), status: 429 }, true)]
    #[case(ErrorKind::HttpStatus { url: String::new(), status: 404 }, false)]
    #[case(ErrorKind::NoReleases, false)]
    #[case(ErrorKind::Client, false)]
    fn test_is_retryable(#[case] kind: ErrorKind, #[case] expected: bool) {
        assert_eq!(kind.is_retryable(), expected);
    }

    #[test]
    fn test_client_construction() {
        HttpFetcher::new(Duration::from_secs(1)).unwrap();
    }
}

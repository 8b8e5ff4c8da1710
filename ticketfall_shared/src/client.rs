use reqwest::Url;
use tracing::debug;

use crate::{ClientError, ClientResult, SpinResult};

/// Thin HTTP client for `POST /spin`. One request per call, no retry.
#[derive(Debug, Clone)]
pub struct SpinClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SpinClient {
    /// Client for an absolute endpoint URL.
    pub fn new(endpoint: &str) -> ClientResult<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ClientError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        Ok(Self::from_url(endpoint))
    }

    /// Client for an endpoint that may be relative to `base` (e.g. `/spin` on the page URL).
    pub fn with_base(base: &str, endpoint: &str) -> ClientResult<Self> {
        let endpoint = Url::parse(base)
            .and_then(|base| base.join(endpoint))
            .map_err(|e| ClientError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        Ok(Self::from_url(endpoint))
    }

    fn from_url(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn spin(&self) -> ClientResult<SpinResult> {
        let resp = self
            .http
            .post(self.endpoint.clone())
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }
        let result = resp.json::<SpinResult>().await.map_err(|e| {
            if e.is_decode() {
                ClientError::Decode(chain(&e))
            } else {
                transport(e)
            }
        })?;
        debug!(reels = ?result.reels, total = %result.total_label, "spin result received");
        Ok(result)
    }
}

fn transport(e: reqwest::Error) -> ClientError {
    ClientError::Transport(chain(&e))
}

// reqwest keeps the useful part (refused, tls, dns) in the source chain
fn chain(e: &dyn std::error::Error) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_endpoint_resolves_against_page() {
        let client = SpinClient::with_base("https://mini.app/game/index.html?x=1", "/spin").unwrap();
        assert_eq!(client.endpoint().as_str(), "https://mini.app/spin");
    }

    #[test]
    fn relative_endpoint_without_base_is_rejected() {
        assert!(matches!(
            SpinClient::new("/spin"),
            Err(ClientError::InvalidEndpoint(_))
        ));
    }

    #[tokio::test]
    async fn https_endpoint_reaches_the_network() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = SpinClient::new(&format!("https://{addr}/spin")).unwrap();
        match client.spin().await {
            Err(ClientError::Transport(msg)) => {
                assert!(!msg.contains("scheme is not http"), "{msg}");
            }
            other => panic!("expected a connect failure, got {other:?}"),
        }
    }
}

use std::time::Duration;

use kivu_domain::KivuError;
use reqwest::Client as ReqwestClient;
use tracing::debug;
use url::Url;

use crate::errors::InfraError;

/// HTTP client for XML-RPC calls, with a bounded per-request timeout.
///
/// The transport is POST-only (XML-RPC has no other verb). Retries are off
/// by default: each gateway call is meant to be independent, and a page
/// render should fail fast rather than pile up attempts against an ERP
/// that is down. The builder still accepts a higher attempt count for
/// callers that want them.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// POST an XML payload and return the response body.
    ///
    /// Non-success HTTP statuses are surfaced as `KivuError::Network`;
    /// XML-RPC faults travel inside a 200 response and are not this
    /// layer's concern.
    pub async fn post_xml(&self, url: &Url, body: String) -> Result<String, KivuError> {
        let attempts = self.max_attempts.max(1);

        for attempt in 1..=attempts {
            debug!(attempt, %url, bytes = body.len(), "sending XML-RPC request");

            let result = self
                .client
                .post(url.clone())
                .header("Content-Type", "text/xml")
                .body(body.clone())
                .send()
                .await;

            match result {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt, %url, %status, "received XML-RPC response");

                    if status.is_server_error() && attempt < attempts {
                        self.sleep_with_backoff(attempt).await;
                        continue;
                    }
                    if !status.is_success() {
                        return Err(KivuError::Network(format!(
                            "ERP endpoint returned HTTP {status}"
                        )));
                    }

                    return response.text().await.map_err(|err| {
                        let infra: InfraError = err.into();
                        KivuError::from(infra)
                    });
                }
                Err(err) => {
                    debug!(attempt, %url, error = %err, "XML-RPC request failed");

                    if attempt < attempts && should_retry_error(&err) {
                        self.sleep_with_backoff(attempt).await;
                        continue;
                    }

                    let infra: InfraError = err.into();
                    return Err(KivuError::from(infra));
                }
            }
        }

        Err(KivuError::Internal(
            "http client exhausted attempts without producing a result".into(),
        ))
    }

    fn backoff_delay(&self, retry_number: usize) -> Duration {
        let shift = retry_number.saturating_sub(1).min(8) as u32;
        let multiplier = 1u32 << shift;
        self.base_backoff.saturating_mul(multiplier)
    }

    async fn sleep_with_backoff(&self, retry_number: usize) {
        let delay = self.backoff_delay(retry_number);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    base_backoff: Duration,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_attempts: 1,
            base_backoff: Duration::from_millis(200),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the total number of attempts (initial try + retries).
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    pub fn build(self) -> Result<HttpClient, KivuError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .no_proxy()
            .build()
            .map_err(|err| {
                let infra: InfraError = err.into();
                KivuError::from(infra)
            })?;

        Ok(HttpClient {
            client,
            max_attempts: self.max_attempts.max(1),
            base_backoff: self.base_backoff,
        })
    }
}

fn should_retry_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_request() || err.is_connect()
}

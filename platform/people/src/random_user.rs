use std::time::Duration;

use reqwest::{Client, Url};
use tracing::debug;

use crate::record::{PersonRecord, RandomUserResponse};
use crate::{PersonProvider, ProviderError, ProviderResult};

pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

/// Nationalities whose names use the English alphabet.
pub const DEFAULT_NATIONALITIES: [&str; 6] = ["us", "gb", "au", "ca", "ie", "nz"];

/// Fetches one random person per request from a randomuser.me compatible API.
#[derive(Clone, Debug)]
pub struct RandomUserProvider {
    client: Client,
    url: Url,
}

impl RandomUserProvider {
    pub fn new(
        endpoint: &str,
        nationalities: &[String],
        timeout: Option<Duration>,
    ) -> ProviderResult<Self> {
        let mut url =
            Url::parse(endpoint).map_err(|_| ProviderError::InvalidEndpoint(endpoint.into()))?;
        if url.cannot_be_a_base() {
            return Err(ProviderError::InvalidEndpoint(endpoint.into()));
        }
        if !nationalities.is_empty() {
            url.query_pairs_mut()
                .append_pair("nat", &nationalities.join(","));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl PersonProvider for RandomUserProvider {
    async fn fetch_person(&self) -> ProviderResult<PersonRecord> {
        debug!(url = %self.url, "requesting person");
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body: RandomUserResponse = response.json().await?;
        body.results
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyResults)
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::record::fixtures;

    /// Serves a single canned HTTP response and returns the base url.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{addr}/api/")
    }

    fn nats() -> Vec<String> {
        DEFAULT_NATIONALITIES.map(String::from).to_vec()
    }

    #[test]
    fn url_carries_nationalities() {
        let provider = RandomUserProvider::new(DEFAULT_ENDPOINT, &nats(), None).unwrap();
        assert_eq!(
            provider.url().as_str(),
            "https://randomuser.me/api/?nat=us%2Cgb%2Cau%2Cca%2Cie%2Cnz"
        );
    }

    #[test]
    fn rejects_malformed_endpoint() {
        let err = RandomUserProvider::new("not a url", &nats(), None).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidEndpoint(_)));
    }

    #[tokio::test]
    async fn fetches_first_record() {
        let base = serve_once("200 OK", fixtures::CURRENT).await;
        let provider =
            RandomUserProvider::new(&base, &nats(), Some(Duration::from_secs(5))).unwrap();
        let record = provider.fetch_person().await.unwrap();
        assert_eq!(record.login.username, "ann9");
    }

    #[tokio::test]
    async fn empty_results_is_an_error() {
        let base = serve_once("200 OK", r#"{"results": []}"#).await;
        let provider =
            RandomUserProvider::new(&base, &nats(), Some(Duration::from_secs(5))).unwrap();
        let err = provider.fetch_person().await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyResults));
    }

    #[tokio::test]
    async fn server_error_is_a_request_error() {
        let base = serve_once("503 Service Unavailable", "{}").await;
        let provider =
            RandomUserProvider::new(&base, &nats(), Some(Duration::from_secs(5))).unwrap();
        let err = provider.fetch_person().await.unwrap_err();
        assert!(matches!(err, ProviderError::Request(_)));
    }

    #[tokio::test]
    async fn unanswered_request_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hold = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });
        let base = format!("http://{addr}/api/");
        let provider =
            RandomUserProvider::new(&base, &nats(), Some(Duration::from_millis(300))).unwrap();
        let started = std::time::Instant::now();
        let err = provider.fetch_person().await.unwrap_err();
        assert!(matches!(err, ProviderError::Request(ref e) if e.is_timeout()));
        assert!(started.elapsed() < Duration::from_secs(5));
        hold.abort();
    }
}

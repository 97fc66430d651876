//! Content acquisition: fetch the target page and hand the raw body to the
//! analyzer.
//!
//! Non-2xx responses are not errors here — the body and status are passed
//! through so the analyzer can still report on whatever came back. Only
//! transport-level failures (timeout, DNS, connection refused) surface as
//! errors.

use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use reqwest::Client;
use tracing::debug;

use crate::analyzer::FetchedPage;
use crate::config::Config;
use crate::error::Result;

/// Factory for the acquisition client: bounded timeout, fixed User-Agent.
pub fn create_client(config: &Config) -> anyhow::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .context("Failed to build HTTP client")
}

/// Fetch one page. The timestamp is taken when the response arrives so it
/// reflects when the content was actually observed.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage> {
    let response = client.get(url).send().await?;

    let http_status = response.status().as_u16();
    let fetched_at = Utc::now();
    let body = response.text().await?;

    debug!(url, http_status, bytes = body.len(), "fetched page");

    Ok(FetchedPage {
        body,
        http_status,
        fetched_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> Client {
        create_client(&Config::default()).unwrap()
    }

    #[tokio::test]
    async fn fetch_passes_body_and_status_through() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_body("<html><head><title>T</title></head></html>")
            .create_async()
            .await;

        let page = fetch_page(&test_client(), &format!("{}/page", server.url()))
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(page.http_status, 200);
        assert!(page.body.contains("<title>T</title>"));
    }

    #[tokio::test]
    async fn non_2xx_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/blocked")
            .with_status(403)
            .with_body("Access denied")
            .create_async()
            .await;

        let page = fetch_page(&test_client(), &format!("{}/blocked", server.url()))
            .await
            .unwrap();
        assert_eq!(page.http_status, 403);
        assert_eq!(page.body, "Access denied");
    }

    #[tokio::test]
    async fn connection_failure_is_an_error() {
        // Port 1 is never listening locally
        let result = fetch_page(&test_client(), "http://127.0.0.1:1/").await;
        assert!(result.is_err());
    }
}

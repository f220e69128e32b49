use async_trait::async_trait;

use crate::config::Config;

use super::source::{FeedError, MarketDataSource};
use super::types::{Category, PricedInstrument};

/// reqwest-backed source hitting the live price API.
pub struct HttpMarketDataSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMarketDataSource {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // The request timeout keeps a dead endpoint from stalling a cycle
        // past the poll interval.
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    fn endpoint(&self, category: Category) -> String {
        format!("{}/{}", self.base_url, category.path())
    }
}

#[async_trait]
impl MarketDataSource for HttpMarketDataSource {
    async fn fetch(&self, category: Category) -> Result<Vec<PricedInstrument>, FeedError> {
        let response = self
            .client
            .get(self.endpoint(category))
            .send()
            .await
            .map_err(|source| FeedError::Transport { category, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status { category, status });
        }

        response
            .json::<Vec<PricedInstrument>>()
            .await
            .map_err(|source| FeedError::Decode { category, source })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use crate::view::locale::Locale;

    use super::*;

    /// One-shot HTTP server answering the next connection with a canned
    /// response, returning the base URL to point the client at.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;

            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{addr}")
    }

    fn config_for(base_url: String) -> Config {
        Config {
            api_base_url: base_url,
            poll_interval: Duration::from_secs(60),
            http_timeout: Duration::from_secs(5),
            metrics_port: 0,
            locale: Locale::lookup("en-US").unwrap(),
        }
    }

    #[tokio::test]
    async fn decodes_successful_response() {
        let base = serve_once(
            "200 OK",
            r#"[{"name":"Coin A","price":1000.0,"changePercent":1.5}]"#,
        )
        .await;
        let source = HttpMarketDataSource::new(&config_for(base)).unwrap();

        let instruments = source.fetch(Category::Gold).await.unwrap();
        assert_eq!(instruments.len(), 1);
        assert_eq!(instruments[0].name, "Coin A");
    }

    #[tokio::test]
    async fn non_success_status_is_a_feed_error() {
        let base = serve_once("502 Bad Gateway", "[]").await;
        let source = HttpMarketDataSource::new(&config_for(base)).unwrap();

        let err = source.fetch(Category::Currency).await.unwrap_err();
        assert!(matches!(err, FeedError::Status { category: Category::Currency, .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_feed_error() {
        let base = serve_once("200 OK", "not json").await;
        let source = HttpMarketDataSource::new(&config_for(base)).unwrap();

        let err = source.fetch(Category::Cryptocurrency).await.unwrap_err();
        assert!(matches!(err, FeedError::Decode { category: Category::Cryptocurrency, .. }));
    }
}

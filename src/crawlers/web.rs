use crate::crawlers::crawler::{FetchResponse, Fetcher};
use crate::error::CrawlError;
use reqwest::Client;
use std::time::Duration;

/// Fetches pages with a plain HTTP GET: no custom headers, no retries
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Client with the transport's default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Client that gives up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, CrawlError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn from_timeout(timeout: Option<Duration>) -> Result<Self, CrawlError> {
        match timeout {
            Some(timeout) => Self::with_timeout(timeout),
            None => Ok(Self::new()),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, CrawlError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        ::log::debug!("GET {} -> {}", url, status);

        // Non-200 bodies are never parsed
        if status != 200 {
            return Ok(FetchResponse::new(status, String::new()));
        }

        let body = response.text().await?;
        Ok(FetchResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response and returns the URL to request
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
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
                "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/used_cars/info.php?ID=1020939", addr)
    }

    #[tokio::test]
    async fn test_fetch_ok_returns_body() {
        let url = serve_once("200 OK", "<html><body>listing</body></html>").await;
        let response = HttpFetcher::new().fetch(&url).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "<html><body>listing</body></html>");
    }

    #[tokio::test]
    async fn test_fetch_not_found_keeps_status() {
        let url = serve_once("404 Not Found", "gone").await;
        let response = HttpFetcher::new().fetch(&url).await.unwrap();
        assert_eq!(response.status, 404);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        let err = fetcher
            .fetch(&format!("http://{}/listing", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, CrawlError::Transport(_)));
    }
}

//! Dataset loading from a URL or a local file.
//!
//! One request, no retries: any failure is returned to the caller and
//! nothing is rendered.

use std::fmt;
use std::path::PathBuf;

use reqwest::Client;
use tracing::{debug, info, instrument};

use heatmap_common::{Dataset, HeatmapError, HeatmapResult};

use crate::config::HttpConfig;

/// Where the dataset document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and parses dataset documents.
pub struct DatasetLoader {
    client: Client,
}

impl DatasetLoader {
    pub fn new(config: &HttpConfig) -> HeatmapResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| HeatmapError::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    #[instrument(skip_all, fields(source = %source))]
    pub async fn load(&self, source: &DataSource) -> HeatmapResult<Dataset> {
        let dataset = match source {
            DataSource::Url(url) => self.fetch(url).await?,
            DataSource::File(path) => {
                let bytes = tokio::fs::read(path).await?;
                debug!(bytes = bytes.len(), "Read dataset file");
                Dataset::from_slice(&bytes)?
            }
        };

        info!(
            records = dataset.len(),
            base_temperature = dataset.base_temperature(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    async fn fetch(&self, url: &str) -> HeatmapResult<Dataset> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HeatmapError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HeatmapError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| HeatmapError::Http(e.to_string()))?;
        debug!(bytes = bytes.len(), "Downloaded dataset");

        Dataset::from_slice(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{write_temp_json, INVALID_MONTH_JSON, MALFORMED_JSON, SAMPLE_JSON};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn loader() -> DatasetLoader {
        DatasetLoader::new(&HttpConfig::default()).unwrap()
    }

    /// Serve a single canned HTTP response on a local port and return the
    /// URL to request.
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
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/global-temperature.json", addr)
    }

    #[tokio::test]
    async fn test_load_from_url() {
        let url = serve_once("200 OK", SAMPLE_JSON).await;

        let dataset = loader().load(&DataSource::Url(url)).await.unwrap();
        assert_eq!(dataset.len(), 9);
        assert_eq!(dataset.base_temperature(), 8.66);
        assert_eq!(dataset.year_span(), (1753, 1761));
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejected() {
        let url = serve_once("404 Not Found", "missing").await;

        let err = loader()
            .load(&DataSource::Url(url.clone()))
            .await
            .unwrap_err();
        match err {
            HeatmapError::HttpStatus { url: failed, status } => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_response_is_parse_error() {
        let url = serve_once("200 OK", MALFORMED_JSON).await;

        let err = loader().load(&DataSource::Url(url)).await.unwrap_err();
        assert!(matches!(err, HeatmapError::Parse(_)));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let file = write_temp_json(SAMPLE_JSON);
        let source = DataSource::File(file.path().to_path_buf());

        let dataset = loader().load(&source).await.unwrap();
        assert_eq!(dataset.len(), 9);
        assert_eq!(dataset.base_temperature(), 8.66);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = DataSource::File(PathBuf::from("/nonexistent/global-temperature.json"));
        let err = loader().load(&source).await.unwrap_err();
        assert!(matches!(err, HeatmapError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let file = write_temp_json(MALFORMED_JSON);
        let source = DataSource::File(file.path().to_path_buf());

        let err = loader().load(&source).await.unwrap_err();
        assert!(matches!(err, HeatmapError::Parse(_)));
    }

    #[tokio::test]
    async fn test_invalid_month_is_rejected() {
        let file = write_temp_json(INVALID_MONTH_JSON);
        let source = DataSource::File(file.path().to_path_buf());

        let err = loader().load(&source).await.unwrap_err();
        assert!(matches!(err, HeatmapError::InvalidMonth { month: 0, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_url_is_http_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let source = DataSource::Url("http://127.0.0.1:9/global-temperature.json".to_string());
        let err = loader().load(&source).await.unwrap_err();
        assert!(matches!(err, HeatmapError::Http(_)));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(
            DataSource::Url("https://example.com/data.json".into()).to_string(),
            "https://example.com/data.json"
        );
        assert_eq!(
            DataSource::File(PathBuf::from("data/temps.json")).to_string(),
            "data/temps.json"
        );
    }
}

use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::consts::UPLOAD_FIELD_NAME;
use crate::error::Result;
use crate::result::AnalysisResult;
use crate::upload::SelectedFile;
use crate::wire;

/// Something that turns an image into an analysis result.
///
/// The HTTP client is the production implementation; tests substitute
/// scripted analyzers.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult>;
}

/// Posts the image to the analysis service as `multipart/form-data`.
pub struct HttpAnalyzer {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpAnalyzer {
    /// `timeout = None` leaves the request unbounded; only the transport's own
    /// limits apply.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = endpoint.into();
        let mut builder = reqwest::blocking::Client::builder().timeout(timeout);
        // A local service must never be routed through a system proxy.
        if is_loopback(&endpoint) {
            builder = builder.no_proxy();
        }
        Ok(Self {
            endpoint,
            client: builder.build()?,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(
            config.endpoint.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn is_loopback(endpoint: &str) -> bool {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|host| matches!(host.as_str(), "localhost" | "127.0.0.1" | "[::1]" | "::1"))
}

impl Analyzer for HttpAnalyzer {
    fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult> {
        info!(
            "Submitting {} ({} bytes) to {}",
            file.name,
            file.size_bytes(),
            self.endpoint
        );

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(file.mime)?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self.client.post(&self.endpoint).multipart(form).send()?;
        let status = response.status();
        let body = response.bytes()?;
        debug!("Analysis service answered {status} with {} bytes", body.len());

        if !status.is_success() {
            let err = wire::status_error(status.as_u16(), &body);
            warn!("Analysis request failed: {err}");
            return Err(err);
        }

        let result =
            wire::decode_response(&body).inspect_err(|e| warn!("Analysis failed: {e}"))?;
        info!(
            "Score: {:.4}, Threshold: {:.4}, Anomaly: {}",
            result.anomaly_score, result.threshold, result.is_anomaly
        );
        Ok(result)
    }
}

//! JSON envelope exchanged with the analysis service.
//!
//! Success: `{ "success": true, "results": { ... } }`.
//! Failure: `{ "success": false, "error": "..." }` or any non-2xx status.

use serde::Deserialize;

use crate::consts::GENERIC_ANALYSIS_FAILURE;
use crate::error::{NutscanError, Result};
use crate::result::AnalysisResult;

#[derive(Debug, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(default)]
    pub results: Option<AnalysisResult>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AnalysisResponse {
    pub fn into_result(self) -> Result<AnalysisResult> {
        if !self.success {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| GENERIC_ANALYSIS_FAILURE.to_string());
            return Err(NutscanError::Analysis(message));
        }

        self.results.ok_or_else(|| {
            NutscanError::InvalidResponse("success response without results".into())
        })
    }
}

/// Error body shapes a failing service may send alongside a non-2xx status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

/// Decode a 2xx response body into a result.
pub fn decode_response(body: &[u8]) -> Result<AnalysisResult> {
    let response: AnalysisResponse = serde_json::from_slice(body)
        .map_err(|e| NutscanError::InvalidResponse(e.to_string()))?;
    response.into_result()
}

/// Build the error for a non-2xx response. The status always decides the
/// outcome; a server-supplied message is appended when the body carries one.
pub fn status_error(status: u16, body: &[u8]) -> NutscanError {
    let server_message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.detail))
        .filter(|m| !m.trim().is_empty());

    let message = match server_message {
        Some(m) => format!("HTTP error! status: {status} ({m})"),
        None => format!("HTTP error! status: {status}"),
    };
    NutscanError::HttpStatus { status, message }
}

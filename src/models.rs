use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// A file received with one form submission. Lives only for that request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Bytes,
    /// Media type as declared by the client, if any.
    pub media_type: Option<String>,
    pub file_name: Option<String>,
}

impl UploadedDocument {
    pub fn new(bytes: impl Into<Bytes>, media_type: Option<&str>) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: media_type.map(str::to_string),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("<unnamed>")
    }
}

/// Everything the composer needs, already extracted to text. Also the
/// request body of `POST /api/compose`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplyInputs {
    #[serde(default)]
    pub notice_text: String,
    #[serde(default)]
    pub sample_reply: String,
    #[serde(default)]
    pub opinion: String,
    #[serde(default)]
    pub supporting_texts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftResponse {
    pub reply: String,
    /// Submission date as rendered into the subject line (DD-MM-YYYY).
    pub generated_on: String,
    pub notice_chars: usize,
    pub supporting_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

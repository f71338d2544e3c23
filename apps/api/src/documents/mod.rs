//! Document reading — byte stream plus declared MIME type to plain text.
//!
//! PDF is extracted in-process and TXT decoded directly; DOCX is delegated
//! to an external conversion service behind the `DocxConverter` trait so the
//! handler path can be stubbed in tests. Any other MIME type is an
//! unsupported-format error.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TXT_MIME: &str = "text/plain";

/// The supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Maps a declared MIME type to a supported kind. Parameters such as
    /// `; charset=utf-8` are ignored; matching is case-insensitive.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_lowercase();
        match essence.as_str() {
            PDF_MIME => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            TXT_MIME => Some(Self::PlainText),
            _ => None,
        }
    }
}

/// External DOCX-to-text conversion seam. Carried in `AppState` as
/// `Arc<dyn DocxConverter>`, swapped at startup via config.
#[async_trait]
pub trait DocxConverter: Send + Sync {
    async fn convert(&self, bytes: &[u8]) -> Result<String, AppError>;
}

/// Production converter: POSTs the document to the configured conversion
/// service and returns its plain-text response body.
pub struct ConvertServiceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ConvertServiceClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl DocxConverter for ConvertServiceClient {
    async fn convert(&self, bytes: &[u8]) -> Result<String, AppError> {
        let part = reqwest::multipart::Part::bytes(bytes.to_vec())
            .file_name("document.docx")
            .mime_str(DOCX_MIME)
            .map_err(|e| AppError::DocumentRead(format!("invalid multipart part: {e}")))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::DocumentRead(format!("conversion service unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::DocumentRead(format!(
                "conversion service returned {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::DocumentRead(format!("conversion response unreadable: {e}")))
    }
}

/// Fallback converter used when no conversion service is configured.
pub struct UnconfiguredDocxConverter;

#[async_trait]
impl DocxConverter for UnconfiguredDocxConverter {
    async fn convert(&self, _bytes: &[u8]) -> Result<String, AppError> {
        Err(AppError::DocumentRead(
            "DOCX conversion service not configured (set DOCX_CONVERT_URL)".to_string(),
        ))
    }
}

/// Extracts plain text from a document of the given kind.
pub async fn read_document(
    kind: DocumentKind,
    bytes: &[u8],
    docx: &dyn DocxConverter,
) -> Result<String, AppError> {
    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::DocumentRead(format!("PDF extraction failed: {e}")))?,
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec())
            .map_err(|e| AppError::DocumentRead(format!("text file is not valid UTF-8: {e}")))?,
        DocumentKind::Docx => docx.convert(bytes).await?,
    };

    debug!("Extracted {} chars from {kind:?} document", text.len());
    Ok(text)
}

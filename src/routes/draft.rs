//! Draft generation and download endpoints.

use axum::{
    extract::{multipart::Field, DefaultBodyLimit, Multipart, State},
    http::header,
    response::IntoResponse,
    routing::post,
    Form, Json, Router,
};
use tracing::{debug, info};

use crate::extract::{extract_all, extract_optional};
use crate::models::{AppState, DownloadRequest, DraftResponse, ReplyInputs, UploadedDocument};
use crate::reply::{today, ReplyComposer, DATE_FORMAT};
use crate::types::{AppError, AppResult};

const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

pub fn router(state: AppState) -> Router {
    let body_limit = state.config.upload.max_upload_bytes;

    Router::new()
        .route("/api/draft", post(draft_json))
        .route("/api/draft/text", post(draft_text))
        .route("/api/draft/download", post(download_reply))
        .route("/api/compose", post(compose_json))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// The raw contents of one form submission.
#[derive(Debug, Default)]
pub struct DraftSubmission {
    pub notice: Option<UploadedDocument>,
    pub sample_reply: String,
    pub opinion: String,
    pub supporting: Vec<UploadedDocument>,
}

impl DraftSubmission {
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut submission = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "notice" => submission.notice = read_upload(field).await?,
                "supporting" => {
                    if let Some(doc) = read_upload(field).await? {
                        submission.supporting.push(doc);
                    }
                }
                "sample_reply" => submission.sample_reply = normalize_newlines(&field.text().await?),
                "opinion" => submission.opinion = normalize_newlines(&field.text().await?),
                other => debug!(field = other, "Ignoring unknown form field"),
            }
        }

        Ok(submission)
    }

    /// Run the extraction pass: notice first, then supporting workings in
    /// upload order.
    pub fn into_inputs(self) -> AppResult<ReplyInputs> {
        Ok(ReplyInputs {
            notice_text: extract_optional(self.notice.as_ref())?,
            sample_reply: self.sample_reply,
            opinion: self.opinion,
            supporting_texts: extract_all(&self.supporting)?,
        })
    }
}

/// Browsers submit textarea line breaks as CRLF; drafts use LF throughout.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

async fn read_upload(field: Field<'_>) -> AppResult<Option<UploadedDocument>> {
    let file_name = field.file_name().map(str::to_string);
    let media_type = field.content_type().map(str::to_string);
    let bytes = field.bytes().await?;

    // An untouched file input still submits an empty, unnamed part.
    if bytes.is_empty() && file_name.as_deref().map_or(true, str::is_empty) {
        return Ok(None);
    }

    let mut doc = UploadedDocument::new(bytes, media_type.as_deref());
    if let Some(name) = file_name {
        doc = doc.with_file_name(name);
    }
    Ok(Some(doc))
}

async fn build_draft(multipart: Multipart) -> AppResult<DraftResponse> {
    let submission = DraftSubmission::from_multipart(multipart).await?;
    info!(
        has_notice = submission.notice.is_some(),
        supporting = submission.supporting.len(),
        "Draft request received"
    );

    // lopdf parsing is CPU-bound; keep it off the async workers.
    let inputs = tokio::task::spawn_blocking(move || submission.into_inputs())
        .await
        .map_err(|e| AppError::Internal(format!("Extraction task failed: {}", e)))??;

    Ok(draft_response(&inputs, today()))
}

fn draft_response(inputs: &ReplyInputs, date: chrono::NaiveDate) -> DraftResponse {
    let reply = ReplyComposer::compose(inputs, date);

    DraftResponse {
        reply,
        generated_on: date.format(DATE_FORMAT).to_string(),
        notice_chars: inputs.notice_text.chars().count(),
        supporting_count: inputs.supporting_texts.len(),
    }
}

/// POST /api/draft - multipart form in, JSON draft out
async fn draft_json(
    State(_state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<DraftResponse>> {
    Ok(Json(build_draft(multipart).await?))
}

/// POST /api/draft/text - multipart form in, plain-text draft out
async fn draft_text(
    State(_state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let draft = build_draft(multipart).await?;
    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN_UTF8)], draft.reply))
}

/// POST /api/compose - already-extracted texts as JSON, JSON draft out
async fn compose_json(
    State(_state): State<AppState>,
    Json(inputs): Json<ReplyInputs>,
) -> Json<DraftResponse> {
    info!(supporting = inputs.supporting_texts.len(), "Compose request received");
    Json(draft_response(&inputs, today()))
}

/// POST /api/draft/download - serve the (possibly edited) draft as a file
async fn download_reply(
    State(state): State<AppState>,
    Form(request): Form<DownloadRequest>,
) -> impl IntoResponse {
    let reply = normalize_newlines(&request.reply);
    let file_name = state.config.reply.download_file_name.replace(['"', '\\'], "_");
    info!(bytes = reply.len(), file = %file_name, "Serving reply download");

    (
        [
            (header::CONTENT_TYPE, TEXT_PLAIN_UTF8.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        reply,
    )
}

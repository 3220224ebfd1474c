use axum::{routing::get, Json, Router};

use crate::reply::{ReferenceItem, GST_LAW_REFERENCES};

pub fn router() -> Router {
    Router::new().route("/api/references", get(list_references))
}

/// GET /api/references - the reference table rendered into every draft
async fn list_references() -> Json<Vec<ReferenceItem>> {
    Json(GST_LAW_REFERENCES.to_vec())
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::domain::{DocumentType, FileReference};
use super::extraction::TextExtractor;
use super::registry::ProfileSummary;
use super::service::DocumentValidationService;

/// Payload accepted by the validation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateDocumentRequest {
    pub document_type: String,
    pub file_reference: FileReference,
    #[serde(default)]
    pub pass_threshold: Option<f64>,
}

/// Router builder exposing document validation and profile listings.
pub fn validation_router<E>(service: Arc<DocumentValidationService<E>>) -> Router
where
    E: TextExtractor + 'static,
{
    Router::new()
        .route("/api/v1/documents/validate", post(validate_handler::<E>))
        .route("/api/v1/documents/profiles", get(profiles_handler::<E>))
        .with_state(service)
}

pub(crate) async fn validate_handler<E>(
    State(service): State<Arc<DocumentValidationService<E>>>,
    axum::Json(request): axum::Json<ValidateDocumentRequest>,
) -> Response
where
    E: TextExtractor + 'static,
{
    let document_type = match request.document_type.parse::<DocumentType>() {
        Ok(document_type) => document_type,
        Err(error) => return bad_request(error.to_string()),
    };

    let file = request.file_reference;
    let threshold = request.pass_threshold;
    let outcome = tokio::task::spawn_blocking(move || {
        service.validate(document_type, &file, threshold)
    })
    .await;

    match outcome {
        Ok(Ok(result)) => (StatusCode::OK, axum::Json(result)).into_response(),
        Ok(Err(error)) => bad_request(error.to_string()),
        Err(join_error) => {
            error!(%join_error, "validation task did not complete");
            let payload = json!({ "error": "validation task failed" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn profiles_handler<E>(
    State(service): State<Arc<DocumentValidationService<E>>>,
) -> axum::Json<Vec<ProfileSummary>>
where
    E: TextExtractor + 'static,
{
    axum::Json(
        service
            .registry()
            .profiles()
            .map(|profile| profile.summary())
            .collect(),
    )
}

fn bad_request(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

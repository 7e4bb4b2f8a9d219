//! API handlers for the contract analysis server
//!
//! Provides REST endpoints for:
//! - Contract analysis
//! - Red-flag and clause-type catalog listing

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use contract_engine::AnalysisResult;
use contract_types::RiskLevel;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ServerError;
use crate::extract::{decode_upload, detect_file_type, extract_text};
use crate::AppState;

/// Shown with every analysis; the engine's output is advisory
pub const DISCLAIMER: &str = "This analysis is for educational purposes only and does not constitute legal advice. Please consult a qualified legal professional for specific guidance on your contract.";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "contract-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Analysis API description
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeInfoResponse {
    pub info: &'static str,
    pub supported_formats: Vec<&'static str>,
    pub max_file_size_bytes: usize,
    pub min_text_chars: usize,
    pub rate_limit: String,
    pub disclaimer: &'static str,
}

/// Handler: GET /api/analyze-contract
pub async fn handle_analyze_info(State(state): State<AppState>) -> Json<AnalyzeInfoResponse> {
    Json(AnalyzeInfoResponse {
        info: "Contract Analysis API",
        supported_formats: vec!["TXT"],
        max_file_size_bytes: state.max_upload_bytes,
        min_text_chars: state.min_text_chars,
        rate_limit: format!(
            "{} requests burst, one more every {} seconds",
            state.rate_limit_burst, state.rate_limit_replenish_secs
        ),
        disclaimer: DISCLAIMER,
    })
}

/// Analysis request body.
///
/// Either `text` holds already-extracted contract text, or
/// `content_base64` holds an uploaded file described by `filename` and
/// `mime_type`.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
    pub filename: Option<String>,
    pub mime_type: Option<String>,
    pub content_base64: Option<String>,
}

/// Analysis response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis_id: Uuid,
    pub analysis: AnalysisPayload,
    pub analyzed_at: String,
    pub disclaimer: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub text_length: usize,
}

/// Handler: POST /api/analyze-contract
pub async fn handle_analyze_contract(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ServerError> {
    let Json(req) = payload.map_err(|rejection| body_rejection(&state, rejection))?;
    let text = request_text(&state, req)?;

    let text_length = text.chars().count();
    let trimmed_length = text.trim().chars().count();
    if trimmed_length < state.min_text_chars {
        return Err(ServerError::TextTooShort {
            found: trimmed_length,
            required: state.min_text_chars,
        });
    }

    let analysis_id = Uuid::new_v4();
    info!(%analysis_id, text_length, "Contract analysis request");

    let analyzer = state.analyzer;
    let result = tokio::task::spawn_blocking(move || analyzer.analyze(&text)).await?;

    info!(
        %analysis_id,
        risk_score = result.risk_score,
        overall_risk = %result.overall_risk,
        red_flags = result.red_flags.len(),
        clauses = result.clauses.len(),
        "Contract analysis complete"
    );
    debug!(
        %analysis_id,
        flags = ?result.red_flags.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
        "Detected red flags"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis_id,
        analysis: AnalysisPayload { result, text_length },
        analyzed_at: Utc::now().to_rfc3339(),
        disclaimer: DISCLAIMER,
    }))
}

/// Map an unreadable request body onto the API error envelope
fn body_rejection(state: &AppState, rejection: JsonRejection) -> ServerError {
    debug!(status = %rejection.status(), "Rejected request body");
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::FileTooLarge(state.max_upload_bytes)
    } else {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

/// Resolve the contract text from inline text or an uploaded file
fn request_text(state: &AppState, req: AnalyzeRequest) -> Result<String, ServerError> {
    if let Some(text) = req.text {
        if text.len() > state.max_upload_bytes {
            return Err(ServerError::FileTooLarge(state.max_upload_bytes));
        }
        return Ok(text);
    }

    let content = req.content_base64.ok_or_else(|| {
        ServerError::InvalidRequest(
            "No contract provided. Send either 'text' or 'content_base64'.".to_string(),
        )
    })?;

    let bytes = decode_upload(&content)?;
    if bytes.len() > state.max_upload_bytes {
        return Err(ServerError::FileTooLarge(state.max_upload_bytes));
    }

    let mime_type = req.mime_type.as_deref().unwrap_or_default();
    let filename = req.filename.as_deref().unwrap_or_default();
    let file_type =
        detect_file_type(mime_type, filename).ok_or(ServerError::UnsupportedFileType)?;
    debug!(?file_type, filename, bytes = bytes.len(), "Decoded upload");

    extract_text(&bytes, file_type)
}

/// Red-flag catalog entry
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedFlagInfo {
    pub id: String,
    pub title: String,
    pub risk_level: RiskLevel,
    pub explanation: String,
    pub learn_more_link: String,
    pub category: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedFlagListResponse {
    pub success: bool,
    pub red_flags: Vec<RedFlagInfo>,
    pub count: usize,
}

/// Handler: GET /api/red-flags
pub async fn handle_list_red_flags(State(state): State<AppState>) -> Json<RedFlagListResponse> {
    let red_flags: Vec<RedFlagInfo> = state
        .analyzer
        .catalog()
        .red_flags()
        .iter()
        .map(|p| RedFlagInfo {
            id: p.id.clone(),
            title: p.title.clone(),
            risk_level: p.risk_level,
            explanation: p.explanation.clone(),
            learn_more_link: p.learn_more_link.clone(),
            category: p.category.clone(),
        })
        .collect();

    let count = red_flags.len();

    Json(RedFlagListResponse {
        success: true,
        red_flags,
        count,
    })
}

/// Clause-type catalog entry
#[derive(Serialize)]
pub struct ClauseTypeInfo {
    #[serde(rename = "type")]
    pub clause_type: String,
    pub title: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseTypeListResponse {
    pub success: bool,
    pub clause_types: Vec<ClauseTypeInfo>,
    pub count: usize,
}

/// Handler: GET /api/clause-types
pub async fn handle_list_clause_types(
    State(state): State<AppState>,
) -> Json<ClauseTypeListResponse> {
    let clause_types: Vec<ClauseTypeInfo> = state
        .analyzer
        .catalog()
        .clause_types()
        .iter()
        .map(|p| ClauseTypeInfo {
            clause_type: p.clause_type.clone(),
            title: p.title.clone(),
        })
        .collect();

    let count = clause_types.len();

    Json(ClauseTypeListResponse {
        success: true,
        clause_types,
        count,
    })
}

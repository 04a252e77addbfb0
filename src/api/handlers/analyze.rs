use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{AnalyzeRequest, ErrorResponse, SuccessResponse};
use crate::errors::{AnalyzeError, RiotApiError};
use crate::services::analysis::AnalysisService;

pub async fn analyze_summoner(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            log::warn!("Malformed analyze request: {}", rejection);
            let body = ErrorResponse {
                error: "잘못된 요청 형식입니다.".to_string(),
                details: Some(rejection.body_text()),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let service = AnalysisService::new(&state.config);

    match service.analyze(&request.summoner_input).await {
        Ok(report) => Json(SuccessResponse::new(report)).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

fn error_response(err: &AnalyzeError) -> Response {
    let status = err.status_code();
    if status.is_server_error() {
        log::error!("Analysis failed: {}", err);
    } else {
        log::warn!("Analysis rejected: {}", err);
    }

    let body = ErrorResponse {
        error: err.user_message().to_string(),
        details: details(err),
    };
    (status, Json(body)).into_response()
}

fn details(err: &AnalyzeError) -> Option<String> {
    match err {
        AnalyzeError::Riot(RiotApiError::RateLimited {
            retry_after_secs: Some(secs),
        }) => Some(format!("{}초 후 다시 시도해주세요.", secs)),
        AnalyzeError::Riot(RiotApiError::RateLimited { .. }) => None,
        AnalyzeError::Riot(riot) => Some(match riot.upstream_status() {
            Some(status) => format!("[{}] {}", status, riot),
            None => riot.to_string(),
        }),
        other => Some(other.to_string()),
    }
}

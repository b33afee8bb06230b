use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::SessionId;
use crate::models::{AnswerValue, QuizAnswers, ResultRecord};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize, Default)]
pub struct PredictRequest {
    pub q1: Option<AnswerValue>,
    pub q2: Option<AnswerValue>,
    pub q3: Option<AnswerValue>,
    pub q4: Option<AnswerValue>,
    pub q5: Option<AnswerValue>,
    pub q6: Option<AnswerValue>,
    /// Alternate shape submitted by the legacy quiz front-end
    pub personality: Option<Vec<Option<i64>>>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub redirect: String,
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub results: Vec<ResultRecord>,
    pub generated_at: Option<DateTime<Utc>>,
}

// Handlers

/// Liveness probe reporting artifact and model status
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let artifact_loaded = state.recommender.is_some();
    let model_loaded = state
        .recommender
        .as_ref()
        .map(|recommender| recommender.has_model())
        .unwrap_or(false);

    Json(json!({
        "status": "healthy",
        "artifact_loaded": artifact_loaded,
        "model_loaded": model_loaded,
    }))
}

/// Runs the recommendation pipeline and stores the outcome in the session
pub async fn predict(
    State(state): State<AppState>,
    session: Option<Extension<SessionId>>,
    body: Result<Json<PredictRequest>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(request) = body
        .map_err(|_| AppError::InvalidInput("Request body must be a JSON object".to_string()))?;

    let Extension(SessionId(session_id)) = session
        .ok_or_else(|| AppError::Internal("Session middleware did not run".to_string()))?;

    let recommender = state
        .recommender
        .as_ref()
        .ok_or(AppError::ModelUnavailable)?;

    let results = if let Some(personality) = &request.personality {
        if personality.is_empty() {
            return Err(AppError::InvalidInput(
                "Personality answers must not be empty".to_string(),
            ));
        }
        recommender.personality_pick(personality)
    } else {
        let answers = parse_answers(&request)?;
        recommender.recommend(answers)
    };

    tracing::info!(
        session_id = %session_id,
        results = results.len(),
        "Prediction stored"
    );

    state.sessions.store(session_id, results).await;

    Ok(Json(PredictResponse {
        redirect: "/result".to_string(),
    }))
}

/// Returns the session's most recently stored result list
pub async fn result(
    State(state): State<AppState>,
    session: Option<Extension<SessionId>>,
) -> AppResult<Json<ResultsResponse>> {
    let Extension(SessionId(session_id)) = session
        .ok_or_else(|| AppError::Internal("Session middleware did not run".to_string()))?;

    let (results, generated_at) = match state.sessions.results(session_id).await {
        Some(stored) => (stored.results, Some(stored.stored_at)),
        None => (Vec::new(), None),
    };

    Ok(Json(ResultsResponse {
        results,
        generated_at,
    }))
}

/// Validates the six quiz answers, rejecting missing or uncoercible values
fn parse_answers(request: &PredictRequest) -> AppResult<QuizAnswers> {
    let values = [
        &request.q1,
        &request.q2,
        &request.q3,
        &request.q4,
        &request.q5,
        &request.q6,
    ];

    let mut parsed = [0i64; 6];
    for (slot, value) in parsed.iter_mut().zip(values) {
        *slot = value
            .as_ref()
            .and_then(AnswerValue::as_int)
            .ok_or_else(|| AppError::InvalidInput("Incomplete quiz input".to_string()))?;
    }

    Ok(QuizAnswers {
        q1: parsed[0],
        q2: parsed[1],
        q3: parsed[2],
        q4: parsed[3],
        q5: parsed[4],
        q6: parsed[5],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> PredictRequest {
        PredictRequest {
            q1: Some(AnswerValue::Int(5)),
            q2: Some(AnswerValue::Int(2)),
            q3: Some(AnswerValue::Int(1)),
            q4: Some(AnswerValue::Int(3)),
            q5: Some(AnswerValue::Int(4)),
            q6: Some(AnswerValue::Int(5)),
            personality: None,
        }
    }

    #[test]
    fn test_parse_answers_complete_set() {
        let answers = parse_answers(&full_request()).unwrap();
        assert_eq!(answers.q1, 5);
        assert_eq!(answers.q6, 5);
    }

    #[test]
    fn test_parse_answers_missing_field_fails() {
        let mut request = full_request();
        request.q6 = None;
        assert!(parse_answers(&request).is_err());
    }

    #[test]
    fn test_parse_answers_coerces_floats_and_strings() {
        let mut request = full_request();
        request.q1 = Some(AnswerValue::Float(4.9));
        request.q2 = Some(AnswerValue::Text("3".to_string()));

        let answers = parse_answers(&request).unwrap();
        assert_eq!(answers.q1, 4);
        assert_eq!(answers.q2, 3);
    }

    #[test]
    fn test_parse_answers_rejects_non_numeric_string() {
        let mut request = full_request();
        request.q3 = Some(AnswerValue::Text("often".to_string()));
        assert!(parse_answers(&request).is_err());
    }
}

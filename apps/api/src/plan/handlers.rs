//! Axum route handlers for the Plan API.

use std::sync::LazyLock;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;
use uuid::Uuid;

use crate::answers::aliases::{AnswerRecord, Field};
use crate::errors::AppError;
use crate::plan::engine::{ContentBundle, PlanEngine};
use crate::plan::insight::QuickAnalysis;
use crate::plan::probability::ProbabilityOverride;
use crate::plan::schedule::{next_workshop, WorkshopSession};
use crate::region::{Region, RegionalPricing};
use crate::state::AppState;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{8,15}$").expect("valid phone regex"));

const DEFAULT_GREETING: &str = "there";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub answers: Value,
    /// Forces the key-shape pre-pass on or off for this request.
    #[serde(default)]
    pub legacy_keys: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub record: AnswerRecord,
    pub field_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub answers: Value,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, alias = "successProbability")]
    pub success_probability: Option<ProbabilityOverride>,
    #[serde(default)]
    pub legacy_keys: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub region: Region,
    pub first_name: String,
    pub content: ContentBundle,
    pub pricing: RegionalPricing,
    pub currency_symbol: &'static str,
    pub workshop: WorkshopSession,
}

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub answers: Value,
    #[serde(default)]
    pub legacy_keys: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: QuickAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    /// Falls back to the `email` answer when omitted.
    #[serde(default)]
    pub email: Option<String>,
    pub answers: Value,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub legacy_keys: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub submission_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub email: String,
    pub plan: PlanResponse,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/normalize
///
/// Returns the canonical answer record for a raw answer set.
pub async fn handle_normalize(
    State(state): State<AppState>,
    Json(request): Json<NormalizeRequest>,
) -> Result<Json<NormalizeResponse>, AppError> {
    let raw = answers_object(&request.answers)?;
    let record = state.engine.normalize(raw, request.legacy_keys);

    Ok(Json(NormalizeResponse {
        field_count: record.len(),
        record,
    }))
}

/// POST /api/v1/plan
///
/// Full placement plan: blocking points, strength, summary, probability,
/// plus regional pricing and the next workshop session.
pub async fn handle_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let raw = answers_object(&request.answers)?;
    let record = state.engine.normalize(raw, request.legacy_keys);
    let region = Region::parse(request.region.as_deref());

    let plan = build_plan(
        &state.engine,
        &record,
        region,
        request.success_probability,
        Utc::now(),
    );

    info!(
        plan_id = %plan.plan_id,
        region = plan.region.code(),
        blocking_points = plan.content.blocking_points.len(),
        "Plan generated"
    );

    Ok(Json(plan))
}

/// POST /api/v1/analysis
///
/// Quick strength / blocking-point cards shown before the full plan.
pub async fn handle_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let raw = answers_object(&request.answers)?;
    let record = state.engine.normalize(raw, request.legacy_keys);
    let analysis = state.engine.analyze(&record);

    info!(
        strength = analysis.strength.name,
        blocking_point = analysis.blocking_point.name,
        "Quick analysis generated"
    );

    Ok(Json(AnalysisResponse { analysis }))
}

/// POST /api/v1/submissions
///
/// Validates contact details and returns the plan. Nothing is persisted.
pub async fn handle_submission(
    State(state): State<AppState>,
    Json(request): Json<SubmissionRequest>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let raw = answers_object(&request.answers)?;
    let record = state.engine.normalize(raw, request.legacy_keys);

    let email = request
        .email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .or_else(|| record.text(Field::Email))
        .ok_or_else(|| AppError::Validation("email is required".to_string()))?;
    validate_contact(&email, record.text(Field::Phone).as_deref())?;

    let now = Utc::now();
    let region = Region::parse(request.region.as_deref());
    let plan = build_plan(&state.engine, &record, region, None, now);

    let submission_id = Uuid::new_v4();
    info!(%submission_id, region = plan.region.code(), "Submission accepted");

    Ok(Json(SubmissionResponse {
        submission_id,
        submitted_at: now,
        email,
        plan,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn answers_object(answers: &Value) -> Result<&Map<String, Value>, AppError> {
    answers.as_object().ok_or_else(|| {
        AppError::UnprocessableEntity("answers must be a JSON object".to_string())
    })
}

fn validate_contact(email: &str, phone: Option<&str>) -> Result<(), AppError> {
    if !EMAIL.is_match(email) {
        return Err(AppError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    if let Some(phone) = phone {
        if !PHONE.is_match(phone) {
            return Err(AppError::Validation(
                "phone must be 8 to 15 digits, optionally prefixed with '+'".to_string(),
            ));
        }
    }
    Ok(())
}

/// First word of the full name, or a generic greeting.
fn first_name(record: &AnswerRecord) -> String {
    record
        .text(Field::FullName)
        .and_then(|name| name.split_whitespace().next().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_GREETING.to_string())
}

fn build_plan(
    engine: &PlanEngine,
    record: &AnswerRecord,
    region: Region,
    override_pair: Option<ProbabilityOverride>,
    now: DateTime<Utc>,
) -> PlanResponse {
    let content = match override_pair {
        Some(pair) => engine.derive_with_override(record, &region, Some(pair)),
        None => engine.derive(record, &region),
    };

    PlanResponse {
        plan_id: Uuid::new_v4(),
        generated_at: now,
        first_name: first_name(record),
        pricing: region.pricing(),
        currency_symbol: region.currency_symbol(),
        workshop: next_workshop(&region, now),
        region,
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::aliases::normalize;
    use serde_json::json;

    fn record(value: Value) -> AnswerRecord {
        normalize(value.as_object().unwrap())
    }

    #[test]
    fn test_first_name_from_full_name() {
        assert_eq!(first_name(&record(json!({"fullName": "Asha  Rao"}))), "Asha");
        assert_eq!(first_name(&record(json!({"name": "   "}))), "there");
        assert_eq!(first_name(&record(json!({}))), "there");
    }

    #[test]
    fn test_validate_contact() {
        assert!(validate_contact("a@b.co", None).is_ok());
        assert!(validate_contact("a@b.co", Some("+919876543210")).is_ok());
        assert!(validate_contact("not-an-email", None).is_err());
        assert!(validate_contact("a b@c.de", None).is_err());
        assert!(validate_contact("a@b.co", Some("12345")).is_err());
    }

    #[test]
    fn test_answers_must_be_object() {
        assert!(answers_object(&json!({"a": 1})).is_ok());
        assert!(matches!(
            answers_object(&json!(["a"])),
            Err(AppError::UnprocessableEntity(_))
        ));
    }

    #[test]
    fn test_build_plan_uses_region_pricing() {
        let plan = build_plan(
            &PlanEngine::default(),
            &record(json!({})),
            Region::parse(Some("IN")),
            None,
            Utc::now(),
        );
        assert_eq!(plan.pricing.plan_value, "₹6490");
        assert_eq!(plan.pricing.report_value, "₹2490");
        assert_eq!(plan.currency_symbol, "₹");
        assert!(plan.workshop.label.ends_with("7:30 PM IST"));
        assert_eq!(plan.first_name, "there");
    }
}

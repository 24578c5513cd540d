//! Wire DTOs for the risk endpoint.
//!
//! Field names follow the consumer contract: snake_case throughout except
//! the `parentScript` key on action objects. Levels serialize uppercase,
//! priorities and action types lowercase.

use serde::{Deserialize, Serialize};
use swasthya_core::{Action, Contributions, MODEL_VERSION, RiskAssessment};

/// Request body for `POST /calculate-risk`, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskRequest {
    pub bmi: f64,
    pub vaccination_status: String,
    pub temperature: f64,
    pub aqi: u32,
    pub attendance_ratio: f64,
}

/// Response body for `POST /calculate-risk`.
#[derive(Debug, Clone, Serialize)]
pub struct RiskResponse {
    pub score: f64,
    pub level: &'static str,
    pub model_version: &'static str,
    pub reason_codes: Vec<&'static str>,
    pub recommended_actions: Vec<ActionDto>,
    pub contributions: ContributionsDto,
}

/// One recommended action on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ActionDto {
    #[serde(rename = "type")]
    pub action_type: &'static str,
    pub priority: &'static str,
    pub title: &'static str,
    pub recommendation: &'static str,
    pub tasks: Vec<&'static str>,
    #[serde(rename = "parentScript")]
    pub parent_script: &'static str,
}

impl From<&Action> for ActionDto {
    fn from(action: &Action) -> Self {
        Self {
            action_type: action.action_type.as_str(),
            priority: action.priority.as_str(),
            title: action.title,
            recommendation: action.recommendation,
            tasks: action.tasks.to_vec(),
            parent_script: action.parent_script,
        }
    }
}

/// Weighted per-factor contributions, keyed by factor name.
#[derive(Debug, Clone, Serialize)]
pub struct ContributionsDto {
    pub bmi: f64,
    pub vaccination: f64,
    pub temperature: f64,
    pub aqi: f64,
    pub attendance: f64,
}

impl From<&Contributions> for ContributionsDto {
    fn from(c: &Contributions) -> Self {
        Self {
            bmi: c.bmi,
            vaccination: c.vaccination,
            temperature: c.temperature,
            aqi: c.aqi,
            attendance: c.attendance,
        }
    }
}

impl From<&RiskAssessment> for RiskResponse {
    fn from(assessment: &RiskAssessment) -> Self {
        Self {
            score: assessment.score,
            level: assessment.level.as_str(),
            model_version: MODEL_VERSION,
            reason_codes: assessment
                .reason_codes
                .iter()
                .map(|code| code.as_str())
                .collect(),
            recommended_actions: assessment
                .recommended_actions
                .iter()
                .map(ActionDto::from)
                .collect(),
            contributions: ContributionsDto::from(&assessment.contributions),
        }
    }
}

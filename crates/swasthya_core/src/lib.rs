#![forbid(unsafe_code)]

pub mod action;
pub mod engine;
pub mod factor;
pub mod reason;
pub mod score;

pub use action::{Action, ActionPriority, ActionType, dedupe_by_priority, map_risk_to_actions};
pub use engine::{EngineMetrics, MODEL_VERSION, RiskAssessment, RiskInput, evaluate};
pub use factor::VaccinationStatus;
pub use reason::{ReasonCode, derive_reason_codes};
pub use score::{Contributions, RiskLevel};

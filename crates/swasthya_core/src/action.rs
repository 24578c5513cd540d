//! Recommended follow-up actions.
//!
//! Reason codes map to canned action templates. Candidates are folded into a
//! type-keyed set: a later candidate replaces an earlier one of the same type
//! only when its priority is strictly higher; ties keep the existing entry.
//! Output order is first-insertion order, never re-sorted by priority.

use crate::reason::ReasonCode;
use crate::score::RiskLevel;

/// Category of follow-up action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    Nutrition,
    HealthCamp,
    ParentCounseling,
}

impl ActionType {
    /// Wire form (`nutrition` / `health_camp` / `parent_counseling`).
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Nutrition => "nutrition",
            ActionType::HealthCamp => "health_camp",
            ActionType::ParentCounseling => "parent_counseling",
        }
    }
}

/// Action urgency, ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActionPriority {
    Low,
    Medium,
    High,
}

impl ActionPriority {
    /// Wire form (`low` / `medium` / `high`).
    pub fn as_str(self) -> &'static str {
        match self {
            ActionPriority::Low => "low",
            ActionPriority::Medium => "medium",
            ActionPriority::High => "high",
        }
    }
}

/// A canned, human-facing follow-up recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub action_type: ActionType,
    pub priority: ActionPriority,
    pub title: &'static str,
    pub recommendation: &'static str,
    pub tasks: &'static [&'static str],
    pub parent_script: &'static str,
}

// --- Templates -----------------------------------------------------------

const NUTRITION_FOLLOW_UP: Action = Action {
    action_type: ActionType::Nutrition,
    priority: ActionPriority::High,
    title: "Nutrition counseling and meal plan",
    recommendation: "Start nutrition counseling and track weekly diet + BMI progress.",
    tasks: &[
        "Arrange counseling session in 7 days",
        "Share diet checklist with parent",
        "Review BMI in 14 days",
    ],
    parent_script: "Namaste. Please meet school health desk for nutrition follow-up this week.",
};

const VACCINATION_CATCH_UP: Action = Action {
    action_type: ActionType::HealthCamp,
    priority: ActionPriority::High,
    title: "Vaccination catch-up referral",
    recommendation: "Refer student to immunization camp/PHC for pending vaccines.",
    tasks: &[
        "Verify pending vaccine list",
        "Issue referral note",
        "Confirm status update after visit",
    ],
    parent_script: "Namaste. Your child has pending vaccination. Please visit the assigned camp/PHC.",
};

const ATTENDANCE_COUNSELING: Action = Action {
    action_type: ActionType::ParentCounseling,
    priority: ActionPriority::High,
    title: "Attendance counseling",
    recommendation: "Counsel guardian and set a 2-week attendance recovery plan.",
    tasks: &[
        "Call guardian in 48 hours",
        "Capture attendance barriers",
        "Track attendance daily for 2 weeks",
    ],
    parent_script: "Namaste. Low attendance is affecting follow-up. Please coordinate with class teacher.",
};

const RESPIRATORY_SCREENING: Action = Action {
    action_type: ActionType::HealthCamp,
    priority: ActionPriority::Medium,
    title: "Respiratory screening referral",
    recommendation: "Include student in respiratory screening during next health camp.",
    tasks: &[
        "Mark student for respiratory check",
        "Advise reduced outdoor exposure during high AQI",
        "Review symptoms weekly",
    ],
    parent_script: "Namaste. Air quality is poor. Please monitor breathing symptoms and avoid peak pollution exposure.",
};

const HEAT_SAFETY_COUNSELING: Action = Action {
    action_type: ActionType::ParentCounseling,
    priority: ActionPriority::Medium,
    title: "Heat safety counseling",
    recommendation: "Give hydration and heat-safety guidance to family.",
    tasks: &[
        "Share hydration checklist",
        "Avoid afternoon outdoor activity",
        "Track heat-related symptoms",
    ],
    parent_script: "Namaste. High heat risk detected. Ensure hydration and reduce daytime heat exposure.",
};

const ROUTINE_FOLLOW_UP: Action = Action {
    action_type: ActionType::ParentCounseling,
    priority: ActionPriority::Low,
    title: "Routine preventive follow-up",
    recommendation: "Continue preventive checks and routine health monitoring.",
    tasks: &[
        "Share preventive care advisory",
        "Maintain attendance and nutrition log",
        "Review risk profile next month",
    ],
    parent_script: "Namaste. Routine preventive follow-up is advised.",
};

const URGENT_PARENT_COUNSELING: Action = Action {
    action_type: ActionType::ParentCounseling,
    priority: ActionPriority::High,
    title: "Urgent parent counseling",
    recommendation: "Arrange urgent counseling and finalize immediate follow-up actions.",
    tasks: &[
        "Call guardian same day",
        "Schedule counseling within 24 hours",
        "Document referral timeline",
    ],
    parent_script: "Namaste. This is an urgent school health update. Please contact school health desk today.",
};

/// Template for a single reason code, in candidate order.
///
/// `BaselineLowRisk` carries no template of its own; the routine fallback
/// covers the empty case.
fn template_for(reason: ReasonCode) -> Option<Action> {
    match reason {
        ReasonCode::BmiOutOfHealthyRange => Some(NUTRITION_FOLLOW_UP),
        ReasonCode::VaccinationDelayOrIncomplete => Some(VACCINATION_CATCH_UP),
        ReasonCode::LowAttendancePattern => Some(ATTENDANCE_COUNSELING),
        ReasonCode::AirQualityExposure => Some(RESPIRATORY_SCREENING),
        ReasonCode::HeatStressRisk => Some(HEAT_SAFETY_COUNSELING),
        ReasonCode::BaselineLowRisk => None,
    }
}

// --- Dedup fold ----------------------------------------------------------

/// Fold ordered candidates into a type-keyed set.
///
/// Insert when the type is absent; replace in place only when the incoming
/// priority is strictly higher. Replacement keeps the original slot, so the
/// result preserves first-insertion order.
pub fn dedupe_by_priority(candidates: impl IntoIterator<Item = Action>) -> Vec<Action> {
    candidates.into_iter().fold(Vec::new(), |mut kept, candidate| {
        match kept
            .iter_mut()
            .find(|existing| existing.action_type == candidate.action_type)
        {
            Some(existing) => {
                if candidate.priority > existing.priority {
                    *existing = candidate;
                }
            }
            None => kept.push(candidate),
        }
        kept
    })
}

/// Map a risk level and its reason codes to the recommended actions.
///
/// Candidate order follows the fixed reason evaluation order, with the heat
/// template considered last. An empty result falls back to the routine
/// follow-up; a HIGH level without a parent counseling entry gains the
/// urgent one.
pub fn map_risk_to_actions(level: RiskLevel, reason_codes: &[ReasonCode]) -> Vec<Action> {
    const CANDIDATE_ORDER: [ReasonCode; 5] = [
        ReasonCode::BmiOutOfHealthyRange,
        ReasonCode::VaccinationDelayOrIncomplete,
        ReasonCode::LowAttendancePattern,
        ReasonCode::AirQualityExposure,
        ReasonCode::HeatStressRisk,
    ];

    let candidates = CANDIDATE_ORDER
        .into_iter()
        .filter(|reason| reason_codes.contains(reason))
        .filter_map(template_for);
    let mut actions = dedupe_by_priority(candidates);

    if actions.is_empty() {
        actions.push(ROUTINE_FOLLOW_UP);
    }

    if level == RiskLevel::High
        && !actions
            .iter()
            .any(|a| a.action_type == ActionType::ParentCounseling)
    {
        actions.push(URGENT_PARENT_COUNSELING);
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ordering() {
        assert!(ActionPriority::Low < ActionPriority::Medium);
        assert!(ActionPriority::Medium < ActionPriority::High);
    }

    #[test]
    fn dedupe_keeps_higher_priority_in_first_slot() {
        let deduped = dedupe_by_priority([RESPIRATORY_SCREENING, VACCINATION_CATCH_UP]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].priority, ActionPriority::High);
        assert_eq!(deduped[0].title, "Vaccination catch-up referral");
    }

    #[test]
    fn dedupe_ignores_equal_and_lower_priority() {
        let deduped = dedupe_by_priority([VACCINATION_CATCH_UP, RESPIRATORY_SCREENING]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].title, "Vaccination catch-up referral");

        let same = dedupe_by_priority([VACCINATION_CATCH_UP, VACCINATION_CATCH_UP]);
        assert_eq!(same.len(), 1);
    }

    #[test]
    fn baseline_maps_to_routine_follow_up() {
        let actions = map_risk_to_actions(RiskLevel::Low, &[ReasonCode::BaselineLowRisk]);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action_type, ActionType::ParentCounseling);
        assert_eq!(actions[0].priority, ActionPriority::Low);
        assert_eq!(actions[0].title, "Routine preventive follow-up");
    }

    #[test]
    fn high_level_always_gains_parent_counseling() {
        // Only the BMI code fires: nutrition alone, then the urgent add-on.
        let actions = map_risk_to_actions(RiskLevel::High, &[ReasonCode::BmiOutOfHealthyRange]);
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].action_type, ActionType::Nutrition);
        assert_eq!(actions[1].action_type, ActionType::ParentCounseling);
        assert_eq!(actions[1].priority, ActionPriority::High);
        assert_eq!(actions[1].title, "Urgent parent counseling");
    }

    #[test]
    fn existing_parent_counseling_suppresses_urgent_add_on() {
        let actions = map_risk_to_actions(
            RiskLevel::High,
            &[ReasonCode::LowAttendancePattern],
        );
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].title, "Attendance counseling");
    }
}

//! Wire-format tests: JSON field names, enum spellings and the fixed
//! model_version must match what downstream consumers parse.

use serde_json::{Value, json};
use swasthya_api::dto::{RiskRequest, RiskResponse};
use swasthya_api::validate::validate;
use swasthya_core::{EngineMetrics, evaluate};

fn score_json(request: Value) -> Value {
    let request: RiskRequest = serde_json::from_value(request).expect("request must deserialize");
    let input = validate(&request).expect("request must validate");
    let mut metrics = EngineMetrics::new();
    let assessment = evaluate(&input, &mut metrics);
    serde_json::to_value(RiskResponse::from(&assessment)).expect("response must serialize")
}

#[test]
fn test_low_risk_response_shape() {
    let response = score_json(json!({
        "bmi": 22.0,
        "vaccination_status": "COMPLETE",
        "temperature": 30.0,
        "aqi": 50,
        "attendance_ratio": 0.95,
    }));

    assert_eq!(response["score"], json!(0.145));
    assert_eq!(response["level"], json!("LOW"));
    assert_eq!(response["model_version"], json!("risk-engine-rule-v2"));
    assert_eq!(response["reason_codes"], json!(["BASELINE_LOW_RISK"]));
    assert_eq!(
        response["contributions"],
        json!({
            "bmi": 0.06,
            "vaccination": 0.0,
            "temperature": 0.05,
            "aqi": 0.03,
            "attendance": 0.005,
        })
    );
}

#[test]
fn test_action_objects_use_camel_case_parent_script_key() {
    let response = score_json(json!({
        "bmi": 32.0,
        "vaccination_status": "NONE",
        "temperature": 46.0,
        "aqi": 350,
        "attendance_ratio": 0.4,
    }));

    let actions = response["recommended_actions"]
        .as_array()
        .expect("recommended_actions must be an array");
    assert_eq!(actions.len(), 3);
    for action in actions {
        let object = action.as_object().expect("action must be an object");
        assert!(object.contains_key("type"));
        assert!(object.contains_key("priority"));
        assert!(object.contains_key("title"));
        assert!(object.contains_key("recommendation"));
        assert!(object.contains_key("tasks"));
        assert!(
            object.contains_key("parentScript"),
            "parent script key MUST be camelCase on the wire"
        );
        assert!(!object.contains_key("parent_script"));
    }
}

#[test]
fn test_high_risk_response_enums_and_dedup() {
    let response = score_json(json!({
        "bmi": 32.0,
        "vaccination_status": "NONE",
        "temperature": 46.0,
        "aqi": 350,
        "attendance_ratio": 0.4,
    }));

    assert_eq!(response["score"], json!(0.93));
    assert_eq!(response["level"], json!("HIGH"));
    assert_eq!(
        response["reason_codes"],
        json!([
            "BMI_OUT_OF_HEALTHY_RANGE",
            "VACCINATION_DELAY_OR_INCOMPLETE",
            "HEAT_STRESS_RISK",
            "AIR_QUALITY_EXPOSURE",
            "LOW_ATTENDANCE_PATTERN",
        ])
    );

    let actions = response["recommended_actions"].as_array().unwrap();
    assert_eq!(actions[0]["type"], json!("nutrition"));
    assert_eq!(actions[1]["type"], json!("health_camp"));
    assert_eq!(actions[2]["type"], json!("parent_counseling"));
    // Vaccination's high-priority camp referral wins over the AQI medium one.
    assert_eq!(actions[1]["priority"], json!("high"));
    assert_eq!(actions[1]["title"], json!("Vaccination catch-up referral"));
}

#[test]
fn test_identical_requests_serialize_identically() {
    let request = json!({
        "bmi": 19.5,
        "vaccination_status": "Delayed",
        "temperature": 41.0,
        "aqi": 180,
        "attendance_ratio": 0.7,
    });
    let first = score_json(request.clone());
    let second = score_json(request);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap(),
        "identical input MUST yield byte-identical output"
    );
}

//! Boundary validation for the risk endpoint.
//!
//! Out-of-range fields are rejected here, before the core is invoked; the
//! engine assumes pre-validated input. Unknown vaccination strings are not
//! an error (the core scores them as moderately risky).

use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use swasthya_core::RiskInput;

use crate::dto::RiskRequest;

/// Rejection for a malformed or out-of-range request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// `bmi` must be finite and strictly positive.
    BmiNotPositive,
    /// `temperature` must be a finite number.
    TemperatureNotFinite,
    /// `attendance_ratio` must be finite and within [0, 1].
    AttendanceRatioOutOfRange,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::BmiNotPositive => {
                write!(f, "bmi must be a finite number greater than 0")
            }
            ValidationError::TemperatureNotFinite => {
                write!(f, "temperature must be a finite number")
            }
            ValidationError::AttendanceRatioOutOfRange => {
                write!(f, "attendance_ratio must be a finite number in [0, 1]")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Validate a request and build the engine input.
///
/// Field checks, in order: bmi, temperature, attendance_ratio. The first
/// failing field wins.
pub fn validate(request: &RiskRequest) -> Result<RiskInput, ValidationError> {
    if !request.bmi.is_finite() || request.bmi <= 0.0 {
        return Err(ValidationError::BmiNotPositive);
    }
    if !request.temperature.is_finite() {
        return Err(ValidationError::TemperatureNotFinite);
    }
    if !request.attendance_ratio.is_finite() || !(0.0..=1.0).contains(&request.attendance_ratio) {
        return Err(ValidationError::AttendanceRatioOutOfRange);
    }

    Ok(RiskInput {
        bmi: request.bmi,
        vaccination_status: request.vaccination_status.clone(),
        temperature_c: request.temperature,
        aqi: request.aqi,
        attendance_ratio: request.attendance_ratio,
    })
}

//! Per-factor risk scoring tables.
//!
//! Each factor maps a raw observation to a normalized risk value in [0, 1].
//! The tables are fixed rule bands: thresholds are evaluated high-to-low and
//! band edges are inclusive as documented on each function.

// --- Vaccination status --------------------------------------------------

/// Vaccination coverage category for a student.
///
/// Free-form input strings are normalized (trim + uppercase) and matched
/// exactly; anything outside the known set lands in `Unrecognized`, which is
/// scored as moderately risky rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaccinationStatus {
    Complete,
    Partial,
    Delayed,
    None,
    Unrecognized,
}

impl VaccinationStatus {
    /// Parse a free-form status string.
    ///
    /// Case- and surrounding-whitespace-insensitive: `" complete "`,
    /// `"Complete"` and `"COMPLETE"` all parse to `Complete`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "COMPLETE" => VaccinationStatus::Complete,
            "PARTIAL" => VaccinationStatus::Partial,
            "DELAYED" => VaccinationStatus::Delayed,
            "NONE" => VaccinationStatus::None,
            _ => VaccinationStatus::Unrecognized,
        }
    }

    /// Normalized risk for this coverage category.
    pub fn risk_factor(self) -> f64 {
        match self {
            VaccinationStatus::Complete => 0.0,
            VaccinationStatus::Partial => 0.6,
            VaccinationStatus::Delayed => 0.8,
            VaccinationStatus::None => 1.0,
            VaccinationStatus::Unrecognized => 0.7,
        }
    }
}

// --- Factor tables -------------------------------------------------------

/// BMI risk band.
///
/// `<16.5 -> 1.0` (severe underweight), `[16.5, 18.5) -> 0.7`,
/// `[18.5, 24.9] -> 0.2` (healthy), `(24.9, 29.9] -> 0.6`, `>29.9 -> 0.9`.
pub fn bmi_factor(bmi: f64) -> f64 {
    if bmi < 16.5 {
        1.0
    } else if bmi < 18.5 {
        0.7
    } else if bmi <= 24.9 {
        0.2
    } else if bmi <= 29.9 {
        0.6
    } else {
        0.9
    }
}

/// Vaccination risk from the raw status string.
pub fn vaccination_factor(status: &str) -> f64 {
    VaccinationStatus::parse(status).risk_factor()
}

/// Heat stress risk from ambient temperature in Celsius.
///
/// `>=45 -> 1.0`, `>=40 -> 0.8`, `>=35 -> 0.5`, else `0.2`.
pub fn heatwave_factor(temperature_c: f64) -> f64 {
    if temperature_c >= 45.0 {
        1.0
    } else if temperature_c >= 40.0 {
        0.8
    } else if temperature_c >= 35.0 {
        0.5
    } else {
        0.2
    }
}

/// Air-quality risk from the AQI reading.
///
/// `>=300 -> 1.0`, `>=200 -> 0.8`, `>=120 -> 0.5`, else `0.2`.
pub fn aqi_factor(aqi: u32) -> f64 {
    if aqi >= 300 {
        1.0
    } else if aqi >= 200 {
        0.8
    } else if aqi >= 120 {
        0.5
    } else {
        0.2
    }
}

/// Attendance risk: linear, low attendance means high risk.
///
/// The caller guarantees `ratio` is within [0, 1].
pub fn attendance_factor(ratio: f64) -> f64 {
    1.0 - ratio
}

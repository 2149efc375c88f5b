//! Tolerance validation
//!
//! Evaluates every coordinate reading of a report against its tolerance
//! band and summarizes the outcome.

use serde::Serialize;

use crate::models::MeasurementReport;
use crate::models::enums::Axis;

/// An out-of-tolerance reading
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToleranceViolation {
    /// Element the reading belongs to
    pub element: String,
    /// Coordinate label
    pub label: String,
    pub axis: Axis,
    pub deviation: f64,
    pub upper_tolerance: f64,
    pub lower_tolerance: f64,
}

/// Summary of a tolerance evaluation
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToleranceReport {
    /// Readings evaluated
    pub readings: usize,
    /// Readings inside their tolerance band
    pub passed: usize,
    /// Readings outside their tolerance band
    pub failed: usize,
    /// One entry per failed reading
    pub violations: Vec<ToleranceViolation>,
}

impl ToleranceReport {
    /// Whether every reading passed
    pub fn is_ok(&self) -> bool {
        self.failed == 0
    }
}

/// Tolerance validator
#[derive(Debug, Clone, Default)]
pub struct ToleranceValidator;

impl ToleranceValidator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate all readings of a report
    pub fn validate(&self, report: &MeasurementReport) -> ToleranceReport {
        let mut summary = ToleranceReport::default();

        for element in &report.elements {
            for reading in &element.coordinates {
                summary.readings += 1;
                if reading.within_tolerance() {
                    summary.passed += 1;
                } else {
                    summary.failed += 1;
                    summary.violations.push(ToleranceViolation {
                        element: element.name.clone(),
                        label: reading.label.clone(),
                        axis: reading.axis,
                        deviation: reading.deviation,
                        upper_tolerance: reading.upper_tolerance,
                        lower_tolerance: reading.lower_tolerance,
                    });
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::ReportParser;

    #[test]
    fn test_all_within_tolerance() {
        let text = "\
円1  円(最小二乗法)  点数  (8)  内側
X-値_円1  X  12.503  12.500  0.050  0.001  0.003
";
        let result = ReportParser::new().parse(text);
        let summary = ToleranceValidator::new().validate(&result.report);
        assert_eq!(summary.readings, 1);
        assert_eq!(summary.passed, 1);
        assert!(summary.is_ok());
    }

    #[test]
    fn test_violation_recorded() {
        let text = "\
円1  円(最小二乗法)  点数  (8)  内側
X-値_円1  X  12.580  12.500  0.050  0.001  0.080
";
        let result = ReportParser::new().parse(text);
        let summary = ToleranceValidator::new().validate(&result.report);
        assert_eq!(summary.failed, 1);
        assert!(!summary.is_ok());

        let violation = &summary.violations[0];
        assert_eq!(violation.element, "円1");
        assert_eq!(violation.deviation, 0.08);
        assert_eq!(violation.upper_tolerance, 0.05);
    }
}

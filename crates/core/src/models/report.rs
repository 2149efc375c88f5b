//! Report model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::element::MeasurementElement;

/// Active coordinate system of the report (基本座標系) and its datums
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateSystem {
    /// The coordinate system header line, verbatim
    pub name: String,
    /// Datum lines (ﾃﾞｰﾀﾑ ...) following the header, verbatim
    #[serde(default)]
    pub datums: Vec<String>,
}

impl CoordinateSystem {
    pub fn new(name: String) -> Self {
        Self {
            name,
            datums: Vec::new(),
        }
    }
}

/// A parsed measurement report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementReport {
    /// Report identifier, assigned at parse time
    pub id: Uuid,
    /// Source name (usually the input file name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// When the report was parsed
    pub parsed_at: DateTime<Utc>,
    /// Active coordinate system, if the report declares one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<CoordinateSystem>,
    /// Measured elements in document order
    #[serde(default)]
    pub elements: Vec<MeasurementElement>,
}

impl MeasurementReport {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            source: None,
            parsed_at: Utc::now(),
            coordinate_system: None,
            elements: Vec::new(),
        }
    }

    /// Total number of coordinate readings across all elements
    pub fn reading_count(&self) -> usize {
        self.elements.iter().map(|e| e.coordinates.len()).sum()
    }
}

impl Default for MeasurementReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::ElementKind;

    #[test]
    fn test_reading_count_empty() {
        let report = MeasurementReport::new();
        assert_eq!(report.reading_count(), 0);
    }

    #[test]
    fn test_report_serializes_without_empty_optionals() {
        let mut report = MeasurementReport::new();
        report
            .elements
            .push(MeasurementElement::new("平面1".to_string(), ElementKind::Plane));
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("coordinateSystem"));
        assert!(json.contains("平面1"));
    }
}

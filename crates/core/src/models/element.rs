//! Measured element model

use serde::{Deserialize, Serialize};

use super::enums::{Axis, ElementKind, ProbeSide};

/// A single per-axis coordinate reading with its tolerance band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateReading {
    /// Report label for the reading (e.g. `X-値_円1`), original Japanese preserved
    pub label: String,
    /// Machine axis
    pub axis: Axis,
    /// Measured value
    pub measured: f64,
    /// Nominal (reference) value
    pub nominal: f64,
    /// Upper tolerance
    pub upper_tolerance: f64,
    /// Lower tolerance
    pub lower_tolerance: f64,
    /// Deviation from nominal
    pub deviation: f64,
}

impl CoordinateReading {
    /// Whether the deviation lies inside the tolerance band
    pub fn within_tolerance(&self) -> bool {
        self.lower_tolerance <= self.deviation && self.deviation <= self.upper_tolerance
    }
}

/// Diameter reading of a circle element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiameterReading {
    /// Measured diameter
    pub measured: f64,
    /// Nominal diameter
    pub nominal: f64,
    /// Deviation from nominal (normalized the same way as the inputs)
    pub deviation: f64,
}

/// Form statistics block of an element (the `S= ... 形状=` line)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormStatistics {
    /// Standard deviation of the probed points
    pub std_dev: f64,
    /// Minimum point deviation
    pub min_value: f64,
    /// Maximum point deviation
    pub max_value: f64,
    /// Form error (形状)
    pub form_error: f64,
}

/// One measured element (circle, plane or line) with everything the report
/// attached to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementElement {
    /// Element name as printed in the report (e.g. `円1`, `基準円2`, `平面1`)
    pub name: String,
    /// Kind of fitted element
    pub kind: ElementKind,
    /// Number of probed points (点数)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_count: Option<u32>,
    /// Probe side for circles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<ProbeSide>,
    /// Coordinate readings in document order
    #[serde(default)]
    pub coordinates: Vec<CoordinateReading>,
    /// Diameter reading, circles only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<DiameterReading>,
    /// Form statistics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<FormStatistics>,
}

impl MeasurementElement {
    pub fn new(name: String, kind: ElementKind) -> Self {
        Self {
            name,
            kind,
            point_count: None,
            side: None,
            coordinates: Vec::new(),
            diameter: None,
            statistics: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_tolerance() {
        let reading = CoordinateReading {
            label: "X-値_円1".to_string(),
            axis: Axis::X,
            measured: 12.503,
            nominal: 12.5,
            upper_tolerance: 0.05,
            lower_tolerance: 0.001,
            deviation: 0.003,
        };
        assert!(reading.within_tolerance());

        let out = CoordinateReading {
            deviation: 0.08,
            ..reading
        };
        assert!(!out.within_tolerance());
    }

    #[test]
    fn test_new_element_is_empty() {
        let element = MeasurementElement::new("円1".to_string(), ElementKind::Circle);
        assert!(element.coordinates.is_empty());
        assert!(element.diameter.is_none());
        assert!(element.statistics.is_none());
    }
}

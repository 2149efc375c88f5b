//! Enumerations shared across the measurement model

use serde::{Deserialize, Serialize};

/// Kind of measured element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Circle fitted by least squares (円, including reference circles 基準円)
    Circle,
    /// Plane fitted by least squares (平面)
    Plane,
    /// Straight line fitted by least squares (直線)
    Line,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Circle => write!(f, "circle"),
            ElementKind::Plane => write!(f, "plane"),
            ElementKind::Line => write!(f, "line"),
        }
    }
}

/// Probe side of a circle measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeSide {
    /// 内側 - probed from inside (bore)
    Inner,
    /// 外側 - probed from outside (boss)
    Outer,
}

impl ProbeSide {
    /// Parse the report label for a probe side
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "内側" => Some(ProbeSide::Inner),
            "外側" => Some(ProbeSide::Outer),
            _ => None,
        }
    }

    /// Original report label
    pub fn label(&self) -> &'static str {
        match self {
            ProbeSide::Inner => "内側",
            ProbeSide::Outer => "外側",
        }
    }
}

impl std::fmt::Display for ProbeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeSide::Inner => write!(f, "inner"),
            ProbeSide::Outer => write!(f, "outer"),
        }
    }
}

/// Machine axis of a coordinate reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Parse a single-letter axis label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "X" => Some(Axis::X),
            "Y" => Some(Axis::Y),
            "Z" => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Line patterns for CMM report text
//!
//! The report body is a sequence of formatted lines; each is classified by
//! substring search against a fixed set of patterns, checked in precedence
//! order: element headers (circle, plane, line) first, then coordinate
//! values, diameters and form statistics.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::enums::{Axis, ElementKind, ProbeSide};

static CIRCLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    // The side clause is optional as a whole; side-less circle headers end
    // right after the point count.
    Regex::new(r"(円\d+|基準円\d+)\s+円\(最小二乗法\)\s+点数\s+\((\d+)\)(?:\s+(内側|外側))?")
        .unwrap()
});

static PLANE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(平面\d+|.*平面)\s+平面\(最小二乗法\)\s+点数\s+\((\d+)\)").unwrap());

static LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.*線)\s+直線\(最小二乗法\)\s+点数\s+\((\d+)\)").unwrap());

static COORDINATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([XYZ]-値_.*?|[XYZ])\s+([XYZ])\s+([-\d.]+)\s+([-\d.]+)\s+([-\d.]+)\s+([-\d.]+)\s+([-\d.]+)",
    )
    .unwrap()
});

static DIAMETER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"D\s+([\d.]+)\s+([\d.]+)").unwrap());

static STATISTICS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"S=\s+([\d.]+)\s+Min=\([^)]+\)\s+([-\d.]+)\s+Max=\([^)]+\)\s+([-\d.]+)\s+形状=\s+([\d.]+)",
    )
    .unwrap()
});

/// Marker substring for the coordinate system header line
pub const COORDINATE_SYSTEM_MARKER: &str = "基本座標系";

/// Marker substring for datum lines (half-width katakana as printed)
pub const DATUM_MARKER: &str = "ﾃﾞｰﾀﾑ";

/// A successfully classified report line
#[derive(Debug, Clone, PartialEq)]
pub enum LineMatch {
    /// Element header opening a new element
    Element {
        name: String,
        kind: ElementKind,
        point_count: u32,
        side: Option<ProbeSide>,
    },
    /// Per-axis coordinate reading attached to the open element
    Coordinate {
        label: String,
        axis: Axis,
        measured: f64,
        nominal: f64,
        upper_tolerance: f64,
        lower_tolerance: f64,
        deviation: f64,
    },
    /// Diameter reading attached to the open element
    Diameter { measured: f64, nominal: f64 },
    /// Form statistics attached to the open element
    Statistics {
        std_dev: f64,
        min_value: f64,
        max_value: f64,
        form_error: f64,
    },
}

/// A line that matched a pattern but carried an unparseable value
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedLine {
    /// Name of the pattern that matched
    pub pattern: &'static str,
    /// The offending line
    pub line: String,
}

fn number(caps: &Captures<'_>, index: usize) -> Option<f64> {
    caps.get(index)?.as_str().parse::<f64>().ok()
}

/// Classify a report line
///
/// Returns `Ok(None)` for lines matching no pattern, and `Err` when a
/// pattern matched but one of its captured values failed to parse.
pub fn match_line(line: &str) -> Result<Option<LineMatch>, MalformedLine> {
    if let Some(caps) = CIRCLE_REGEX.captures(line) {
        let point_count = caps[2].parse::<u32>().map_err(|_| MalformedLine {
            pattern: "circle",
            line: line.to_string(),
        })?;
        return Ok(Some(LineMatch::Element {
            name: caps[1].to_string(),
            kind: ElementKind::Circle,
            point_count,
            side: caps.get(3).and_then(|m| ProbeSide::from_label(m.as_str())),
        }));
    }

    if let Some(caps) = PLANE_REGEX.captures(line) {
        let point_count = caps[2].parse::<u32>().map_err(|_| MalformedLine {
            pattern: "plane",
            line: line.to_string(),
        })?;
        return Ok(Some(LineMatch::Element {
            name: caps[1].to_string(),
            kind: ElementKind::Plane,
            point_count,
            side: None,
        }));
    }

    if let Some(caps) = LINE_REGEX.captures(line) {
        let point_count = caps[2].parse::<u32>().map_err(|_| MalformedLine {
            pattern: "line",
            line: line.to_string(),
        })?;
        return Ok(Some(LineMatch::Element {
            name: caps[1].to_string(),
            kind: ElementKind::Line,
            point_count,
            side: None,
        }));
    }

    if let Some(caps) = COORDINATE_REGEX.captures(line) {
        let malformed = || MalformedLine {
            pattern: "coordinate",
            line: line.to_string(),
        };
        let axis = Axis::from_label(&caps[2]).ok_or_else(malformed)?;
        return Ok(Some(LineMatch::Coordinate {
            label: caps[1].to_string(),
            axis,
            measured: number(&caps, 3).ok_or_else(malformed)?,
            nominal: number(&caps, 4).ok_or_else(malformed)?,
            upper_tolerance: number(&caps, 5).ok_or_else(malformed)?,
            lower_tolerance: number(&caps, 6).ok_or_else(malformed)?,
            deviation: number(&caps, 7).ok_or_else(malformed)?,
        }));
    }

    if let Some(caps) = DIAMETER_REGEX.captures(line) {
        let malformed = || MalformedLine {
            pattern: "diameter",
            line: line.to_string(),
        };
        return Ok(Some(LineMatch::Diameter {
            measured: number(&caps, 1).ok_or_else(malformed)?,
            nominal: number(&caps, 2).ok_or_else(malformed)?,
        }));
    }

    if let Some(caps) = STATISTICS_REGEX.captures(line) {
        let malformed = || MalformedLine {
            pattern: "statistics",
            line: line.to_string(),
        };
        return Ok(Some(LineMatch::Statistics {
            std_dev: number(&caps, 1).ok_or_else(malformed)?,
            min_value: number(&caps, 2).ok_or_else(malformed)?,
            max_value: number(&caps, 3).ok_or_else(malformed)?,
            form_error: number(&caps, 4).ok_or_else(malformed)?,
        }));
    }

    Ok(None)
}

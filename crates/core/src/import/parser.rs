//! Report text parser
//!
//! Walks the extracted report text line by line, classifying each line via
//! [`patterns`](super::patterns) and assembling the measurement model. An
//! element header closes the currently open element; coordinate, diameter
//! and statistics lines attach to the open element.

use tracing::debug;

use super::patterns::{self, COORDINATE_SYSTEM_MARKER, DATUM_MARKER, LineMatch};
use super::{ImportResult, ParseStats, ParseWarning};
use crate::models::{
    CoordinateReading, CoordinateSystem, DiameterReading, FormStatistics, MeasurementElement,
    MeasurementReport,
};

/// Parser behavior knobs
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Store all numeric values as absolute values. This mirrors the source
    /// report convention where signs are not significant; note it also
    /// strips the sign of the lower tolerance, so the tolerance band check
    /// runs over magnitudes.
    pub absolute_values: bool,
    /// How many lines past a coordinate system header are scanned for
    /// datum entries.
    pub datum_lookahead: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            absolute_values: true,
            datum_lookahead: 10,
        }
    }
}

/// Parses report text into a [`MeasurementReport`]
#[derive(Debug, Clone, Default)]
pub struct ReportParser {
    options: ParserOptions,
}

impl ReportParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    fn normalize(&self, value: f64) -> f64 {
        if self.options.absolute_values {
            value.abs()
        } else {
            value
        }
    }

    /// Parse report text
    ///
    /// Parsing never fails outright; lines that match a pattern but carry
    /// junk values, and value lines appearing outside any element, are
    /// reported as warnings and skipped.
    pub fn parse(&self, text: &str) -> ImportResult {
        let lines: Vec<&str> = text.lines().collect();

        let mut report = MeasurementReport::new();
        let mut stats = ParseStats::default();
        let mut warnings: Vec<ParseWarning> = Vec::new();
        let mut current: Option<MeasurementElement> = None;

        for (index, raw) in lines.iter().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            stats.lines_scanned += 1;

            match patterns::match_line(line) {
                Err(malformed) => {
                    warnings.push(ParseWarning {
                        line: index + 1,
                        message: format!(
                            "{} line has an unparseable value: {}",
                            malformed.pattern, malformed.line
                        ),
                    });
                }
                Ok(Some(LineMatch::Element {
                    name,
                    kind,
                    point_count,
                    side,
                })) => {
                    stats.lines_matched += 1;
                    if let Some(done) = current.take() {
                        report.elements.push(done);
                    }
                    let mut element = MeasurementElement::new(name, kind);
                    element.point_count = Some(point_count);
                    element.side = side;
                    current = Some(element);
                }
                Ok(Some(LineMatch::Coordinate {
                    label,
                    axis,
                    measured,
                    nominal,
                    upper_tolerance,
                    lower_tolerance,
                    deviation,
                })) => {
                    stats.lines_matched += 1;
                    match current.as_mut() {
                        Some(element) => {
                            element.coordinates.push(CoordinateReading {
                                label,
                                axis,
                                measured: self.normalize(measured),
                                nominal: self.normalize(nominal),
                                upper_tolerance: self.normalize(upper_tolerance),
                                lower_tolerance: self.normalize(lower_tolerance),
                                deviation: self.normalize(deviation),
                            });
                            stats.coordinate_readings += 1;
                        }
                        None => warnings.push(ParseWarning {
                            line: index + 1,
                            message: "coordinate reading before any element header".to_string(),
                        }),
                    }
                }
                Ok(Some(LineMatch::Diameter { measured, nominal })) => {
                    stats.lines_matched += 1;
                    match current.as_mut() {
                        Some(element) => {
                            let measured = self.normalize(measured);
                            let nominal = self.normalize(nominal);
                            element.diameter = Some(DiameterReading {
                                measured,
                                nominal,
                                deviation: self.normalize(measured - nominal),
                            });
                        }
                        None => warnings.push(ParseWarning {
                            line: index + 1,
                            message: "diameter reading before any element header".to_string(),
                        }),
                    }
                }
                Ok(Some(LineMatch::Statistics {
                    std_dev,
                    min_value,
                    max_value,
                    form_error,
                })) => {
                    stats.lines_matched += 1;
                    match current.as_mut() {
                        Some(element) => {
                            element.statistics = Some(FormStatistics {
                                std_dev: self.normalize(std_dev),
                                min_value: self.normalize(min_value),
                                max_value: self.normalize(max_value),
                                form_error: self.normalize(form_error),
                            });
                        }
                        None => warnings.push(ParseWarning {
                            line: index + 1,
                            message: "statistics line before any element header".to_string(),
                        }),
                    }
                }
                Ok(None) => {}
            }

            if line.contains(COORDINATE_SYSTEM_MARKER) {
                self.capture_coordinate_system(&mut report, &lines, index, line);
            }
        }

        if let Some(done) = current.take() {
            report.elements.push(done);
        }

        stats.elements = report.elements.len();
        debug!(
            elements = stats.elements,
            readings = stats.coordinate_readings,
            warnings = warnings.len(),
            "report parsed"
        );

        ImportResult {
            report,
            stats,
            warnings,
        }
    }

    /// Record the coordinate system header and scan the following lines for
    /// datum entries.
    fn capture_coordinate_system(
        &self,
        report: &mut MeasurementReport,
        lines: &[&str],
        index: usize,
        header: &str,
    ) {
        let system = report
            .coordinate_system
            .get_or_insert_with(|| CoordinateSystem::new(header.to_string()));
        system.name = header.to_string();

        let end = lines.len().min(index + self.options.datum_lookahead);
        for line in &lines[index + 1..end] {
            let line = line.trim();
            if line.contains(DATUM_MARKER) {
                system.datums.push(line.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{Axis, ElementKind, ProbeSide};

    const SAMPLE: &str = "\
測定プログラム: SHAFT-01

基本座標系 3-2-1
ﾃﾞｰﾀﾑ A 平面1
ﾃﾞｰﾀﾑ B 中心線

円1  円(最小二乗法)  点数  (8)  内側
X-値_円1  X  12.503  12.500  0.050  -0.020  0.003
Y-値_円1  Y  -3.002  3.000  0.020  0.001  -0.002
D  25.012  25.000
S=  0.004  Min=(点 3)  -0.006  Max=(点 7)  0.008  形状=  0.014

平面1  平面(最小二乗法)  点数  (12)
Z-値_平面1  Z  5.001  5.000  0.010  0.0005  0.001
";

    #[test]
    fn test_parse_sample_structure() {
        let result = ReportParser::new().parse(SAMPLE);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);

        let report = &result.report;
        assert_eq!(report.elements.len(), 2);

        let circle = &report.elements[0];
        assert_eq!(circle.name, "円1");
        assert_eq!(circle.kind, ElementKind::Circle);
        assert_eq!(circle.point_count, Some(8));
        assert_eq!(circle.side, Some(ProbeSide::Inner));
        assert_eq!(circle.coordinates.len(), 2);
        assert!(circle.diameter.is_some());
        assert!(circle.statistics.is_some());

        let plane = &report.elements[1];
        assert_eq!(plane.name, "平面1");
        assert_eq!(plane.kind, ElementKind::Plane);
        assert_eq!(plane.coordinates.len(), 1);
        assert_eq!(plane.coordinates[0].axis, Axis::Z);
    }

    #[test]
    fn test_parse_stats() {
        let result = ReportParser::new().parse(SAMPLE);
        assert_eq!(result.stats.elements, 2);
        assert_eq!(result.stats.coordinate_readings, 3);
        // 2 headers + 3 coordinates + 1 diameter + 1 statistics
        assert_eq!(result.stats.lines_matched, 7);
    }

    #[test]
    fn test_absolute_normalization_default() {
        let result = ReportParser::new().parse(SAMPLE);
        let y = &result.report.elements[0].coordinates[1];
        assert_eq!(y.measured, 3.002);
        assert_eq!(y.deviation, 0.002);

        let diameter = result.report.elements[0].diameter.as_ref().unwrap();
        assert!((diameter.deviation - 0.012).abs() < 1e-9);
    }

    #[test]
    fn test_signed_mode_preserves_signs() {
        let parser = ReportParser::with_options(ParserOptions {
            absolute_values: false,
            ..ParserOptions::default()
        });
        let result = parser.parse(SAMPLE);
        let y = &result.report.elements[0].coordinates[1];
        assert_eq!(y.measured, -3.002);
        assert_eq!(y.deviation, -0.002);

        let x = &result.report.elements[0].coordinates[0];
        assert_eq!(x.lower_tolerance, -0.02);
    }

    #[test]
    fn test_coordinate_system_and_datums() {
        let result = ReportParser::new().parse(SAMPLE);
        let system = result.report.coordinate_system.as_ref().unwrap();
        assert!(system.name.contains("基本座標系"));
        assert_eq!(system.datums.len(), 2);
        assert!(system.datums[0].contains("ﾃﾞｰﾀﾑ A"));
    }

    #[test]
    fn test_value_line_outside_element_warns() {
        let text = "X-値_円1  X  12.503  12.500  0.050  -0.020  0.003\n";
        let result = ReportParser::new().parse(text);
        assert_eq!(result.report.elements.len(), 0);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].line, 1);
    }

    #[test]
    fn test_malformed_value_line_warns_and_continues() {
        let text = "\
円1  円(最小二乗法)  点数  (8)  内側
X-値_円1  X  12..5.3  12.500  0.050  -0.020  0.003
Y-値_円1  Y  3.002  3.000  0.020  0.001  0.002
";
        let result = ReportParser::new().parse(text);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.report.elements[0].coordinates.len(), 1);
        assert_eq!(result.report.elements[0].coordinates[0].axis, Axis::Y);
    }

    #[test]
    fn test_trailing_element_is_flushed() {
        let text = "中心線  直線(最小二乗法)  点数  (6)\n";
        let result = ReportParser::new().parse(text);
        assert_eq!(result.report.elements.len(), 1);
        assert_eq!(result.report.elements[0].kind, ElementKind::Line);
    }

    #[test]
    fn test_datum_lookahead_window() {
        let parser = ReportParser::with_options(ParserOptions {
            datum_lookahead: 2,
            ..ParserOptions::default()
        });
        let text = "\
基本座標系 3-2-1
ﾃﾞｰﾀﾑ A 平面1
ﾃﾞｰﾀﾑ B 中心線
";
        let result = parser.parse(text);
        let system = result.report.coordinate_system.as_ref().unwrap();
        // Window of 2 covers only the line directly after the header.
        assert_eq!(system.datums.len(), 1);
    }
}

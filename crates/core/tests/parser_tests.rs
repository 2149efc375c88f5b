//! End-to-end parser tests over a full report sample

use cmm_report_core::{
    Axis, ElementKind, ParserOptions, ProbeSide, ReportParser, TextImporter, ToleranceValidator,
};

/// A report body covering every line form the parser understands: the
/// coordinate system block, circles (with side, diameter and statistics),
/// a reference circle, a plane and a fitted line.
const FULL_REPORT: &str = "\
測定結果報告書
品番: SHAFT-01  検査日: 2024/01/15

基本座標系 3-2-1
ﾃﾞｰﾀﾑ A 平面1
ﾃﾞｰﾀﾑ B 中心線
ﾃﾞｰﾀﾑ C 円1

円1  円(最小二乗法)  点数  (8)  内側
X-値_円1  X  12.503  12.500  0.050  0.001  0.003
Y-値_円1  Y  -3.002  3.000  0.020  0.001  -0.002
D  25.012  25.000
S=  0.004  Min=(点 3)  -0.006  Max=(点 7)  0.008  形状=  0.014

基準円2  円(最小二乗法)  点数  (12)  外側
X-値_基準円2  X  40.005  40.000  0.100  0.002  0.005
D  80.021  80.000

平面1  平面(最小二乗法)  点数  (16)
Z-値_平面1  Z  5.001  5.000  0.010  0.0005  0.001
S=  0.002  Min=(点 2)  -0.003  Max=(点 9)  0.004  形状=  0.007

中心線  直線(最小二乗法)  点数  (6)
Y-値_中心線  Y  0.004  0.000  0.030  0.001  0.004
";

fn parse_full() -> cmm_report_core::ImportResult {
    ReportParser::new().parse(FULL_REPORT)
}

mod structure_tests {
    use super::*;

    #[test]
    fn test_element_inventory_in_document_order() {
        let result = parse_full();
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);

        let names: Vec<&str> = result
            .report
            .elements
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["円1", "基準円2", "平面1", "中心線"]);

        let kinds: Vec<ElementKind> = result.report.elements.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [
                ElementKind::Circle,
                ElementKind::Circle,
                ElementKind::Plane,
                ElementKind::Line
            ]
        );
    }

    #[test]
    fn test_circle_details() {
        let result = parse_full();
        let circle = &result.report.elements[0];
        assert_eq!(circle.point_count, Some(8));
        assert_eq!(circle.side, Some(ProbeSide::Inner));
        assert_eq!(circle.coordinates.len(), 2);

        let diameter = circle.diameter.as_ref().unwrap();
        assert_eq!(diameter.measured, 25.012);
        assert_eq!(diameter.nominal, 25.0);

        let stats = circle.statistics.as_ref().unwrap();
        assert_eq!(stats.std_dev, 0.004);
        assert_eq!(stats.form_error, 0.014);
    }

    #[test]
    fn test_reference_circle_has_outer_side() {
        let result = parse_full();
        let reference = &result.report.elements[1];
        assert_eq!(reference.name, "基準円2");
        assert_eq!(reference.side, Some(ProbeSide::Outer));
        assert!(reference.statistics.is_none());
    }

    #[test]
    fn test_coordinate_system_block() {
        let result = parse_full();
        let system = result.report.coordinate_system.as_ref().unwrap();
        assert_eq!(system.name, "基本座標系 3-2-1");
        assert_eq!(system.datums.len(), 3);
        assert!(system.datums[2].contains("円1"));
    }

    #[test]
    fn test_reading_count() {
        let result = parse_full();
        assert_eq!(result.report.reading_count(), 5);
        assert_eq!(result.stats.coordinate_readings, 5);
        assert_eq!(result.stats.elements, 4);
    }

    #[test]
    fn test_labels_keep_original_japanese() {
        let result = parse_full();
        let label = &result.report.elements[0].coordinates[0].label;
        assert_eq!(label, "X-値_円1");
    }
}

mod normalization_tests {
    use super::*;

    #[test]
    fn test_absolute_values_by_default() {
        let result = parse_full();
        let y = &result.report.elements[0].coordinates[1];
        assert_eq!(y.measured, 3.002);
        assert_eq!(y.deviation, 0.002);

        let stats = result.report.elements[0].statistics.as_ref().unwrap();
        assert_eq!(stats.min_value, 0.006);
    }

    #[test]
    fn test_signed_mode() {
        let parser = ReportParser::with_options(ParserOptions {
            absolute_values: false,
            ..ParserOptions::default()
        });
        let result = parser.parse(FULL_REPORT);
        let y = &result.report.elements[0].coordinates[1];
        assert_eq!(y.measured, -3.002);

        let stats = result.report.elements[0].statistics.as_ref().unwrap();
        assert_eq!(stats.min_value, -0.006);
    }
}

mod tolerance_tests {
    use super::*;

    #[test]
    fn test_full_report_is_within_tolerance() {
        let result = parse_full();
        let summary = ToleranceValidator::new().validate(&result.report);
        assert_eq!(summary.readings, 5);
        assert_eq!(summary.failed, 0);
        assert!(summary.is_ok());
    }

    #[test]
    fn test_out_of_band_reading_is_flagged() {
        let text = "\
平面1  平面(最小二乗法)  点数  (16)
Z-値_平面1  Z  5.020  5.000  0.010  0.0005  0.020
";
        let result = ReportParser::new().parse(text);
        let summary = ToleranceValidator::new().validate(&result.report);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.violations[0].element, "平面1");
    }
}

mod importer_tests {
    use super::*;

    #[test]
    fn test_text_importer_over_full_report() {
        let result = TextImporter::new()
            .import_bytes(FULL_REPORT.as_bytes())
            .unwrap();
        assert_eq!(result.report.elements.len(), 4);
    }

    #[test]
    fn test_text_importer_shift_jis() {
        let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode(FULL_REPORT);
        let result = TextImporter::new()
            .with_encoding("shift_jis")
            .import_bytes(&encoded)
            .unwrap();
        assert_eq!(result.report.elements.len(), 4);
        assert_eq!(result.report.elements[0].name, "円1");
    }

    #[test]
    fn test_import_path_records_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shaft01.txt");
        std::fs::write(&path, FULL_REPORT).unwrap();

        let result = TextImporter::new().import_path(&path).unwrap();
        assert_eq!(result.report.source.as_deref(), Some("shaft01.txt"));
    }
}

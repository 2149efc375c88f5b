//! Output formatting for CLI

use cmm_report_core::{ImportResult, MeasurementElement, ToleranceReport};

/// Format an import result in compact mode
pub fn format_compact_output(result: &ImportResult) -> String {
    let mut output = String::new();

    if !result.warnings.is_empty() {
        output.push_str("\n⚠️  Parse Warnings:\n");
        for warning in &result.warnings {
            output.push_str(&format!("  - {}\n", warning));
        }
    }

    output.push_str(&format!(
        "\n✅ Parsed {} element(s):\n",
        result.report.elements.len()
    ));
    for (idx, element) in result.report.elements.iter().enumerate() {
        output.push_str(&format!(
            "\nElement {}: {} ({})\n",
            idx + 1,
            element.name,
            element.kind
        ));
        if let Some(points) = element.point_count {
            output.push_str(&format!("  Points: {}\n", points));
        }
        output.push_str(&format!("  Readings: {}\n", element.coordinates.len()));
    }

    if result.warnings.is_empty() {
        output.push_str("\n✅ All lines parsed cleanly!\n");
    }

    output
}

/// Format an import result in pretty mode
pub fn format_pretty_output(result: &ImportResult) -> String {
    let mut output = String::new();

    if !result.warnings.is_empty() {
        output.push_str("\n⚠️  Parse Warnings:\n");
        for warning in &result.warnings {
            output.push_str(&format!("  - {}\n", warning));
        }
    }

    if let Some(system) = &result.report.coordinate_system {
        output.push_str(&format!("\nCoordinate System: {}\n", system.name));
        for datum in &system.datums {
            output.push_str(&format!("  - {}\n", datum));
        }
    }

    output.push_str(&format!(
        "\n✅ Parsed {} element(s):\n",
        result.report.elements.len()
    ));
    for (idx, element) in result.report.elements.iter().enumerate() {
        output.push_str(&format!(
            "\nElement {}: {} ({})\n",
            idx + 1,
            element.name,
            element.kind
        ));
        format_element_details(&mut output, element);
    }

    output.push_str(&format!(
        "\nLines scanned: {}  matched: {}\n",
        result.stats.lines_scanned, result.stats.lines_matched
    ));

    output
}

fn format_element_details(output: &mut String, element: &MeasurementElement) {
    if let Some(points) = element.point_count {
        output.push_str(&format!("  Points: {}\n", points));
    }
    if let Some(side) = element.side {
        output.push_str(&format!("  Side: {}\n", side));
    }

    for reading in &element.coordinates {
        let status = if reading.within_tolerance() {
            "ok"
        } else {
            "OUT"
        };
        output.push_str(&format!(
            "    {} {} measured {} nominal {} dev {} [{} .. {}] {}\n",
            reading.label,
            reading.axis,
            reading.measured,
            reading.nominal,
            reading.deviation,
            reading.lower_tolerance,
            reading.upper_tolerance,
            status
        ));
    }

    if let Some(diameter) = &element.diameter {
        output.push_str(&format!(
            "    D measured {} nominal {} dev {}\n",
            diameter.measured, diameter.nominal, diameter.deviation
        ));
    }

    if let Some(stats) = &element.statistics {
        output.push_str(&format!(
            "    S= {} min {} max {} form {}\n",
            stats.std_dev, stats.min_value, stats.max_value, stats.form_error
        ));
    }
}

/// Format a tolerance evaluation summary
pub fn format_check_output(summary: &ToleranceReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\nReadings: {}  passed: {}  failed: {}\n",
        summary.readings, summary.passed, summary.failed
    ));

    if summary.violations.is_empty() {
        output.push_str("\n✅ All readings within tolerance!\n");
        return output;
    }

    output.push_str("\n⚠️  Out of tolerance:\n");
    for violation in &summary.violations {
        output.push_str(&format!(
            "  - {} {} ({}) deviation {} outside [{} .. {}]\n",
            violation.element,
            violation.label,
            violation.axis,
            violation.deviation,
            violation.lower_tolerance,
            violation.upper_tolerance
        ));
    }

    output
}

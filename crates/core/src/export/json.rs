//! JSON export

use super::{ExportError, ExportResult};
use crate::models::MeasurementReport;
use crate::table::DetailTable;

/// JSON exporter for reports and detail tables
#[derive(Debug, Clone, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }

    /// Export the structured report model
    pub fn export_report(&self, report: &MeasurementReport) -> Result<ExportResult, ExportError> {
        let content = serde_json::to_string_pretty(report)
            .map_err(|e| ExportError::SerializationError(e.to_string()))?;
        Ok(ExportResult {
            content,
            format: "json".to_string(),
        })
    }

    /// Export the flattened detail table
    pub fn export_table(&self, table: &DetailTable) -> Result<ExportResult, ExportError> {
        let content = serde_json::to_string_pretty(table)
            .map_err(|e| ExportError::SerializationError(e.to_string()))?;
        Ok(ExportResult {
            content,
            format: "json".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::ReportParser;
    use crate::models::MeasurementReport;

    #[test]
    fn test_report_round_trip() {
        let text = "\
円1  円(最小二乗法)  点数  (8)  内側
X-値_円1  X  12.503  12.500  0.050  0.001  0.003
";
        let parsed = ReportParser::new().parse(text).report;
        let json = JsonExporter::new().export_report(&parsed).unwrap();
        let back: MeasurementReport = serde_json::from_str(&json.content).unwrap();
        assert_eq!(back, parsed);
    }
}

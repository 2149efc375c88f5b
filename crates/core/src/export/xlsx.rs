//! XLSX export
//!
//! Writes the detail table as a single-sheet workbook with a bold header
//! row. The workbook bytes are base64 encoded into the generic
//! [`ExportResult`]; callers that write files directly can use
//! [`XlsxExporter::workbook_bytes`].

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rust_xlsxwriter::{Format, Workbook};

use super::{ExportError, ExportResult};
use crate::table::{Cell, DetailTable};

/// XLSX exporter for detail tables
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    sheet_name: String,
}

impl Default for XlsxExporter {
    fn default() -> Self {
        Self {
            sheet_name: "Measurements".to_string(),
        }
    }
}

impl XlsxExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Render a detail table as base64-encoded workbook bytes
    pub fn export(&self, table: &DetailTable) -> Result<ExportResult, ExportError> {
        let bytes = self.workbook_bytes(table)?;
        Ok(ExportResult {
            content: BASE64.encode(&bytes),
            format: "xlsx".to_string(),
        })
    }

    /// Render a detail table as raw workbook bytes
    pub fn workbook_bytes(&self, table: &DetailTable) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(self.sheet_name.as_str())
            .map_err(|e| ExportError::ExportError(e.to_string()))?;

        let header_format = Format::new().set_bold();
        for (col, header) in DetailTable::HEADERS.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(|e| ExportError::ExportError(e.to_string()))?;
        }

        for (index, row) in table.rows.iter().enumerate() {
            let row_num = (index + 1) as u32;
            for (col, cell) in row.cells().into_iter().enumerate() {
                let col_num = col as u16;
                let written = match cell {
                    Cell::Empty => Ok(&mut *worksheet),
                    Cell::Text(s) => worksheet.write_string(row_num, col_num, s),
                    Cell::Integer(n) => worksheet.write_number(row_num, col_num, n as f64),
                    Cell::Number(v) => worksheet.write_number(row_num, col_num, v),
                    Cell::Bool(b) => worksheet.write_boolean(row_num, col_num, b),
                };
                written.map_err(|e| ExportError::ExportError(e.to_string()))?;
            }
        }

        workbook
            .save_to_buffer()
            .map_err(|e| ExportError::ExportError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::ReportParser;
    use crate::table::TableOptions;

    #[test]
    fn test_workbook_bytes_are_a_zip() {
        let text = "\
円1  円(最小二乗法)  点数  (8)  内側
X-値_円1  X  12.503  12.500  0.050  0.001  0.003
";
        let result = ReportParser::new().parse(text);
        let table = DetailTable::from_report(&result.report, &TableOptions::default());

        let bytes = XlsxExporter::new().workbook_bytes(&table).unwrap();
        // XLSX is a ZIP container.
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_base64_content_decodes() {
        let table = DetailTable::default();
        let result = XlsxExporter::new().export(&table).unwrap();
        assert_eq!(result.format, "xlsx");
        let bytes = BASE64.decode(result.content.as_bytes()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}

//! CSV export
//!
//! Writes the detail table as RFC 4180 CSV. Output carries a UTF-8 BOM by
//! default so spreadsheet tools pick the right charset for the Japanese
//! labels.

use super::{ExportError, ExportResult};
use crate::table::{Cell, DetailTable};

const BOM: char = '\u{feff}';

/// CSV exporter for detail tables
#[derive(Debug, Clone)]
pub struct CsvExporter {
    include_bom: bool,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self { include_bom: true }
    }
}

impl CsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_bom(mut self, include: bool) -> Self {
        self.include_bom = include;
        self
    }

    /// Render a detail table as CSV
    pub fn export(&self, table: &DetailTable) -> Result<ExportResult, ExportError> {
        let mut content = String::new();
        if self.include_bom {
            content.push(BOM);
        }

        content.push_str(&render_record(
            DetailTable::HEADERS.iter().map(|h| h.to_string()),
        ));

        for row in &table.rows {
            content.push_str(&render_record(row.cells().iter().map(render_cell)));
        }

        Ok(ExportResult {
            content,
            format: "csv".to_string(),
        })
    }
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(s) => s.clone(),
        Cell::Integer(n) => n.to_string(),
        Cell::Number(v) => v.to_string(),
        Cell::Bool(b) => b.to_string(),
    }
}

fn render_record(fields: impl Iterator<Item = String>) -> String {
    let mut record = fields
        .map(|f| escape_field(&f))
        .collect::<Vec<_>>()
        .join(",");
    record.push('\n');
    record
}

/// Quote a field when it contains a delimiter, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

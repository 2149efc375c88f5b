//! Detail-table flattening
//!
//! Turns a [`MeasurementReport`](crate::models::MeasurementReport) into a
//! flat table with one row per coordinate reading (elements without
//! readings contribute a single base row), ready for CSV/XLSX export.

pub mod translate;

use serde::Serialize;

use crate::models::enums::{Axis, ElementKind};
use crate::models::{MeasurementElement, MeasurementReport};

/// Table building options
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Romanize Japanese labels (element names, coordinate labels, probe
    /// sides) into ASCII
    pub romanize_labels: bool,
}

/// A single detail row
///
/// Statistics, diameter and coordinate columns are optional: they stay
/// blank for elements that did not report them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRow {
    pub element_name: String,
    pub kind: ElementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_error: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter_measured: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter_nominal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter_deviation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nominal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_tolerance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_tolerance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deviation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within_tolerance: Option<bool>,
}

/// A typed cell value, aligned with [`DetailTable::HEADERS`]
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Integer(u64),
    Number(f64),
    Bool(bool),
}

impl DetailRow {
    fn base(element: &MeasurementElement, options: &TableOptions) -> Self {
        let label = |s: &str| {
            if options.romanize_labels {
                translate::romanize(s)
            } else {
                s.to_string()
            }
        };
        Self {
            element_name: label(&element.name),
            kind: element.kind,
            point_count: element.point_count,
            side: element.side.map(|s| label(s.label())),
            std_dev: element.statistics.as_ref().map(|s| s.std_dev),
            min_value: element.statistics.as_ref().map(|s| s.min_value),
            max_value: element.statistics.as_ref().map(|s| s.max_value),
            form_error: element.statistics.as_ref().map(|s| s.form_error),
            diameter_measured: element.diameter.as_ref().map(|d| d.measured),
            diameter_nominal: element.diameter.as_ref().map(|d| d.nominal),
            diameter_deviation: element.diameter.as_ref().map(|d| d.deviation),
            coordinate_label: None,
            axis: None,
            measured: None,
            nominal: None,
            upper_tolerance: None,
            lower_tolerance: None,
            deviation: None,
            within_tolerance: None,
        }
    }

    /// Cells in header order
    pub fn cells(&self) -> Vec<Cell> {
        fn opt_num(value: Option<f64>) -> Cell {
            value.map(Cell::Number).unwrap_or(Cell::Empty)
        }
        fn opt_text(value: &Option<String>) -> Cell {
            value
                .as_ref()
                .map(|s| Cell::Text(s.clone()))
                .unwrap_or(Cell::Empty)
        }

        vec![
            Cell::Text(self.element_name.clone()),
            Cell::Text(self.kind.to_string()),
            self.point_count
                .map(|n| Cell::Integer(n as u64))
                .unwrap_or(Cell::Empty),
            opt_text(&self.side),
            opt_num(self.std_dev),
            opt_num(self.min_value),
            opt_num(self.max_value),
            opt_num(self.form_error),
            opt_num(self.diameter_measured),
            opt_num(self.diameter_nominal),
            opt_num(self.diameter_deviation),
            opt_text(&self.coordinate_label),
            self.axis
                .map(|a| Cell::Text(a.as_str().to_string()))
                .unwrap_or(Cell::Empty),
            opt_num(self.measured),
            opt_num(self.nominal),
            opt_num(self.upper_tolerance),
            opt_num(self.lower_tolerance),
            opt_num(self.deviation),
            self.within_tolerance
                .map(Cell::Bool)
                .unwrap_or(Cell::Empty),
        ]
    }
}

/// Flat detail table for a report
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailTable {
    pub rows: Vec<DetailRow>,
}

impl DetailTable {
    /// Column headers, in cell order
    pub const HEADERS: [&'static str; 19] = [
        "Element_Name",
        "Type",
        "Point_Count",
        "Side",
        "Std_Dev",
        "Min_Value",
        "Max_Value",
        "Form_Error",
        "Diameter_Measured",
        "Diameter_Reference",
        "Diameter_Deviation",
        "Coordinate_Name",
        "Axis",
        "Measured_Value",
        "Reference_Value",
        "Upper_Tolerance",
        "Lower_Tolerance",
        "Deviation",
        "Within_Tolerance",
    ];

    /// Build the detail table for a report
    pub fn from_report(report: &MeasurementReport, options: &TableOptions) -> Self {
        let mut rows = Vec::new();

        for element in &report.elements {
            let base = DetailRow::base(element, options);
            if element.coordinates.is_empty() {
                rows.push(base);
                continue;
            }

            for reading in &element.coordinates {
                let mut row = base.clone();
                row.coordinate_label = Some(if options.romanize_labels {
                    translate::romanize(&reading.label)
                } else {
                    reading.label.clone()
                });
                row.axis = Some(reading.axis);
                row.measured = Some(reading.measured);
                row.nominal = Some(reading.nominal);
                row.upper_tolerance = Some(reading.upper_tolerance);
                row.lower_tolerance = Some(reading.lower_tolerance);
                row.deviation = Some(reading.deviation);
                row.within_tolerance = Some(reading.within_tolerance());
                rows.push(row);
            }
        }

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

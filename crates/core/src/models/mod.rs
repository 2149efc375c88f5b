//! Measurement data model
//!
//! Types describing the content of a CMM measurement report: measured
//! elements, per-axis coordinate readings, diameters, form statistics and
//! the active coordinate system.

pub mod element;
pub mod enums;
pub mod report;

pub use element::{CoordinateReading, DiameterReading, FormStatistics, MeasurementElement};
pub use report::{CoordinateSystem, MeasurementReport};

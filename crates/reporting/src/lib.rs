//! Forecast reports: assemble engine outputs for one set of inputs and
//! export them as paginated text, JSON, or CSV.

pub mod format;
pub mod render;
pub mod report;

pub use format::{format_currency, format_number, format_percent};
pub use render::{ExportFormat, ReportRenderer};
pub use report::ForecastReport;

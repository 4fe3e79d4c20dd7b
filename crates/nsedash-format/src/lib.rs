//! Report exporters for the nsedash stock dashboard.
//!
//! This crate provides formatters for writing dashboard reports and
//! comparison lines to various output formats:
//!
//! - [`CsvFormatter`] - CSV format
//! - [`JsonFormatter`] - JSON document or NDJSON format

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nsedash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};

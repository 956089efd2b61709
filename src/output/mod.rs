//! Output formatting for planned subnets.
//!
//! - [`table`] - Fixed-width text table
//! - [`report`] - JSON and YAML export
//! - [`schema`] - JSON Schema of the input document
//! - [`samples`] - Example input documents

mod report;
mod samples;
mod schema;
mod table;

pub use report::PlanReport;
pub use samples::{example_document, ExampleKind};
pub use schema::json_schema;
pub use table::{format_field, render_table};

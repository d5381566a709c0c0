//! Schema tree files
//!
//! Provides the Schema Format v0 document and its parser.

pub mod format_v0;
pub mod parser;

pub use format_v0::{AssignmentTreeV0, SchemaV0};
pub use parser::{parse_schema_file, parse_schema_str};

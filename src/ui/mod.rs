//! User interface module - output selection and formatting.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Choosing between the full record and a single field

use crate::domain::{Field, VersionRecord};
use crate::error::Result;

pub mod formatter;

pub use formatter::{display_error, format_error, format_field, format_record};

/// Render what should be printed for a record
///
/// With no field name the full record is rendered as JSON; otherwise only
/// the named field's value. Unknown names fail with `UnknownField`.
pub fn render(record: &VersionRecord, show_field: Option<&str>) -> Result<String> {
    match show_field {
        None => format_record(record),
        Some(name) => {
            let field: Field = name.parse()?;
            Ok(format_field(record, field))
        }
    }
}

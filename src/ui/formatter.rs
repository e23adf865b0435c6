//! Pure formatting functions for UI output.
//!
//! Results go to stdout; diagnostics go to stderr so pipelines can capture
//! the version with a plain command substitution.

use crate::domain::{Field, VersionRecord};
use crate::error::Result;
use console::style;

/// Format the whole record as single-line JSON.
pub fn format_record(record: &VersionRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Format a single field of the record as plain text.
pub fn format_field(record: &VersionRecord, field: Field) -> String {
    record.value(field)
}

/// Text for a failure, prefixed with a red `error:`.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("error:").for_stderr().red().bold(), message)
}

/// Format and print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;
    use crate::engine::VersionEngine;

    #[test]
    fn test_format_record_is_single_line() {
        let record = VersionEngine::default()
            .derive(Version::new(1, 2, 3), "develop", 5, "0")
            .unwrap();
        let json = format_record(&record).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with("{\"Major\":1,\"Minor\":3,\"Patch\":3,"));
        assert!(json.contains("\"SemVer\":\"1.3.3-alpha.5\""));
        assert!(json.contains("\"AssemblySemVer\":\"1.3.3-alpha.5.0\""));
    }

    #[test]
    fn test_format_field() {
        let record = VersionEngine::default()
            .derive(Version::new(1, 2, 3), "master", 0, "9")
            .unwrap();
        assert_eq!(format_field(&record, Field::SemVer), "1.2.3");
        assert_eq!(format_field(&record, Field::AssemblySemVer), "1.2.3.9");
    }

    #[test]
    fn test_format_error_keeps_message() {
        console::set_colors_enabled_stderr(false);
        console::set_colors_enabled(false);
        assert_eq!(format_error("no tags"), "error: no tags");
    }
}

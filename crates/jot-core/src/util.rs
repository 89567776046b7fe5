//! Shared utility functions used across multiple modules.

/// Normalize a user-supplied field by trimming surrounding whitespace.
///
/// Returns `None` when the trimmed value is empty. This backs the
/// guard-then-skip rule: empty required fields make an operation a no-op.
pub fn normalize_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Current Unix timestamp in milliseconds.
pub fn unix_timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_field_rejects_empty() {
        assert_eq!(normalize_field(""), None);
        assert_eq!(normalize_field(" \n\t "), None);
    }

    #[test]
    fn normalize_field_trims_value() {
        assert_eq!(normalize_field("  hello  "), Some("hello".to_string()));
    }

    #[test]
    fn normalize_field_keeps_multiline_text() {
        assert_eq!(
            normalize_field("line 1\nline 2\n"),
            Some("line 1\nline 2".to_string())
        );
    }

    #[test]
    fn unix_timestamp_ms_is_positive() {
        assert!(unix_timestamp_ms() > 0);
    }
}

//! Raw OCR text normalization: the rest of the engine only ever sees
//! lowercase, trimmed, non-empty lines.

/// Lowercase the raw OCR output and split it into trimmed, non-empty lines,
/// preserving original order. Line order matters downstream: wrapped values
/// are searched on the line following their keyword.
pub fn normalize_lines(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits() {
        let lines = normalize_lines("Total Fat 5g\nProtein 3g");
        assert_eq!(lines, vec!["total fat 5g", "protein 3g"]);
    }

    #[test]
    fn trims_and_drops_blank_lines() {
        let lines = normalize_lines("  Total Fat 5g  \n\n   \n\tProtein 3g\n");
        assert_eq!(lines, vec!["total fat 5g", "protein 3g"]);
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("   \n \n\t").is_empty());
    }

    #[test]
    fn handles_windows_line_endings() {
        let lines = normalize_lines("Total Fat 5g\r\nProtein 3g\r\n");
        assert_eq!(lines, vec!["total fat 5g", "protein 3g"]);
    }

    #[test]
    fn preserves_line_order() {
        let lines = normalize_lines("one\ntwo\nthree");
        assert_eq!(lines, vec!["one", "two", "three"]);
    }
}

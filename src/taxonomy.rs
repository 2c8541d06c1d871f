/// Map a normalized file extension (lower-cased, leading dot included) to a
/// human-readable language name.
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    match extension {
        ".py" => Some("Python"),
        ".js" | ".jsx" | ".ts" | ".tsx" => Some("JavaScript"),
        ".html" | ".htm" => Some("HTML"),
        ".css" => Some("CSS"),
        ".json" => Some("JSON"),
        ".md" => Some("Markdown"),
        ".yml" | ".yaml" => Some("YAML"),
        ".txt" => Some("Text"),
        _ => None,
    }
}

/// Primary languages are the ones that also determine a repository's project
/// type.
pub fn is_primary_language(language: &str) -> bool {
    matches!(language, "Python" | "JavaScript")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_for_extension() {
        assert_eq!(language_for_extension(".py"), Some("Python"));
        assert_eq!(language_for_extension(".tsx"), Some("JavaScript"));
        assert_eq!(language_for_extension(".htm"), Some("HTML"));
        assert_eq!(language_for_extension(".yaml"), Some("YAML"));
        assert_eq!(language_for_extension(".rs"), None);
        assert_eq!(language_for_extension(""), None);
    }

    #[test]
    fn test_primary_languages() {
        assert!(is_primary_language("Python"));
        assert!(is_primary_language("JavaScript"));
        assert!(!is_primary_language("HTML"));
        assert!(!is_primary_language("Markdown"));
    }
}

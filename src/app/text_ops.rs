use std::path::{Path, PathBuf};

/// Extension given to "Save As" targets typed without one.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Number of whitespace-delimited words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of lines shown in the gutter. Empty text still has one line.
pub fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

/// Pixel width of the line-number gutter for a document with `lines` lines.
pub fn linenumber_width(lines: usize) -> i32 {
    let digits = lines.max(1).to_string().len() as i32;
    (digits * 8 + 16).max(40)
}

/// Replace every literal, case-sensitive occurrence of `find` with `replace`.
///
/// Returns (new_text, count_of_replacements). An empty `find` matches nothing.
pub fn replace_all_literal(text: &str, find: &str, replace: &str) -> (String, usize) {
    if find.is_empty() {
        return (text.to_string(), 0);
    }
    let count = text.matches(find).count();
    if count == 0 {
        return (text.to_string(), 0);
    }
    (text.replace(find, replace), count)
}

/// Give `.ext` to paths chosen without an extension (or with a bare trailing dot).
pub fn with_default_extension(path: &Path, ext: &str) -> PathBuf {
    match path.extension() {
        Some(e) if !e.is_empty() => path.to_path_buf(),
        _ => path.with_extension(ext),
    }
}

/// Status bar text: the action followed by the live word count.
pub fn status_line(action: &str, text: &str) -> String {
    format!("{} | Word Count: {}", action, word_count(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename(Path::new("/home/user/test.txt")), "test.txt");
        assert_eq!(extract_filename(Path::new("notes.md")), "notes.md");
        assert_eq!(extract_filename(Path::new("/a/b/c/file.rs")), "file.rs");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename(Path::new("")), "Unknown");
        assert_eq!(extract_filename(Path::new("/")), "Unknown");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("  spaced\tout\nacross  lines "), 4);
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 1);
        assert_eq!(count_lines("single"), 1);
        assert_eq!(count_lines("a\nb\nc"), 3);
        // A trailing newline starts a new, empty line
        assert_eq!(count_lines("a\n"), 2);
    }

    #[test]
    fn test_linenumber_width_grows_with_digits() {
        assert_eq!(linenumber_width(0), 40);
        assert_eq!(linenumber_width(9), 40);
        assert_eq!(linenumber_width(99_999), 56);
        assert!(linenumber_width(1_000_000) > linenumber_width(1_000));
    }

    #[test]
    fn test_replace_all_simple() {
        let (text, count) = replace_all_literal("cat sat on cat", "cat", "dog");
        assert_eq!(text, "dog sat on dog");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_replace_all_is_case_sensitive() {
        let (text, count) = replace_all_literal("Cat cat CAT", "cat", "dog");
        assert_eq!(text, "Cat dog CAT");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_replace_all_is_literal() {
        let (text, count) = replace_all_literal("a.b a+b", ".", "-");
        assert_eq!(text, "a-b a+b");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_replace_all_replacement_contains_search() {
        let (text, count) = replace_all_literal("ab ab", "ab", "abab");
        assert_eq!(text, "abab abab");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_replace_all_no_matches_or_empty_search() {
        assert_eq!(replace_all_literal("hello", "rust", "ferris"), ("hello".to_string(), 0));
        assert_eq!(replace_all_literal("hello", "", "x"), ("hello".to_string(), 0));
    }

    #[test]
    fn test_with_default_extension() {
        assert_eq!(with_default_extension(Path::new("/tmp/notes"), "txt"), PathBuf::from("/tmp/notes.txt"));
        assert_eq!(with_default_extension(Path::new("/tmp/notes.md"), "txt"), PathBuf::from("/tmp/notes.md"));
        assert_eq!(with_default_extension(Path::new("/tmp/notes."), "txt"), PathBuf::from("/tmp/notes.txt"));
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line("Text copied", "one two three"), "Text copied | Word Count: 3");
        assert_eq!(status_line("New file created", ""), "New file created | Word Count: 0");
    }
}

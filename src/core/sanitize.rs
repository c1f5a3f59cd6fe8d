// src/core/sanitize.rs

/// Leading/trailing whitespace removed; inner whitespace kept as-is.
pub fn trim_text(s: &str) -> String {
    s.trim().to_string()
}

/// Collapse sequences of whitespace into a single space and trim.
/// Used for single-line display (status line, report bullets), never for extracted data.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// File stem safe on every platform: alphanumerics, '-', '_', '.'; whitespace → '_'.
pub fn sanitize_file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() || ch == '-' || ch == '.' { out.push(ch); last_us = false; }
        else if (ch.is_whitespace() || ch == '_') && !last_us { out.push('_'); last_us = true; }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!(crate::config::consts::DEFAULT_FILE) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_keeps_inner_whitespace() {
        assert_eq!(trim_text("  a \n b  "), "a \n b");
    }

    #[test]
    fn normalize_ws_collapses() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
    }

    #[test]
    fn file_stem_sanitizing() {
        assert_eq!(sanitize_file_stem("my  report"), "my_report");
        assert_eq!(sanitize_file_stem("a/b:c"), "abc");
        assert_eq!(sanitize_file_stem("  "), "scraped_data");
        assert_eq!(sanitize_file_stem("v1.2-final"), "v1.2-final");
    }
}

// src/utils.rs

const MAX_FILENAME_LEN: usize = 64;

/// Normalize arbitrary text into a safe download filename: whitespace
/// becomes underscores, anything outside alphanumerics/`_`/`-` is
/// dropped, runs collapse to one underscore, length is capped.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::new();
    let mut last_was_sep = false;

    for c in name.trim().chars() {
        let mapped = if c.is_whitespace() {
            Some('_')
        } else if c.is_alphanumeric() || c == '-' || c == '_' {
            Some(c)
        } else {
            None
        };

        match mapped {
            Some('_') => {
                if !last_was_sep && !out.is_empty() {
                    out.push('_');
                }
                last_was_sep = true;
            }
            Some(c) => {
                out.push(c);
                last_was_sep = false;
            }
            None => {}
        }
    }

    // Cap by characters, not bytes: alphanumerics include multibyte
    // letters, and a byte-index truncate can land mid-character.
    if let Some((idx, _)) = out.char_indices().nth(MAX_FILENAME_LEN) {
        out.truncate(idx);
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// Export name for a rendered CV document.
pub fn document_filename(full_name: &str) -> String {
    let base = sanitize_filename(full_name);
    if base.is_empty() {
        "CV.html".to_string()
    } else {
        format!("CV_{}.html", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("John Doe"), "John_Doe");
        assert_eq!(sanitize_filename("a / b"), "a_b");
        assert_eq!(sanitize_filename("jean-paul"), "jean-paul");
        assert_eq!(sanitize_filename("  spaced   out  "), "spaced_out");
        assert_eq!(sanitize_filename("%%%"), "");
    }

    #[test]
    fn test_sanitize_filename_caps_length() {
        let long = "x".repeat(200);
        assert_eq!(sanitize_filename(&long).len(), MAX_FILENAME_LEN);
    }

    #[test]
    fn test_sanitize_filename_caps_length_multibyte() {
        let long = format!("a{}", "é".repeat(100));
        let out = sanitize_filename(&long);
        assert_eq!(out.chars().count(), MAX_FILENAME_LEN);
        assert!(out.starts_with('a'));
    }

    #[test]
    fn test_sanitize_filename_keeps_accented_letters() {
        assert_eq!(sanitize_filename("José Müller"), "José_Müller");
    }

    #[test]
    fn test_document_filename() {
        assert_eq!(document_filename("Ada Lovelace"), "CV_Ada_Lovelace.html");
        assert_eq!(document_filename(""), "CV.html");
    }
}

// src/validators.rs
//! Advisory field validation. Every function here is pure and total:
//! it returns a [`Validation`] verdict and never panics or errors. The
//! caller surfaces failures as notices; except for image uploads, the
//! user's input is still accepted into the record.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

pub const MIN_YEAR: i32 = 1950;
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;
pub const MAX_EDUCATION_SPAN_YEARS: i32 = 15;
pub const MAX_EXPERIENCE_SPAN_MONTHS: i32 = 50 * 12;

const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];
const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".webp"];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Validation {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl Validation {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// Year fields are optional: empty input is valid. Non-empty input must
/// be an integer in [1950, current year + 10].
pub fn validate_year(value: &str) -> Validation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Validation::ok();
    }

    let year: i32 = match trimmed.parse() {
        Ok(y) => y,
        Err(_) => return Validation::invalid("Year must be a number"),
    };

    let max_year = Utc::now().year() + 10;
    if year < MIN_YEAR || year > max_year {
        return Validation::invalid(format!(
            "Year must be between {} and {}",
            MIN_YEAR, max_year
        ));
    }

    Validation::ok()
}

/// Education span check. Only applies when both years are present and
/// numeric; otherwise the per-field year validator has the last word.
pub fn validate_education_span(start_year: &str, graduation_year: &str) -> Validation {
    let (start, grad) = match (
        start_year.trim().parse::<i32>(),
        graduation_year.trim().parse::<i32>(),
    ) {
        (Ok(s), Ok(g)) => (s, g),
        _ => return Validation::ok(),
    };

    if start >= grad {
        return Validation::invalid("Graduation year must be after start year");
    }
    if grad - start > MAX_EDUCATION_SPAN_YEARS {
        return Validation::invalid(format!(
            "Education span cannot exceed {} years",
            MAX_EDUCATION_SPAN_YEARS
        ));
    }

    Validation::ok()
}

/// Experience date-range check over "YYYY-MM" values. Unparseable dates
/// pass; the renderer's fallback policy keeps them visible as typed.
pub fn validate_experience_span(start_date: &str, end_date: &str, current: bool) -> Validation {
    let start = match parse_year_month(start_date) {
        Some(d) => d,
        None => return Validation::ok(),
    };

    let now = Utc::now().date_naive();

    if current {
        if months_between(start, now) < 0 {
            return Validation::invalid("Start date cannot be in the future");
        }
        if months_between(start, now) > MAX_EXPERIENCE_SPAN_MONTHS {
            return Validation::invalid("Experience duration cannot exceed 50 years");
        }
        return Validation::ok();
    }

    let end = match parse_year_month(end_date) {
        Some(d) => d,
        None => return Validation::ok(),
    };

    let span = months_between(start, end);
    if span <= 0 {
        return Validation::invalid("End date must be after start date");
    }
    if span > MAX_EXPERIENCE_SPAN_MONTHS {
        return Validation::invalid("Experience duration cannot exceed 50 years");
    }
    if months_between(now, end) > 12 {
        return Validation::invalid("End date cannot be more than a year ahead");
    }

    Validation::ok()
}

/// Empty URLs are allowed. Non-empty values get an `https://` prefix
/// when no scheme is present and must then look like an http(s) URL.
pub fn validate_url(url: &str) -> Validation {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Validation::ok();
    }

    let candidate = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else if trimmed.contains("://") {
        // Some other scheme was given explicitly.
        return Validation::invalid("Only http and https URLs are allowed");
    } else {
        format!("https://{}", trimmed)
    };

    let rest = candidate
        .strip_prefix("https://")
        .or_else(|| candidate.strip_prefix("http://"))
        .unwrap_or("");

    let host = rest
        .split(&['/', '?', '#'][..])
        .next()
        .unwrap_or("")
        .trim();

    if host.is_empty() || rest.chars().any(char::is_whitespace) {
        return Validation::invalid("URL is not well formed");
    }
    if let Some((_, port)) = host.rsplit_once(':') {
        if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
            return Validation::invalid("URL is not well formed");
        }
    }

    Validation::ok()
}

/// Produce a safe value for storage and display: strip executable
/// scheme prefixes, then default to https.
pub fn sanitize_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    let mut clean = strip_all_ci(url, "javascript:");
    clean = strip_all_ci(&clean, "data:");

    if has_http_scheme(&clean) {
        clean
    } else {
        format!("https://{}", clean)
    }
}

fn has_http_scheme(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn strip_all_ci(input: &str, pattern: &str) -> String {
    let mut result = input.to_string();
    while let Some(pos) = find_ci(&result, pattern) {
        result.replace_range(pos..pos + pattern.len(), "");
    }
    result
}

// The scan must run on the string being edited: case-folding a copy can
// change byte lengths (e.g. 'İ' lowercases to two characters) and shift
// every offset. The pattern is ASCII, so a matching window is ASCII too
// and the returned range sits on character boundaries.
fn find_ci(haystack: &str, pattern: &str) -> Option<usize> {
    let pat = pattern.as_bytes();
    haystack
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| {
            haystack.as_bytes()[i..]
                .get(..pat.len())
                .map_or(false, |window| window.eq_ignore_ascii_case(pat))
        })
}

/// Upload gate for profile pictures: size, declared content type and
/// file extension must all pass. This is the one enforcing validator;
/// a failed upload is discarded and the previous picture kept.
pub fn validate_image_upload(filename: &str, content_type: &str, size: u64) -> Validation {
    if size > MAX_IMAGE_BYTES {
        return Validation::invalid("File size must be less than 5MB");
    }

    if !ALLOWED_IMAGE_TYPES.contains(&content_type.to_lowercase().as_str()) {
        return Validation::invalid("File must be a valid image (JPEG, PNG, or WebP)");
    }

    let lower_name = filename.to_lowercase();
    if !ALLOWED_IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower_name.ends_with(ext))
    {
        return Validation::invalid("Invalid file extension");
    }

    Validation::ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }
}

/// Identify the actual image format from its leading bytes. Used at the
/// upload boundary to catch files whose extension lies about the
/// content.
pub fn sniff_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    if bytes.starts_with(PNG_SIGNATURE) {
        return Some(ImageFormat::Png);
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(ImageFormat::Jpeg);
    }
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some(ImageFormat::Webp);
    }
    None
}

/// Parse a "YYYY-MM" value to the first day of that month.
pub fn parse_year_month(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d").ok()
}

fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn year_bounds() {
        let current = Utc::now().year();
        assert!(validate_year("1950").is_valid);
        assert!(validate_year(&(current + 10).to_string()).is_valid);
        assert!(!validate_year("1949").is_valid);
        assert!(!validate_year(&(current + 11).to_string()).is_valid);
        assert!(validate_year("").is_valid);
        assert!(!validate_year("soon").is_valid);
    }

    #[test]
    fn education_span_rules() {
        assert!(validate_education_span("2019", "2023").is_valid);
        let reversed = validate_education_span("2023", "2019");
        assert!(!reversed.is_valid);
        assert_eq!(
            reversed.message.as_deref(),
            Some("Graduation year must be after start year")
        );
        assert!(!validate_education_span("2000", "2020").is_valid);
        assert!(validate_education_span("", "2023").is_valid);
    }

    #[test]
    fn experience_span_current_role() {
        assert!(validate_experience_span("2020-01", "", true).is_valid);
        let future = format!("{}-01", Utc::now().year() + 2);
        assert!(!validate_experience_span(&future, "", true).is_valid);
    }

    #[test]
    fn experience_span_finished_role() {
        assert!(validate_experience_span("2018-03", "2021-09", false).is_valid);
        assert!(!validate_experience_span("2021-09", "2018-03", false).is_valid);
        assert!(!validate_experience_span("1950-01", "2005-02", false).is_valid);
        // Unparseable dates are advisory-valid; the renderer keeps them raw.
        assert!(validate_experience_span("sometime", "later", false).is_valid);
    }

    #[test]
    fn url_validation() {
        assert!(validate_url("").is_valid);
        assert!(validate_url("example.com").is_valid);
        assert!(validate_url("https://example.com/profile?x=1").is_valid);
        assert!(!validate_url("ftp://example.com").is_valid);
        assert!(!validate_url("not a url").is_valid);
    }

    #[test]
    fn url_sanitization_strips_executable_schemes() {
        assert_eq!(sanitize_url("javascript:alert(1)"), "https://alert(1)");
        assert_eq!(sanitize_url("JaVaScRiPt:data:evil"), "https://evil");
        assert_eq!(sanitize_url("example.com"), "https://example.com");
        assert_eq!(sanitize_url("http://example.com"), "http://example.com");
        assert_eq!(sanitize_url(""), "");
    }

    #[test]
    fn url_sanitization_handles_length_changing_case_folds() {
        // 'İ' grows from two bytes to three under to_lowercase; the
        // scheme stripping must still land on character boundaries.
        assert_eq!(sanitize_url("İjavascript:é"), "https://İé");
        assert_eq!(
            sanitize_url("İİjavascript:alert(1)"),
            "https://İİalert(1)"
        );
        assert_eq!(sanitize_url("ﬀjavascript:x"), "https://ﬀx");
    }

    #[test]
    fn image_upload_gate() {
        let six_mb = 6 * 1024 * 1024;
        assert!(!validate_image_upload("photo.png", "image/png", six_mb).is_valid);
        assert!(!validate_image_upload("cv.pdf", "application/pdf", 1024).is_valid);
        assert!(!validate_image_upload("photo.gif", "image/png", 1024).is_valid);
        assert!(validate_image_upload("photo.png", "image/png", 1024 * 1024).is_valid);
        assert!(validate_image_upload("photo.JPG", "image/jpeg", 1024).is_valid);
    }

    #[test]
    fn sniffs_common_formats() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        assert_eq!(sniff_image_format(&png), Some(ImageFormat::Png));
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0];
        assert_eq!(sniff_image_format(&jpeg), Some(ImageFormat::Jpeg));
        let webp = *b"RIFF\x00\x00\x00\x00WEBPVP8 ";
        assert_eq!(sniff_image_format(&webp), Some(ImageFormat::Webp));
        assert_eq!(sniff_image_format(b"plain text"), None);
    }

    #[test]
    fn parses_year_month() {
        let d = parse_year_month("2020-01").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2020, 1, 1));
        assert!(parse_year_month("2020").is_none());
        assert!(parse_year_month("").is_none());
    }
}

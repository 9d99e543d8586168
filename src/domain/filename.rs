//! Export file-name derivation

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

/// Stem used when the root has no title.
pub const UNTITLED: &str = "無題";

/// Extension of exported documents.
pub const EXTENSION: &str = "md";

/// Characters that are illegal in common filesystem file names.
static ILLEGAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[/\\:*?"<>|]"#).expect("valid regex"));

/// `"{sanitized title}_{YYYYMMDDHHmm}.md"`, falling back to [`UNTITLED`].
pub fn derive_file_name(title: &str, now: NaiveDateTime) -> String {
    derive_file_name_with(title, UNTITLED, now)
}

/// Like [`derive_file_name`] with a caller-chosen placeholder for empty titles.
pub fn derive_file_name_with(title: &str, placeholder: &str, now: NaiveDateTime) -> String {
    let stem = if title.is_empty() { placeholder } else { title };
    format!("{}_{}.{}", sanitize(stem), timestamp(now), EXTENSION)
}

/// Strip `/ \ : * ? " < > |` from `name`.
pub fn sanitize(name: &str) -> String {
    ILLEGAL_CHARS.replace_all(name, "").into_owned()
}

/// Fixed-width `YYYYMMDDHHmm`.
pub fn timestamp(now: NaiveDateTime) -> String {
    now.format("%Y%m%d%H%M").to_string()
}

// File: crates/export-core/src/options.rs
// Summary: Export options and default tokens (endpoint base, preview format, filenames).

/// Default filename for image downloads when the control names none.
pub const DEFAULT_IMAGE_FILENAME: &str = "chart.png";
/// Server route prefix that turns projection records into documents.
pub const ENDPOINT_BASE: &str = "/export/projection";
/// Format token whose result is previewed in a new browsing context.
pub const PREVIEW_FORMAT: &str = "pdf";

#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub endpoint_base: String,
    pub preview_format: String,
    pub default_filename: String,
    /// Upper bound on the full export href length, in bytes.
    /// `None` disables the check.
    pub max_url_bytes: Option<usize>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            endpoint_base: ENDPOINT_BASE.to_string(),
            preview_format: PREVIEW_FORMAT.to_string(),
            default_filename: DEFAULT_IMAGE_FILENAME.to_string(),
            max_url_bytes: Some(64 * 1024),
        }
    }
}

// File: crates/export-core/src/endpoint.rs
// Summary: Export-endpoint href construction: JSON records as a percent-encoded query parameter.

use serde::Serialize;
use url::form_urlencoded;

use crate::error::ExportError;
use crate::options::ExportOptions;

/// Query parameter carrying the serialized records.
pub const DATA_PARAM: &str = "data";

/// Build the export href: `{base}/{format}?data={encoded records}`.
///
/// `format` is an open token set interpreted entirely by the server and is
/// forwarded as-is. Encoding goes through `form_urlencoded` so the server's
/// query parsing recovers the exact JSON string.
pub fn export_href<T: Serialize>(
    options: &ExportOptions,
    format: &str,
    records: &T,
) -> Result<String, ExportError> {
    let json = serde_json::to_string(records)?;
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(DATA_PARAM, &json)
        .finish();
    let href = format!(
        "{}/{}?{}",
        options.endpoint_base.trim_end_matches('/'),
        format,
        query
    );
    if let Some(max) = options.max_url_bytes {
        if href.len() > max {
            return Err(ExportError::PayloadTooLarge { len: href.len(), max });
        }
    }
    Ok(href)
}

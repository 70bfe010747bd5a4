use tracing::debug;

use platefinder_common::{CandidateRecord, DiscoveryError};

/// Isolate the JSON span in a model reply. Models frequently wrap JSON in
/// prose or code fences; this finds the first `[` or `{` and greedily takes
/// everything through the last closer of the same kind. If no such span
/// exists the input is returned unchanged and the parser reports the
/// failure.
pub fn extract_json_span(text: &str) -> &str {
    let Some(start) = text.find(['[', '{']) else {
        return text;
    };
    let closer = if text.as_bytes()[start] == b'[' { ']' } else { '}' };
    match text.rfind(closer) {
        Some(end) if end > start => &text[start..=end],
        _ => text,
    }
}

/// Strict parse of the extracted span into candidate records. Anything that
/// is not a JSON array fails as a whole; partial recovery of corrupt arrays
/// risks presenting fabricated or mismatched data.
pub fn parse_candidates(json: &str) -> Result<Vec<CandidateRecord>, DiscoveryError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| {
        debug!(error = %e, "Model reply is not valid JSON");
        DiscoveryError::InvalidResponse
    })?;

    if !value.is_array() {
        debug!("Model reply parsed but is not a JSON array");
        return Err(DiscoveryError::InvalidResponse);
    }

    serde_json::from_value(value).map_err(|e| {
        debug!(error = %e, "Candidate records failed strict deserialization");
        DiscoveryError::InvalidResponse
    })
}

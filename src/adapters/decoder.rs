use crate::core::{ResearchSnapshot, SaveDecoder};
use crate::utils::error::DecodeError;

/// Reads a research export: the decoded snapshot serialized as JSON, e.g.
///
/// ```json
/// {"shinycharm": true, "research_entries": {"722": {"level10": true, "perfect": false}}}
/// ```
///
/// Decoding the encrypted console save itself happens upstream of this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResearchDecoder;

impl SaveDecoder for JsonResearchDecoder {
    fn read_research(&self, bytes: &[u8]) -> Result<ResearchSnapshot, DecodeError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|_| DecodeError::new("Unsupported save format"))?;

        // an export is always a single JSON object
        if !text.trim_start().starts_with('{') {
            return Err(DecodeError::new("Unsupported save format"));
        }

        serde_json::from_str(text)
            .map_err(|e| DecodeError::new(format!("The save file could not be read: {}", e)))
    }
}

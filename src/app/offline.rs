use crate::core::reader::{ResearchReader, SaveUpload};
use crate::core::{ReadResearchResponse, SaveDecoder};
use crate::utils::error::Result;
use std::path::Path;

/// Exit status of `--save` mode when the save could not be read.
pub const ERROR_EXIT_CODE: i32 = 2;

/// Reads one save file from disk, the same way an upload named after the file would be read.
pub fn read_save_file<D: SaveDecoder>(
    reader: &ResearchReader<D>,
    path: impl AsRef<Path>,
) -> Result<ReadResearchResponse> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let filename = path.file_name().and_then(|name| name.to_str());

    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(reader.read(SaveUpload::from_parts(filename, bytes)))
}

/// Pretty JSON for stdout plus the process exit code.
pub fn render(response: &ReadResearchResponse) -> Result<(String, i32)> {
    let json = serde_json::to_string_pretty(response)?;
    let code = if response.is_error() { ERROR_EXIT_CODE } else { 0 };
    Ok((json, code))
}

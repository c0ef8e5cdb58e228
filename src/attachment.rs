//! Loading of the optional file sent alongside a message.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use mmcoms_core::ApiError;

pub(crate) const ATTACHMENT_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug)]
pub(crate) struct Attachment {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Reads the file at `path` if it names an existing regular file.
///
/// Returns `Ok(None)` when there is nothing to attach, in which case the
/// message goes out as plain JSON. The file handle is dropped before this
/// returns, on success and on read failure alike.
pub(crate) fn load(path: &Path) -> Result<Option<Attachment>, ApiError> {
    if !path.is_file() {
        return Ok(None);
    }

    let data = {
        let mut file = File::open(path).map_err(|source| ApiError::Attachment {
            path: path.to_path_buf(),
            source,
        })?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|source| ApiError::Attachment {
                path: path.to_path_buf(),
                source,
            })?;
        data
    };

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attachment".to_string());

    Ok(Some(Attachment { filename, data }))
}

//! Local image files as `data:` URLs for chat attachments

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use stylist_core::prelude::*;

/// Largest attachment accepted for chat
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// MIME type from the file extension. Unknown extensions are rejected.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}

/// Encode raw bytes as a `data:<mime>;base64,...` URL
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read an image from disk and encode it for the chat endpoint
pub async fn encode_image_file(path: &Path) -> Result<String> {
    let mime = mime_for_path(path).ok_or_else(|| {
        Error::validation(format!("{} is not a supported image", path.display()))
    })?;

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_IMAGE_BYTES {
        return Err(Error::validation("Image is larger than 10 MB"));
    }

    let bytes = tokio::fs::read(path).await?;
    debug!("Encoded {} ({} bytes) as {}", path.display(), bytes.len(), mime);
    Ok(data_url(mime, &bytes))
}

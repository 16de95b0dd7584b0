//! MIME type detection for selected files.
//!
//! Content sniffing wins over the extension; the extension table is only
//! consulted when the leading bytes are not a known image signature.

use std::path::Path;

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const GIF_MAGIC: &[u8] = b"GIF8";

/// Detect MIME type by file extension.
pub fn detect_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" | "jfif" => "image/jpeg",
        "png"          => "image/png",
        "gif"          => "image/gif",
        "webp"         => "image/webp",
        "heic"         => "image/heic",
        "avif"         => "image/avif",
        "bmp"          => "image/bmp",
        "svg"          => "image/svg+xml",
        "tiff" | "tif" => "image/tiff",
        "pdf"          => "application/pdf",
        "txt"          => "text/plain",
        _              => "application/octet-stream",
    }
}

/// Identify an image format from its leading bytes.
pub fn sniff_mime_type(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(JPEG_MAGIC) {
        Some("image/jpeg")
    } else if data.starts_with(PNG_MAGIC) {
        Some("image/png")
    } else if data.starts_with(GIF_MAGIC) {
        Some("image/gif")
    } else if data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

/// Whether the analysis service accepts this MIME type (JPEG or PNG only).
pub fn is_accepted_image(mime: &str) -> bool {
    mime.starts_with("image/jpeg") || mime.starts_with("image/png")
}

//! Image encoder: turns a selected file into the base64 payload the analysis
//! service expects, plus a data URL for previews.

use std::path::Path;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use safepost_core::{EncodedImage, ValidationError};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::mime_detect::{detect_mime_type, is_accepted_image, sniff_mime_type};
use crate::SelectedFile;

/// Read a file from disk and label it with a sniffed MIME type.
///
/// Only I/O failures are reported here; the type gate runs in [`encode_image`].
pub async fn read_selection(path: &Path) -> Result<SelectedFile> {
    let data = fs::read(path)
        .await
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;

    let mime_type = sniff_mime_type(&data).unwrap_or_else(|| detect_mime_type(path));
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();

    debug!(path = %path.display(), mime = %mime_type, bytes = data.len(), "Read image selection");
    Ok(SelectedFile::new(name, mime_type, data))
}

/// Gate and encode a selection.
///
/// Rejects anything that is not JPEG or PNG, and empty files.
pub fn encode_image(file: &SelectedFile) -> Result<EncodedImage, ValidationError> {
    if !is_accepted_image(&file.mime_type) {
        warn!(name = %file.name, mime = %file.mime_type, "Rejected image selection");
        return Err(ValidationError::UnsupportedType(file.mime_type.clone()));
    }
    if file.data.is_empty() {
        return Err(ValidationError::EmptyImage);
    }

    let encoded = EncodedImage::new(file.mime_type.clone(), STANDARD.encode(&file.data));
    info!(name = %file.name, mime = %encoded.mime_type, bytes = file.data.len(), "Encoded image");
    Ok(encoded)
}

/// Parse a `data:<mime>;base64,<payload>` URL into an [`EncodedImage`].
///
/// The payload after the first comma becomes the wire base64; the same type
/// gate as [`encode_image`] applies.
pub fn decode_data_url(url: &str) -> Result<EncodedImage, ValidationError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| ValidationError::InvalidDataUrl("missing `data:` scheme".into()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ValidationError::InvalidDataUrl("missing `,` separator".into()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| ValidationError::InvalidDataUrl("payload is not base64".into()))?;

    if !is_accepted_image(mime) {
        return Err(ValidationError::UnsupportedType(mime.to_string()));
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ValidationError::InvalidDataUrl(e.to_string()))?;
    if bytes.is_empty() {
        return Err(ValidationError::EmptyImage);
    }

    Ok(EncodedImage::new(mime, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

    #[test]
    fn encodes_png_with_data_url() {
        let file = SelectedFile::new("a.png", "image/png", vec![1u8, 2, 3]);
        let img = encode_image(&file).unwrap();
        assert_eq!(img.base64, "AQID");
        assert_eq!(img.data_url, "data:image/png;base64,AQID");
    }

    #[test]
    fn rejects_gif() {
        let file = SelectedFile::new("a.gif", "image/gif", b"GIF89a".to_vec());
        assert_eq!(
            encode_image(&file),
            Err(ValidationError::UnsupportedType("image/gif".into()))
        );
    }

    #[test]
    fn rejects_empty_file() {
        let file = SelectedFile::new("a.jpg", "image/jpeg", Vec::new());
        assert_eq!(encode_image(&file), Err(ValidationError::EmptyImage));
    }

    #[test]
    fn mime_with_parameters_passes_gate() {
        let file = SelectedFile::new("a.jpg", "image/jpeg; q=0.9", vec![0xFF, 0xD8, 0xFF]);
        assert!(encode_image(&file).is_ok());
    }

    #[test]
    fn data_url_roundtrip_strips_prefix() {
        let img = decode_data_url("data:image/jpeg;base64,AQID").unwrap();
        assert_eq!(img.base64, "AQID");
        assert_eq!(img.mime_type, "image/jpeg");
    }

    #[test]
    fn data_url_errors() {
        for bad in [
            "image/png;base64,AQID",
            "data:image/png;base64",
            "data:image/png,AQID",
            "data:image/png;base64,!!",
        ] {
            assert!(
                matches!(decode_data_url(bad), Err(ValidationError::InvalidDataUrl(_))),
                "{bad}"
            );
        }
        assert!(matches!(
            decode_data_url("data:image/gif;base64,AQID"),
            Err(ValidationError::UnsupportedType(_))
        ));
    }

    #[tokio::test]
    async fn sniffing_beats_misleading_extension() {
        let mut tmp = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        tmp.write_all(PNG_HEADER).unwrap();
        let file = read_selection(tmp.path()).await.unwrap();
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.data.len(), PNG_HEADER.len());
    }

    #[tokio::test]
    async fn falls_back_to_extension() {
        let mut tmp = tempfile::Builder::new().suffix(".gif").tempfile().unwrap();
        tmp.write_all(b"not really an image").unwrap();
        let file = read_selection(tmp.path()).await.unwrap();
        assert_eq!(file.mime_type, "image/gif");
        assert!(encode_image(&file).is_err());
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let err = read_selection(Path::new("/definitely/not/here.png")).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read image file"));
    }
}

use bytes::Bytes;

pub mod image;
pub mod mime_detect;

pub use image::{decode_data_url, encode_image, read_selection};
pub use mime_detect::{detect_mime_type, is_accepted_image, sniff_mime_type};

/// A file picked by the user, before it has passed the type gate.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub data: Bytes,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

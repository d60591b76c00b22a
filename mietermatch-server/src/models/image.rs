//! Property image references

use serde::{Deserialize, Serialize};

/// One entry of a landlord's `images` list.
///
/// The web client sends inline images as `{data, description}` objects;
/// plain strings (URLs, data URIs) are accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Reference(String),
    Inline(InlineImage),
}

/// Image payload embedded in the record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineImage {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Serialize an image list to its stored JSON text form.
pub fn encode(images: &[ImageRef]) -> Result<String, serde_json::Error> {
    serde_json::to_string(images)
}

/// Decode the stored JSON text form; NULL or blank text is an empty list.
pub fn decode(stored: Option<&str>) -> Result<Vec<ImageRef>, serde_json::Error> {
    match stored.map(str::trim) {
        None | Some("") | Some("null") => Ok(Vec::new()),
        Some(text) => serde_json::from_str(text),
    }
}

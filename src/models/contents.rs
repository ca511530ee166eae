//! Contents API wire models.
//!
//! Mirrors the backend's content model: a directory listing is a model
//! whose `content` is a list of entries; a file is a model whose
//! `content` is its text (or base64 payload, per `format`).

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

/// Content node type as reported by the backend.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Directory,
    File,
    Notebook,
}

impl ContentType {
    pub fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// One row of a directory listing.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ContentEntry {
    #[serde(rename = "type")]
    pub kind: ContentType,
    pub path: String,
    pub name: String,
}

/// Response shape of `GET /api/contents/`.
#[derive(Clone, Debug, Deserialize)]
pub struct DirectoryListing {
    #[serde(default)]
    pub content: Vec<ContentEntry>,
}

/// A full content model, as returned by `GET /api/contents/{path}`.
///
/// Everything beyond the identifying triple is optional: the backend
/// omits or nulls fields depending on node type and request arguments.
#[derive(Clone, Debug, Deserialize)]
pub struct FileModel {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ContentType,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default)]
    pub writable: Option<bool>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

/// Failure to turn a content payload into editor text.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentDecodeError {
    /// `format` was `base64` but the payload did not decode.
    InvalidBase64,
}

impl fmt::Display for ContentDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase64 => write!(f, "content is not valid base64"),
        }
    }
}

impl std::error::Error for ContentDecodeError {}

impl FileModel {
    /// The content as editor text.
    ///
    /// A `base64` payload is decoded and interpreted as UTF-8 (lossily,
    /// so binary files still open read-only rather than erroring out of
    /// the editor). A missing content field yields an empty string.
    pub fn text(&self) -> Result<String, ContentDecodeError> {
        let raw = self.content.clone().unwrap_or_default();
        match self.format.as_deref() {
            Some("base64") => {
                let bytes = BASE64
                    .decode(raw.trim().as_bytes())
                    .map_err(|_| ContentDecodeError::InvalidBase64)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            _ => Ok(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directory_listing() {
        let json = r#"{
            "name": "",
            "path": "",
            "type": "directory",
            "content": [
                {"type": "directory", "path": "data", "name": "data"},
                {"type": "file", "path": "train.py", "name": "train.py"},
                {"type": "notebook", "path": "eda.ipynb", "name": "eda.ipynb"}
            ]
        }"#;
        let listing: DirectoryListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.content.len(), 3);
        assert!(listing.content[0].kind.is_directory());
        assert_eq!(listing.content[1].path, "train.py");
        assert_eq!(listing.content[2].kind, ContentType::Notebook);
    }

    #[test]
    fn test_parse_file_model_text() {
        let json = r#"{
            "name": "train.py",
            "path": "train.py",
            "type": "file",
            "content": "print('hi')\n",
            "format": "text",
            "mimetype": "text/x-python",
            "writable": true,
            "created": "2024-01-01T00:00:00Z",
            "last_modified": "2024-01-02T00:00:00Z"
        }"#;
        let model: FileModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.text().unwrap(), "print('hi')\n");
        assert_eq!(model.writable, Some(true));
    }

    #[test]
    fn test_base64_content_decodes() {
        let model = FileModel {
            name: "hello.txt".into(),
            path: "hello.txt".into(),
            kind: ContentType::File,
            content: Some("aGVsbG8K".into()),
            format: Some("base64".into()),
            mimetype: None,
            writable: None,
            created: None,
            last_modified: None,
        };
        assert_eq!(model.text().unwrap(), "hello\n");
    }

    #[test]
    fn test_invalid_base64_is_an_error() {
        let model = FileModel {
            name: "junk".into(),
            path: "junk".into(),
            kind: ContentType::File,
            content: Some("not base64!!!".into()),
            format: Some("base64".into()),
            mimetype: None,
            writable: None,
            created: None,
            last_modified: None,
        };
        assert_eq!(model.text(), Err(ContentDecodeError::InvalidBase64));
    }

    #[test]
    fn test_missing_content_is_empty() {
        let json = r#"{"name": "a.py", "path": "a.py", "type": "file"}"#;
        let model: FileModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.text().unwrap(), "");
    }
}

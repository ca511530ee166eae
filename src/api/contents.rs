//! Contents API operations.
//!
//! File and directory CRUD against `/api/contents`. Every call returns a
//! typed model or a structured [`ApiError`]; the caller decides what to
//! render.

use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::http::{self, Method};
use crate::config::{API_BASE_URL, NEW_FILE_EXT};
use crate::models::{ContentEntry, DirectoryListing, FileModel};

fn contents_url(path: &str) -> String {
    format!("{}/api/contents/{}", API_BASE_URL, path)
}

#[derive(Serialize)]
struct CreateFileRequest<'a> {
    ext: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Serialize)]
struct CreateDirectoryRequest<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Serialize)]
struct RenameRequest<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct SaveRequest<'a> {
    content: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    format: &'a str,
}

fn json_body<T: Serialize>(body: &T) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::JsonParseError(e.to_string()))
}

/// List the workspace root directory.
pub async fn list_root() -> Result<Vec<ContentEntry>, ApiError> {
    let listing: DirectoryListing = http::fetch_json(&contents_url("")).await?;
    Ok(listing.content)
}

/// Fetch a file model with its content.
pub async fn get_file(path: &str) -> Result<FileModel, ApiError> {
    http::fetch_json(&contents_url(path)).await
}

/// Create a new untitled file in the workspace root.
pub async fn create_file() -> Result<(), ApiError> {
    let body = json_body(&CreateFileRequest {
        ext: NEW_FILE_EXT,
        kind: "file",
    })?;
    http::request(
        Method::Post,
        &format!("{}/api/contents", API_BASE_URL),
        Some(body),
    )
    .await?;
    Ok(())
}

/// Create a directory at `path`.
pub async fn create_directory(path: &str) -> Result<(), ApiError> {
    let body = json_body(&CreateDirectoryRequest { kind: "directory" })?;
    http::request(Method::Post, &contents_url(path), Some(body)).await?;
    Ok(())
}

/// Rename `path` to `new_path`.
pub async fn rename(path: &str, new_path: &str) -> Result<(), ApiError> {
    let body = json_body(&RenameRequest { path: new_path })?;
    http::request(Method::Patch, &contents_url(path), Some(body)).await?;
    Ok(())
}

/// Write `content` to the file at `path`.
pub async fn save(path: &str, content: &str) -> Result<(), ApiError> {
    let body = json_body(&SaveRequest {
        content,
        kind: "file",
        format: "text",
    })?;
    http::request(Method::Put, &contents_url(path), Some(body)).await?;
    Ok(())
}

/// Delete the file or directory at `path`.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    http::request(Method::Delete, &contents_url(path), None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_bodies_match_backend_contract() {
        assert_eq!(
            serde_json::to_string(&CreateFileRequest {
                ext: ".py",
                kind: "file"
            })
            .unwrap(),
            r#"{"ext":".py","type":"file"}"#
        );
        assert_eq!(
            serde_json::to_string(&CreateDirectoryRequest { kind: "directory" }).unwrap(),
            r#"{"type":"directory"}"#
        );
        assert_eq!(
            serde_json::to_string(&RenameRequest { path: "model.py" }).unwrap(),
            r#"{"path":"model.py"}"#
        );
        assert_eq!(
            serde_json::to_string(&SaveRequest {
                content: "x = 1\n",
                kind: "file",
                format: "text"
            })
            .unwrap(),
            r#"{"content":"x = 1\n","type":"file","format":"text"}"#
        );
    }

    #[test]
    fn test_contents_url_shapes() {
        assert_eq!(contents_url(""), "http://localhost:8888/api/contents/");
        assert_eq!(
            contents_url("src/train.py"),
            "http://localhost:8888/api/contents/src/train.py"
        );
    }
}

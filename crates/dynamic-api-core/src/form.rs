// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Multipart file uploads.
//!
//! Parameters typed [`FormFile`], [`FormFileCollection`] or `Vec<FormFile>`
//! bind from a `multipart/form-data` body. The generated handler reads the
//! whole body once with [`read_multipart`] and hands each parameter the
//! files uploaded under its name.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! async fn upload_avatar<S: IUserService>(
//!     State(service): State<Arc<S>>,
//!     multipart: Multipart,
//! ) -> Response {
//!     let mut files = match dynamic_api::form::read_multipart(multipart).await {
//!         Ok(files) => files,
//!         Err(err) => return err.into_response(),
//!     };
//!     let avatar = match files.require("avatar") {
//!         Ok(file) => file,
//!         Err(err) => return err.into_response(),
//!     };
//!     // ...
//! }
//! ```

use axum::{
    extract::{Multipart, multipart::MultipartError},
    http::StatusCode,
    response::{IntoResponse, Response}
};
use bytes::Bytes;

/// One uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFile {
    /// Form field name the file was uploaded under.
    pub field_name: String,

    /// Client-supplied file name.
    pub file_name: Option<String>,

    /// Declared content type.
    pub content_type: Option<String>,

    /// File contents.
    pub bytes: Bytes
}

/// Files of one multipart body, in upload order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFileCollection {
    files: Vec<FormFile>
}

/// A required file parameter was absent from the form.
///
/// Responds with `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing form file `{0}`")]
pub struct MissingFile(pub String);

impl IntoResponse for MissingFile {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl FormFileCollection {
    /// Build a collection from already extracted files.
    #[must_use]
    pub fn new(files: Vec<FormFile>) -> Self {
        Self {
            files
        }
    }

    /// Number of files left in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no files are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over the files left in the collection.
    pub fn iter(&self) -> impl Iterator<Item = &FormFile> {
        self.files.iter()
    }

    /// Remove and return the first file uploaded under `name`.
    pub fn take(&mut self, name: &str) -> Option<FormFile> {
        let index = self.files.iter().position(|f| f.field_name == name)?;
        Some(self.files.remove(index))
    }

    /// Like [`take`](Self::take), failing with [`MissingFile`] when absent.
    pub fn require(&mut self, name: &str) -> Result<FormFile, MissingFile> {
        self.take(name).ok_or_else(|| MissingFile(name.to_string()))
    }

    /// Remove and return every file uploaded under `name`.
    pub fn take_all(&mut self, name: &str) -> FormFileCollection {
        let (taken, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.files)
            .into_iter()
            .partition(|f| f.field_name == name);
        self.files = rest;
        Self::new(taken)
    }

    /// Consume the collection into its files.
    #[must_use]
    pub fn into_vec(self) -> Vec<FormFile> {
        self.files
    }
}

impl From<FormFileCollection> for Vec<FormFile> {
    fn from(collection: FormFileCollection) -> Self {
        collection.into_vec()
    }
}

impl IntoIterator for FormFileCollection {
    type Item = FormFile;
    type IntoIter = std::vec::IntoIter<FormFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

/// Read every field of a multipart body.
///
/// Fields without a name are skipped.
///
/// # Errors
///
/// Returns the extractor's [`MultipartError`] when the body is malformed.
pub async fn read_multipart(mut multipart: Multipart) -> Result<FormFileCollection, MultipartError> {
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let Some(field_name) = field.name().map(str::to_owned) else {
            continue;
        };
        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await?;
        files.push(FormFile {
            field_name,
            file_name,
            content_type,
            bytes
        });
    }
    Ok(FormFileCollection::new(files))
}

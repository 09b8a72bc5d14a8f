// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

/// Error type for export operations.
///
/// A failed export aborts only the current export: the in-memory document
/// and any previously written files are unaffected, and the destination is
/// never left partially written.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExportError {
    /// The destination cannot be created or written.
    #[error("destination {path:?} is not writable: {source}")]
    Unwritable {
        /// The rejected destination path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An I/O failure while reading a source file or writing output.
    #[error("I/O failure during export")]
    Io(#[from] std::io::Error),

    /// The source file was not valid UTF-8.
    #[error("file is not valid UTF-8 text")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Word-document markup could not be serialized.
    #[error("word-document markup error")]
    Xml(#[from] quick_xml::Error),

    /// The word-document container could not be assembled.
    #[error("word-document container error")]
    Container(#[from] zip::result::ZipError),

    /// A raster image could not be encoded.
    #[error("image encoding error")]
    Image(#[from] image::ImageError),

    /// The rendered bytes could not be committed to the destination.
    #[error("failed to commit output file")]
    Commit(#[from] tempfile::PersistError),
}

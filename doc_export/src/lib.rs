// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-format export for [`AttributedDocument`]s.
//!
//! Each export format is a pure function from a document to target-format
//! bytes, dispatched by [`ExportPipeline`] as a closed set of
//! [`ExportFormat`] variants. The authoritative content is always
//! [`AttributedDocument::plain_text`]: only [`ExportFormat::PlainText`] is
//! lossless, the other formats intentionally degrade to unstyled text (see
//! each renderer's module documentation for its exact contract).
//!
//! Output is committed atomically: a renderer writes to memory, the
//! pipeline persists via a temporary file next to the destination, and a
//! failed export never leaves a partial file behind.
//!
//! [`AttributedDocument`]: styled_buffer::AttributedDocument
//! [`AttributedDocument::plain_text`]: styled_buffer::AttributedDocument::plain_text

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]

mod docx;
mod error;
mod pdf;
mod pipeline;
mod plain;
mod raster;

pub use crate::error::ExportError;
pub use crate::pipeline::{load_plain_text, save_plain_text, ExportPipeline};

/// The closed set of supported export formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// UTF-8 plain text; the only lossless format.
    PlainText,
    /// Paginated PDF with one fixed page-wide font.
    Pdf,
    /// Word-processor document with a single paragraph.
    Docx,
    /// Lossless raster image on a fixed 800x600 canvas.
    Png,
    /// Lossy raster image on a fixed 800x600 canvas.
    Jpeg,
}

impl ExportFormat {
    /// The conventional file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// A short human-readable name, used in status messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlainText => "text",
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
        }
    }
}

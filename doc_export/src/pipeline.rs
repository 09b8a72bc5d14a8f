// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Export orchestration: select a renderer variant, invoke it, commit the
//! output atomically.

use std::fs;
use std::io::Write;
use std::path::Path;

use font_select::FontResolver;
use styled_buffer::AttributedDocument;

use crate::error::ExportError;
use crate::{docx, pdf, plain, raster, ExportFormat};

/// Orchestrates exports: picks the renderer for a format, runs it, and
/// reports success or failure to the caller.
///
/// Owns the [`FontResolver`] the raster renderers draw with. Exports run
/// synchronously and block the caller for their full duration; on failure
/// the destination is left untouched.
#[derive(Debug)]
pub struct ExportPipeline {
    resolver: FontResolver,
}

impl Default for ExportPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportPipeline {
    /// Create a pipeline with the default system-font resolver.
    pub fn new() -> Self {
        Self::with_resolver(FontResolver::new())
    }

    /// Create a pipeline with a preconfigured resolver.
    pub fn with_resolver(resolver: FontResolver) -> Self {
        Self { resolver }
    }

    /// Borrow the resolver, e.g. for family enumeration.
    pub fn resolver_mut(&mut self) -> &mut FontResolver {
        &mut self.resolver
    }

    /// Export `document` as `format` to `destination`.
    ///
    /// The destination is validated to be writable before the renderer
    /// runs; rendering goes to memory and is committed atomically, so a
    /// failed export never leaves a partial file. Returns the
    /// human-readable status string shown to the user on success.
    pub fn export(
        &mut self,
        document: &AttributedDocument,
        format: ExportFormat,
        destination: &Path,
    ) -> Result<String, ExportError> {
        let staging = stage_for(destination)?;

        let bytes = match format {
            ExportFormat::PlainText => plain::render(document),
            ExportFormat::Pdf => pdf::render(document),
            ExportFormat::Docx => docx::render(document)?,
            ExportFormat::Png => raster::render_png(document, &mut self.resolver)?,
            ExportFormat::Jpeg => raster::render_jpeg(document, &mut self.resolver)?,
        };

        commit(staging, &bytes, destination)?;
        log::info!(
            "exported {} bytes of {} to {}",
            bytes.len(),
            format.label(),
            destination.display()
        );
        Ok(format!(
            "Exported to {}: {}",
            format.label(),
            destination.display()
        ))
    }
}

/// Read an entire UTF-8 text file into an unstyled document.
///
/// Styling is session-only: there is nothing to restore on load.
pub fn load_plain_text(path: &Path) -> Result<AttributedDocument, ExportError> {
    let bytes = fs::read(path)?;
    Ok(AttributedDocument::from_text(String::from_utf8(bytes)?))
}

/// Write the document's plain text to `path`, atomically.
pub fn save_plain_text(document: &AttributedDocument, path: &Path) -> Result<(), ExportError> {
    let staging = stage_for(path)?;
    commit(staging, document.plain_text().as_bytes(), path)
}

/// Open a staging file next to `destination`.
///
/// Creating it up front both validates that the destination directory is
/// writable before any rendering happens and gives `commit` a same-device
/// rename target.
fn stage_for(destination: &Path) -> Result<tempfile::NamedTempFile, ExportError> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    tempfile::NamedTempFile::new_in(parent).map_err(|source| ExportError::Unwritable {
        path: destination.to_path_buf(),
        source,
    })
}

fn commit(
    mut staging: tempfile::NamedTempFile,
    bytes: &[u8],
    destination: &Path,
) -> Result<(), ExportError> {
    staging.write_all(bytes)?;
    staging.persist(destination)?;
    Ok(())
}

// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_buffer::StyleSet;

/// A logical font request: family, size and the bold/italic flags.
///
/// Descriptors are derived per run at render time, via [`Self::for_styles`]
/// when a style set is active; they are never stored per character.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    /// The requested family name, e.g. `"Arial"`.
    pub family: String,
    /// The font size in points.
    pub size: f32,
    /// Whether a bold weight is requested.
    pub bold: bool,
    /// Whether an italic slant is requested.
    pub italic: bool,
}

impl FontDescriptor {
    /// A regular-weight, upright descriptor for `family` at `size` points.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
        }
    }

    /// Request a bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Request an italic slant.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Derive the descriptor for one same-style run.
    ///
    /// Bold and italic come from the run's active style set; family and
    /// size come from the surrounding editor state. Color and alignment do
    /// not affect font selection and are ignored here: a renderer applies
    /// them after resolution.
    pub fn for_styles(family: impl Into<String>, size: f32, styles: &StyleSet) -> Self {
        Self {
            family: family.into(),
            size,
            bold: styles.bold(),
            italic: styles.italic(),
        }
    }
}

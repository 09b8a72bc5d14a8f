// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::error::Error;
use crate::span_index::{Runs, StyleSpanIndex};
use crate::style::{AttributeKind, StyleAttribute, StyleSet};

/// The character buffer plus its style span index.
///
/// This is the unit every exporter consumes. The buffer and the index share
/// one lifetime: edits mutate the buffer first, then shift the index so span
/// offsets stay consistent. Offsets are byte offsets and are only stable for
/// the duration of a single edit; callers re-resolve selections after any
/// mutation.
#[derive(Clone, Debug, Default)]
pub struct AttributedDocument {
    text: String,
    spans: StyleSpanIndex,
}

impl AttributedDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from existing text, with no styling.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: StyleSpanIndex::new(),
        }
    }

    /// The buffer content with no attribute information.
    ///
    /// This is the authoritative representation: every export format too
    /// limited to carry styling falls back to it.
    pub fn plain_text(&self) -> &str {
        &self.text
    }

    /// The length of the buffer, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The number of Unicode code points in the buffer.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Borrow the style span index.
    pub fn spans(&self) -> &StyleSpanIndex {
        &self.spans
    }

    /// Insert `text` at `offset`, shifting later spans right.
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<(), Error> {
        self.validate_offset(offset)?;
        self.text.insert_str(offset, text);
        self.spans.shift(offset, text.len() as isize);
        Ok(())
    }

    /// Delete `range` from the buffer, truncating spans that straddle it.
    pub fn delete(&mut self, range: Range<usize>) -> Result<(), Error> {
        self.validate_bounds(&range)?;
        let removed = range.len();
        self.text.replace_range(range.clone(), "");
        self.spans.shift(range.start, -(removed as isize));
        Ok(())
    }

    /// Replace the entire buffer, discarding all styling.
    ///
    /// Used when a file is opened or the document is reset; styling is
    /// session-only and never persisted.
    pub fn replace_all(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.spans.clear();
    }

    /// Apply `attribute` over `range`.
    ///
    /// Same-kind spans overlapping `range` are clipped first, so the
    /// per-kind non-overlap invariant holds and the last write wins.
    /// [`Alignment`] spans are widened to cover the full line(s) the range
    /// touches before insertion.
    ///
    /// Fails with [`ErrorKind::InvalidRange`] if `range` is empty and with
    /// [`ErrorKind::InvalidBounds`] if it exceeds the buffer.
    ///
    /// [`Alignment`]: crate::Alignment
    /// [`ErrorKind::InvalidRange`]: crate::ErrorKind::InvalidRange
    /// [`ErrorKind::InvalidBounds`]: crate::ErrorKind::InvalidBounds
    pub fn apply_attribute(
        &mut self,
        range: Range<usize>,
        attribute: StyleAttribute,
    ) -> Result<(), Error> {
        self.validate_span_range(&range)?;
        let range = match attribute.kind() {
            AttributeKind::Alignment => self.line_range(&range),
            _ => range,
        };
        self.spans.add(range, attribute);
        Ok(())
    }

    /// Clear the `kind` annotation over `range`, splitting partially covered
    /// spans.
    pub fn clear_attribute(&mut self, range: Range<usize>, kind: AttributeKind) -> Result<(), Error> {
        self.validate_span_range(&range)?;
        let range = match kind {
            AttributeKind::Alignment => self.line_range(&range),
            _ => range,
        };
        self.spans.remove(kind, range);
        Ok(())
    }

    /// All attributes active at `offset`; used to resolve the style for a
    /// cursor position.
    pub fn styles_at(&self, offset: usize) -> Result<StyleSet, Error> {
        self.validate_offset(offset)?;
        Ok(self.spans.styles_at(offset))
    }

    /// Partition `range` into maximal same-style runs, left to right.
    pub fn runs(&self, range: Range<usize>) -> Result<Runs<'_>, Error> {
        self.validate_bounds(&range)?;
        Ok(self.spans.runs(range))
    }

    /// Widen `range` to the full line(s) it touches.
    ///
    /// The result starts just after the previous newline (or at 0) and ends
    /// at the next newline after `range.end` (or at the buffer end), so that
    /// paragraph-level attributes always cover whole lines.
    pub fn line_range(&self, range: &Range<usize>) -> Range<usize> {
        let start = match self.text[..range.start].rfind('\n') {
            Some(ix) => ix + 1,
            None => 0,
        };
        let end = match self.text[range.end..].find('\n') {
            Some(ix) => range.end + ix,
            None => self.text.len(),
        };
        start..end
    }

    fn validate_offset(&self, offset: usize) -> Result<(), Error> {
        let len = self.text.len();
        if offset > len {
            return Err(Error::invalid_bounds(offset, offset, len));
        }
        if !self.text.is_char_boundary(offset) {
            return Err(Error::not_on_char_boundary(offset, offset, len));
        }
        Ok(())
    }

    /// Checks ordering, bounds and UTF-8 boundaries; allows empty ranges.
    fn validate_bounds(&self, range: &Range<usize>) -> Result<(), Error> {
        let len = self.text.len();
        if range.start > range.end {
            return Err(Error::invalid_range(range.start, range.end, len));
        }
        if range.end > len {
            return Err(Error::invalid_bounds(range.start, range.end, len));
        }
        if !self.text.is_char_boundary(range.start) || !self.text.is_char_boundary(range.end) {
            return Err(Error::not_on_char_boundary(range.start, range.end, len));
        }
        Ok(())
    }

    /// Like [`Self::validate_bounds`], but rejects empty ranges: a style
    /// span must cover at least one character.
    fn validate_span_range(&self, range: &Range<usize>) -> Result<(), Error> {
        if range.start >= range.end {
            return Err(Error::invalid_range(range.start, range.end, self.text.len()));
        }
        self.validate_bounds(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::style::Alignment;

    #[test]
    fn insert_shifts_spans() {
        let mut doc = AttributedDocument::from_text("Hello world");
        doc.apply_attribute(6..11, StyleAttribute::Bold).unwrap();
        doc.insert(5, ", there").unwrap();
        assert_eq!(doc.plain_text(), "Hello, there world");
        let lane = doc.spans().spans_of(AttributeKind::Bold);
        assert_eq!(lane[0].range, 13..18);
        assert_eq!(&doc.plain_text()[13..18], "world");
    }

    #[test]
    fn delete_truncates_spans() {
        let mut doc = AttributedDocument::from_text("Hello world");
        doc.apply_attribute(0..11, StyleAttribute::Italic).unwrap();
        doc.delete(5..11).unwrap();
        assert_eq!(doc.plain_text(), "Hello");
        let lane = doc.spans().spans_of(AttributeKind::Italic);
        assert_eq!(lane[0].range, 0..5);
    }

    #[test]
    fn apply_rejects_empty_range() {
        let mut doc = AttributedDocument::from_text("abc");
        let err = doc.apply_attribute(1..1, StyleAttribute::Bold).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn apply_rejects_out_of_bounds() {
        let mut doc = AttributedDocument::from_text("abc");
        let err = doc.apply_attribute(0..4, StyleAttribute::Bold).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.len(), 3);
    }

    #[test]
    fn apply_rejects_non_boundary_offsets() {
        // "é" is 2 bytes in UTF-8; index 1 is not a boundary.
        let mut doc = AttributedDocument::from_text("éclair");
        let err = doc.apply_attribute(1..3, StyleAttribute::Bold).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        assert!(doc.apply_attribute(0..2, StyleAttribute::Bold).is_ok());
    }

    #[test]
    fn alignment_widens_to_line_range() {
        let mut doc = AttributedDocument::from_text("first line\nsecond line");
        assert_eq!(doc.line_range(&(13..15)), 11..22);
        doc.apply_attribute(13..15, StyleAttribute::Alignment(Alignment::Center))
            .unwrap();
        let lane = doc.spans().spans_of(AttributeKind::Alignment);
        assert_eq!(lane[0].range, 11..22);
        assert_eq!(&doc.plain_text()[11..22], "second line");
    }

    #[test]
    fn alignment_last_write_wins_per_line() {
        let mut doc = AttributedDocument::from_text("only line");
        doc.apply_attribute(0..4, StyleAttribute::Alignment(Alignment::Right))
            .unwrap();
        doc.apply_attribute(5..9, StyleAttribute::Alignment(Alignment::Center))
            .unwrap();
        let lane = doc.spans().spans_of(AttributeKind::Alignment);
        assert_eq!(lane.len(), 1, "one alignment value per line");
        assert_eq!(
            lane[0].attribute,
            StyleAttribute::Alignment(Alignment::Center)
        );
        assert_eq!(lane[0].range, 0..9);
    }

    #[test]
    fn alignment_spanning_multiple_lines() {
        let mut doc = AttributedDocument::from_text("aa\nbb\ncc");
        doc.apply_attribute(1..7, StyleAttribute::Alignment(Alignment::Right))
            .unwrap();
        let lane = doc.spans().spans_of(AttributeKind::Alignment);
        assert_eq!(lane[0].range, 0..8);
    }

    #[test]
    fn replace_all_clears_styling() {
        let mut doc = AttributedDocument::from_text("styled");
        doc.apply_attribute(0..6, StyleAttribute::Underline).unwrap();
        doc.replace_all("fresh");
        assert_eq!(doc.plain_text(), "fresh");
        assert!(doc.spans().is_empty());
    }

    #[test]
    fn styles_at_cursor() {
        let mut doc = AttributedDocument::from_text("Hello");
        doc.apply_attribute(0..3, StyleAttribute::Bold).unwrap();
        assert!(doc.styles_at(2).unwrap().bold());
        assert!(doc.styles_at(3).unwrap().is_empty());
        assert!(doc.styles_at(9).is_err());
    }

    #[test]
    fn runs_over_validates_bounds() {
        let doc = AttributedDocument::from_text("abc");
        assert!(doc.runs(0..3).is_ok());
        assert!(doc.runs(0..4).is_err());
    }

    #[test]
    fn char_count_on_multibyte_text() {
        let doc = AttributedDocument::from_text("héllo");
        assert_eq!(doc.len(), 6);
        assert_eq!(doc.char_count(), 5);
    }
}

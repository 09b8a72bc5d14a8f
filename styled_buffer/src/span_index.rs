// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range-based style storage with per-kind non-overlap.
//!
//! The index keeps one sorted, disjoint span list ("lane") per
//! [`AttributeKind`]. Inserting a span clips any same-kind spans it overlaps
//! (the classic insert-interval-into-disjoint-set algorithm) and re-merges
//! adjacent identical-value neighbors, so every lane stays in canonical
//! minimal form. Run partitioning is a sweep over the union of all lanes'
//! endpoints within the queried range.

use core::ops::Range;

use crate::style::{AttributeKind, StyleAttribute, StyleSet, KIND_COUNT};

/// A contiguous character range annotated with one attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSpan {
    /// The byte range the attribute applies to. Never empty.
    pub range: Range<usize>,
    /// The attribute applied over `range`.
    pub attribute: StyleAttribute,
}

/// Stores and queries character-range style annotations.
///
/// Invariants, per lane:
/// - spans are sorted by start offset and never overlap;
/// - no span is zero-length;
/// - adjacent spans with the same value are merged.
///
/// The index has no knowledge of the text buffer; ranges are validated by
/// [`AttributedDocument`] before they reach it.
///
/// [`AttributedDocument`]: crate::AttributedDocument
#[derive(Clone, Debug, Default)]
pub struct StyleSpanIndex {
    lanes: [Vec<StyleSpan>; KIND_COUNT],
}

impl StyleSpanIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no span of any kind is stored.
    pub fn is_empty(&self) -> bool {
        self.lanes.iter().all(Vec::is_empty)
    }

    /// The total number of stored spans across all kinds.
    pub fn span_count(&self) -> usize {
        self.lanes.iter().map(Vec::len).sum()
    }

    /// The stored spans of one kind, sorted and disjoint.
    pub fn spans_of(&self, kind: AttributeKind) -> &[StyleSpan] {
        &self.lanes[kind.index()]
    }

    /// Remove every span of every kind.
    pub fn clear(&mut self) {
        for lane in &mut self.lanes {
            lane.clear();
        }
    }

    /// Insert `attribute` over `range`, clipping same-kind overlaps.
    ///
    /// Existing spans of the same kind that overlap `range` lose their
    /// covered portion; a span fully inside `range` is removed. Overlapping
    /// or touching spans with the *same* value coalesce with the new span.
    ///
    /// An empty `range` is a no-op: no span is ever zero-length.
    pub fn add(&mut self, range: Range<usize>, attribute: StyleAttribute) {
        if range.start >= range.end {
            return;
        }
        let lane = &mut self.lanes[attribute.kind().index()];
        let mut new = StyleSpan { range, attribute };
        let mut rebuilt = Vec::with_capacity(lane.len() + 2);
        let mut after = Vec::new();
        for span in lane.drain(..) {
            if span.range.end < new.range.start {
                rebuilt.push(span);
            } else if span.range.start > new.range.end {
                after.push(span);
            } else if span.attribute == new.attribute {
                // Overlapping or touching, identical value: coalesce.
                new.range.start = new.range.start.min(span.range.start);
                new.range.end = new.range.end.max(span.range.end);
            } else {
                // Overlapping, different value: keep the uncovered parts.
                if span.range.start < new.range.start {
                    rebuilt.push(StyleSpan {
                        range: span.range.start..new.range.start,
                        attribute: span.attribute,
                    });
                }
                if span.range.end > new.range.end {
                    after.push(StyleSpan {
                        range: new.range.end..span.range.end,
                        attribute: span.attribute,
                    });
                }
            }
        }
        rebuilt.push(new);
        rebuilt.extend(after);
        *lane = rebuilt;
    }

    /// Clear the `kind` annotation over `range`.
    ///
    /// Spans partially covered by `range` are split; the uncovered remainder
    /// is retained. An empty `range` is a no-op.
    pub fn remove(&mut self, kind: AttributeKind, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        let lane = &mut self.lanes[kind.index()];
        let mut rebuilt = Vec::with_capacity(lane.len() + 1);
        for span in lane.drain(..) {
            if span.range.end <= range.start || span.range.start >= range.end {
                rebuilt.push(span);
            } else {
                if span.range.start < range.start {
                    rebuilt.push(StyleSpan {
                        range: span.range.start..range.start,
                        attribute: span.attribute,
                    });
                }
                if span.range.end > range.end {
                    rebuilt.push(StyleSpan {
                        range: range.end..span.range.end,
                        attribute: span.attribute,
                    });
                }
            }
        }
        *lane = rebuilt;
    }

    /// All attributes active at a single offset.
    pub fn styles_at(&self, offset: usize) -> StyleSet {
        let mut set = StyleSet::new();
        for lane in &self.lanes {
            // Lanes are sorted and disjoint, so at most one span can cover
            // the offset; find the first span ending after it.
            let ix = lane.partition_point(|span| span.range.end <= offset);
            if let Some(span) = lane.get(ix) {
                if span.range.start <= offset {
                    set.insert(span.attribute);
                }
            }
        }
        set
    }

    /// Partition `range` into maximal contiguous runs sharing an identical
    /// attribute set, in left-to-right order.
    ///
    /// This is a view recomputed fresh on each call, not a cached iterator;
    /// the borrow prevents the index from mutating while a `Runs` is alive.
    /// An empty `range` yields no runs.
    pub fn runs(&self, range: Range<usize>) -> Runs<'_> {
        let mut boundaries = Vec::new();
        if range.start < range.end {
            boundaries.push(range.start);
            boundaries.push(range.end);
            for lane in &self.lanes {
                for span in lane {
                    for endpoint in [span.range.start, span.range.end] {
                        if endpoint > range.start && endpoint < range.end {
                            boundaries.push(endpoint);
                        }
                    }
                }
            }
            boundaries.sort_unstable();
            boundaries.dedup();
        }
        Runs {
            index: self,
            boundaries,
            cursor: 0,
        }
    }

    /// Shift span offsets after a buffer edit at `from`.
    ///
    /// For an insertion (`delta > 0`), spans entirely before `from` are
    /// untouched and everything at or after `from` moves right; a span
    /// straddling `from` grows to cover the inserted text. For a deletion
    /// (`delta < 0`), the deleted region is `from..from + delta.abs()`:
    /// spans straddling it are truncated to the remaining text and spans
    /// that shrink to zero length are removed.
    pub fn shift(&mut self, from: usize, delta: isize) {
        if delta == 0 {
            return;
        }
        if delta > 0 {
            let inserted = delta.unsigned_abs();
            for lane in &mut self.lanes {
                for span in lane.iter_mut() {
                    if span.range.start >= from {
                        span.range.start += inserted;
                    }
                    if span.range.end > from {
                        span.range.end += inserted;
                    }
                }
            }
        } else {
            let deleted = from..from + delta.unsigned_abs();
            for lane in &mut self.lanes {
                lane.retain_mut(|span| {
                    span.range.start = collapse_offset(span.range.start, &deleted);
                    span.range.end = collapse_offset(span.range.end, &deleted);
                    span.range.start < span.range.end
                });
                // A deletion can make two same-value spans adjacent.
                coalesce(lane);
            }
        }
    }
}

/// Map an offset across a deleted region.
fn collapse_offset(offset: usize, deleted: &Range<usize>) -> usize {
    if offset <= deleted.start {
        offset
    } else if offset >= deleted.end {
        offset - (deleted.end - deleted.start)
    } else {
        deleted.start
    }
}

/// Merge adjacent same-value spans to restore canonical minimal form.
fn coalesce(lane: &mut Vec<StyleSpan>) {
    let mut merged: Vec<StyleSpan> = Vec::with_capacity(lane.len());
    for span in lane.drain(..) {
        match merged.last_mut() {
            Some(prev) if prev.range.end == span.range.start && prev.attribute == span.attribute => {
                prev.range.end = span.range.end;
            }
            _ => merged.push(span),
        }
    }
    *lane = merged;
}

/// One maximal run produced by [`StyleSpanIndex::runs`].
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRun {
    /// The byte range of the run.
    pub range: Range<usize>,
    /// The attribute set shared by every character in the run.
    pub styles: StyleSet,
}

/// Iterator over the maximal same-style runs of a range.
///
/// Produced by [`StyleSpanIndex::runs`]; finite and restartable by calling
/// `runs` again.
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    index: &'a StyleSpanIndex,
    boundaries: Vec<usize>,
    cursor: usize,
}

impl Iterator for Runs<'_> {
    type Item = StyleRun;

    fn next(&mut self) -> Option<Self::Item> {
        let start = *self.boundaries.get(self.cursor)?;
        let end = *self.boundaries.get(self.cursor + 1)?;
        self.cursor += 1;
        Some(StyleRun {
            range: start..end,
            styles: self.index.styles_at(start),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .boundaries
            .len()
            .saturating_sub(self.cursor + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Runs<'_> {}

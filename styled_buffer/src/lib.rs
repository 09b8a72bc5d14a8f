// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The attributed-text model for the Inkpad editor.
//!
//! An [`AttributedDocument`] owns a UTF-8 character buffer together with a
//! [`StyleSpanIndex`]: one sorted, disjoint list of [`StyleSpan`]s per
//! [`AttributeKind`]. Spans of different kinds may cover the same range and
//! compose; spans of the same kind never overlap. Edits to the buffer shift
//! span offsets; exporters consume the document either as plain text or as a
//! left-to-right sequence of maximal same-style runs.
//!
//! Offsets throughout this crate are byte offsets into UTF-8 text and are
//! validated to lie on character boundaries.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]

mod document;
mod error;
mod span_index;
mod style;

pub use crate::document::AttributedDocument;
pub use crate::error::{Error, ErrorKind};
pub use crate::span_index::{Runs, StyleRun, StyleSpan, StyleSpanIndex};
pub use crate::style::{Alignment, AttributeKind, StyleAttribute, StyleSet};

pub use peniko::Color;

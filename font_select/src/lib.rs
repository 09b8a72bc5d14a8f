// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Maps a logical style (family, size, weight, slant) to a usable rendering
//! font, with fallback.
//!
//! [`FontResolver`] wraps a [`fontique`] collection of the fonts installed
//! on the system. Resolution never fails: a missing family degrades to a
//! configured generic fallback (and the substitution is logged once per
//! family), and an empty registry degrades to a font whose glyphs simply do
//! not draw. The collection is scanned lazily but never changes once
//! populated, so resolution is deterministic for a fixed installed-font set.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]

mod descriptor;
mod resolver;

pub use crate::descriptor::FontDescriptor;
pub use crate::resolver::{FontResolver, ResolvedFont};

pub use fontique::GenericFamily;

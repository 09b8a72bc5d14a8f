// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-text rendering: the buffer content, UTF-8 encoded, verbatim.
//!
//! This is the one lossless format; styling is session-only and is not
//! persisted.

use styled_buffer::AttributedDocument;

pub(crate) fn render(document: &AttributedDocument) -> Vec<u8> {
    document.plain_text().as_bytes().to_vec()
}

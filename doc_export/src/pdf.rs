// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! PDF rendering: plain text laid out with one fixed font, paginated.
//!
//! The whole document is set page-wide in Helvetica at a fixed size; per-run
//! styling (bold/italic/color) is intentionally not applied, per the
//! editor's degraded-export contract for this format. Lines are wrapped at an
//! estimated advance width and split across A4 pages when they exceed the
//! page height. Characters outside the WinAnsi encoding degrade to `?`.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use styled_buffer::AttributedDocument;

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 50.0;
const FONT_SIZE: f32 = 12.0;
const LEADING: f32 = 14.0;

/// Helvetica averages a bit over half an em per glyph; erring slightly wide
/// keeps wrapped lines inside the margins.
const EST_CHAR_WIDTH: f32 = 0.52 * FONT_SIZE;

fn max_chars_per_line() -> usize {
    ((PAGE_WIDTH - 2.0 * MARGIN) / EST_CHAR_WIDTH) as usize
}

fn lines_per_page() -> usize {
    ((PAGE_HEIGHT - 2.0 * MARGIN) / LEADING) as usize
}

pub(crate) fn render(document: &AttributedDocument) -> Vec<u8> {
    let max_chars = max_chars_per_line();
    let mut lines = Vec::new();
    for paragraph in document.plain_text().split('\n') {
        wrap_paragraph(paragraph, max_chars, &mut lines);
    }

    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();
    let font_id = alloc.bump();
    let pages: Vec<&[String]> = lines.chunks(lines_per_page()).collect();
    let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (alloc.bump(), alloc.bump())).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_ids.len() as i32);
    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for (page_lines, (page_id, content_id)) in pages.iter().zip(&page_ids) {
        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(page_tree_id);
        page.contents(*content_id);
        page.resources().fonts().pair(Name(b"F1"), font_id);
        page.finish();

        let mut content = Content::new();
        content.begin_text();
        content.set_font(Name(b"F1"), FONT_SIZE);
        content.next_line(MARGIN, PAGE_HEIGHT - MARGIN - FONT_SIZE);
        for (i, line) in page_lines.iter().enumerate() {
            if i > 0 {
                content.next_line(0.0, -LEADING);
            }
            if !line.is_empty() {
                content.show(Str(&encode_win_ansi(line)));
            }
        }
        content.end_text();
        pdf.stream(*content_id, &content.finish());
    }

    pdf.finish()
}

/// Greedy word wrap by estimated character count; overlong words are
/// hard-split.
fn wrap_paragraph(paragraph: &str, max_chars: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0_usize;
    for word in paragraph.split(' ') {
        let mut word = word;
        let mut word_len = word.chars().count();
        while word_len > max_chars {
            if current_len > 0 {
                lines.push(core::mem::take(&mut current));
                current_len = 0;
            }
            let split = word
                .char_indices()
                .nth(max_chars)
                .map(|(ix, _)| ix)
                .unwrap_or(word.len());
            lines.push(word[..split].to_string());
            word = &word[split..];
            word_len -= max_chars;
        }
        if current_len > 0 && current_len + 1 + word_len > max_chars {
            lines.push(core::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    lines.push(current);
}

/// Map text to WinAnsi (CP1252) bytes, substituting `?` for anything the
/// encoding cannot represent.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\t' => b' ',
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u8,
            '\u{20ac}' => 0x80,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2026}' => 0x85,
            _ => b'?',
        })
        .collect()
}

// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raster rendering: plain text drawn onto a fixed 800x600 canvas.
//!
//! One fixed-size font, black text on a white background, anchored at a
//! fixed 10x10 margin. Text is not wrapped: glyphs (or glyph parts) falling
//! outside the canvas are clipped, never drawn, so content wider or taller
//! than the canvas truncates silently. The JPEG variant is the same raster,
//! lossy-encoded.

use font_select::{FontDescriptor, FontResolver};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, Pixel, Rgba, RgbaImage};
use styled_buffer::AttributedDocument;
use swash::scale::image::Image as GlyphImage;
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;
use swash::FontRef;

use crate::error::ExportError;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 600;
const ORIGIN_MARGIN: f32 = 10.0;
const FONT_SIZE: f32 = 14.0;

/// The family the original editor hard-coded for raster export; degrades
/// through the resolver's fallback chain when not installed.
const RASTER_FAMILY: &str = "Arial";

const JPEG_QUALITY: u8 = 90;

pub(crate) fn render_png(
    document: &AttributedDocument,
    resolver: &mut FontResolver,
) -> Result<Vec<u8>, ExportError> {
    let canvas = rasterize(document, resolver);
    let mut out = Vec::new();
    canvas.write_with_encoder(PngEncoder::new(&mut out))?;
    Ok(out)
}

pub(crate) fn render_jpeg(
    document: &AttributedDocument,
    resolver: &mut FontResolver,
) -> Result<Vec<u8>, ExportError> {
    let canvas = DynamicImage::ImageRgba8(rasterize(document, resolver)).into_rgb8();
    let mut out = Vec::new();
    canvas.write_with_encoder(JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY))?;
    Ok(out)
}

/// Draw the document's plain text onto the fixed canvas.
fn rasterize(document: &AttributedDocument, resolver: &mut FontResolver) -> RgbaImage {
    let mut canvas =
        RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, Rgba([255, 255, 255, 255]));

    let font = resolver.resolve(&FontDescriptor::new(RASTER_FAMILY, FONT_SIZE));
    let Some(font_ref) = FontRef::from_index(font.data(), font.index as usize) else {
        // Empty registry: the documented degradation is a blank canvas.
        log::warn!("no usable font available, raster export contains no text");
        return canvas;
    };

    let metrics = font_ref.metrics(&[]).scale(FONT_SIZE);
    let line_height = (metrics.ascent + metrics.descent + metrics.leading).ceil();
    let glyph_metrics = font_ref.glyph_metrics(&[]).scale(FONT_SIZE);
    let charmap = font_ref.charmap();

    let mut scale_cx = ScaleContext::new();
    let mut scaler = scale_cx.builder(font_ref).size(FONT_SIZE).hint(true).build();

    let mut baseline = ORIGIN_MARGIN + metrics.ascent;
    for line in document.plain_text().split('\n') {
        if baseline - metrics.ascent >= CANVAS_HEIGHT as f32 {
            break;
        }
        let mut pen_x = ORIGIN_MARGIN;
        for ch in line.chars() {
            if pen_x >= CANVAS_WIDTH as f32 {
                break;
            }
            let glyph_id = charmap.map(ch);
            if let Some(rendered) = Render::new(&[Source::Outline])
                .format(Format::Alpha)
                .render(&mut scaler, glyph_id)
            {
                blit(&mut canvas, &rendered, pen_x, baseline);
            }
            pen_x += glyph_metrics.advance_width(glyph_id);
        }
        baseline += line_height;
    }
    canvas
}

/// Alpha-blend one glyph mask onto the canvas, clipping at the edges.
fn blit(canvas: &mut RgbaImage, glyph: &GlyphImage, pen_x: f32, baseline: f32) {
    let origin_x = pen_x.floor() as i32 + glyph.placement.left;
    let origin_y = baseline.floor() as i32 - glyph.placement.top;
    let width = glyph.placement.width as i32;
    let height = glyph.placement.height as i32;
    for row in 0..height {
        for col in 0..width {
            let x = origin_x + col;
            let y = origin_y + row;
            if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
                continue;
            }
            let alpha = glyph.data[(row * width + col) as usize];
            if alpha == 0 {
                continue;
            }
            canvas
                .get_pixel_mut(x as u32, y as u32)
                .blend(&Rgba([0, 0, 0, alpha]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn png_has_fixed_canvas() {
        let mut resolver = FontResolver::new();
        let doc = AttributedDocument::from_text("Hello world");
        let bytes = render_png(&doc, &mut resolver).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }

    #[test]
    fn jpeg_has_magic_and_canvas() {
        let mut resolver = FontResolver::new();
        let doc = AttributedDocument::from_text("Hello world");
        let bytes = render_jpeg(&doc, &mut resolver).unwrap();
        assert_eq!(&bytes[..2], [0xff, 0xd8]);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }

    #[test]
    fn empty_document_renders() {
        let mut resolver = FontResolver::new();
        let bytes = render_png(&AttributedDocument::new(), &mut resolver).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn oversized_content_clips_without_resizing() {
        let mut resolver = FontResolver::new();
        let wide = "x".repeat(2000);
        let tall = format!("{}\n", wide).repeat(100);
        let bytes = render_png(&AttributedDocument::from_text(tall), &mut resolver).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        // Pixels beyond the canvas bounds are simply not drawn.
        assert_eq!(decoded.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }
}

//! Text measurement and glyph rasterisation via cosmic-text.
//!
//! The highlight engine and frame renderer talk to text through the
//! [`TextMeasure`]/[`TextDraw`] seams so tests can substitute a
//! fixed-advance measurer; [`TextRenderer`] is the real implementation.

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, Weight};

/// Pixel measurement of rendered text. Mutable because shaping populates
/// font caches.
pub trait TextMeasure {
    /// Rendered pixel width of `text` at the given size/weight.
    fn text_width(&mut self, text: &str, size: f32, weight: u16) -> i32;
}

/// Glyph drawing on top of measurement, used by the frame renderer.
pub trait TextDraw: TextMeasure {
    /// Draw `text` with its top-left corner at (x, y), blending glyph
    /// coverage over the buffer.
    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &mut self,
        pixels: &mut [u32],
        buf_width: usize,
        text: &str,
        x: i32,
        y: i32,
        size: f32,
        weight: u16,
        colour: u32,
    );
}

pub struct TextRenderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextRenderer {
    /// Uses the system font database; chat text is shaped with the default
    /// sans-serif family.
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    fn shape(&mut self, text: &str, size: f32, weight: u16) -> Buffer {
        let attrs = Attrs::new()
            .family(Family::SansSerif)
            .weight(Weight(weight));

        let mut buffer = Buffer::new(&mut self.font_system, Metrics::new(size, size * 1.2));
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for TextRenderer {
    fn text_width(&mut self, text: &str, size: f32, weight: u16) -> i32 {
        if text.is_empty() {
            return 0;
        }
        let buffer = self.shape(text, size, weight);

        // Glyph advances, not ink extents, so trailing spaces count
        let width = buffer.layout_runs().fold(0.0f32, |max_width, run| {
            let run_width = run
                .glyphs
                .iter()
                .fold(0.0f32, |w, glyph| (glyph.x + glyph.w).max(w));
            max_width.max(run_width)
        });
        width.ceil() as i32
    }
}

impl TextDraw for TextRenderer {
    fn draw_text(
        &mut self,
        pixels: &mut [u32],
        buf_width: usize,
        text: &str,
        x: i32,
        y: i32,
        size: f32,
        weight: u16,
        colour: u32,
    ) {
        if text.is_empty() || buf_width == 0 {
            return;
        }
        let buffer = self.shape(text, size, weight);

        let mut colour = colour as u64;
        colour = (colour | (colour << 16)) & 0x0000FFFF0000FFFF;
        colour = (colour | (colour << 8)) & 0x00FF00FF00FF00FF;

        for run in buffer.layout_runs() {
            let baseline_offset = run.line_y;

            for glyph in run.glyphs {
                let physical_glyph = glyph.physical((x as f32, y as f32), 1.);

                let Some(image) = self
                    .swash_cache
                    .get_image(&mut self.font_system, physical_glyph.cache_key)
                else {
                    continue;
                };

                let glyph_x = physical_glyph.x + image.placement.left;
                let glyph_y = physical_glyph.y + baseline_offset as i32 - image.placement.top;

                let glyph_width = image.placement.width as usize;
                let glyph_height = image.placement.height as usize;

                for cy in 0..glyph_height {
                    for cx in 0..glyph_width {
                        let alpha = image.data[cy * glyph_width + cx];
                        if alpha == 0 {
                            continue;
                        }
                        let final_x = glyph_x as isize + cx as isize;
                        let final_y = glyph_y as isize + cy as isize;
                        if final_x < 0 || final_y < 0 || final_x >= buf_width as isize {
                            continue;
                        }
                        let idx = final_y as usize * buf_width + final_x as usize;
                        if idx >= pixels.len() {
                            continue;
                        }

                        let mut bg = pixels[idx] as u64;
                        let alpha = alpha as u64;
                        bg = (bg | (bg << 16)) & 0x0000FFFF0000FFFF;
                        bg = (bg | (bg << 8)) & 0x00FF00FF00FF00FF;

                        let mut blended = bg * (255 - alpha) + colour * alpha;
                        blended = (blended >> 8) & 0x00FF00FF00FF00FF;
                        blended = (blended | (blended >> 8)) & 0x0000FFFF0000FFFF;
                        blended |= blended >> 16;
                        pixels[idx] = blended as u32;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_zero_width() {
        let mut text = TextRenderer::new();
        assert_eq!(text.text_width("", 14.0, 400), 0);
    }

    #[test]
    fn test_width_monotonic_in_text_length() {
        // Holds for any font the system resolves; zero everywhere is also
        // fine on a fontless CI box.
        let mut text = TextRenderer::new();
        let short = text.text_width("ab", 14.0, 400);
        let long = text.text_width("abab", 14.0, 400);
        assert!(long >= short);
    }

    #[test]
    fn test_draw_text_stays_in_bounds() {
        let mut text = TextRenderer::new();
        let mut pixels = vec![0u32; 16 * 16];
        // Partly off every edge; must not panic or wrap rows
        text.draw_text(&mut pixels, 16, "hello", -20, -20, 14.0, 400, 0xFF_FF_FF_FF);
        text.draw_text(&mut pixels, 16, "hello", 12, 12, 14.0, 400, 0xFF_FF_FF_FF);
    }
}

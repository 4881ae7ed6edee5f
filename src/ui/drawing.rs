//! Shared pixel-buffer drawing primitives
//!
//! All functions operate on packed-ARGB (0xAARRGGBB) `&mut [u32]` buffers
//! and clip against the buffer bounds; a rectangle partly or fully off
//! screen is safe.

use crate::types::emote::BitmapFrame;
use crate::types::geometry::Rect;

/// Clip `rect` to the buffer, returning half-open pixel ranges.
fn clip(rect: Rect, buf_width: usize, buf_height: usize) -> Option<(usize, usize, usize, usize)> {
    if rect.is_empty() {
        return None;
    }
    let x0 = rect.x.max(0) as usize;
    let y0 = rect.y.max(0) as usize;
    let x1 = (rect.right().max(0) as usize).min(buf_width);
    let y1 = (rect.bottom().max(0) as usize).min(buf_height);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0, x1, y0, y1))
}

/// Opaque rectangle fill.
pub fn fill_rect(pixels: &mut [u32], buf_width: usize, buf_height: usize, rect: Rect, colour: u32) {
    let Some((x0, x1, y0, y1)) = clip(rect, buf_width, buf_height) else {
        return;
    };
    for row in pixels[y0 * buf_width..y1 * buf_width].chunks_exact_mut(buf_width) {
        row[x0..x1].fill(colour);
    }
}

/// Blend `colour` over the rectangle using the colour's own alpha channel.
pub fn blend_rect(
    pixels: &mut [u32],
    buf_width: usize,
    buf_height: usize,
    rect: Rect,
    colour: u32,
) {
    let alpha = (colour >> 24) as u8;
    if alpha == 0 {
        return;
    }
    if alpha == 255 {
        fill_rect(pixels, buf_width, buf_height, rect, colour);
        return;
    }
    let Some((x0, x1, y0, y1)) = clip(rect, buf_width, buf_height) else {
        return;
    };
    for row in pixels[y0 * buf_width..y1 * buf_width].chunks_exact_mut(buf_width) {
        for px in &mut row[x0..x1] {
            *px = blend_argb(*px, colour, alpha);
        }
    }
}

/// Blit a decoded frame into `dest`, nearest-neighbour scaled, blending by
/// the frame's per-pixel alpha.
pub fn blit_frame(
    pixels: &mut [u32],
    buf_width: usize,
    buf_height: usize,
    frame: &BitmapFrame,
    dest: Rect,
) {
    if frame.width == 0 || frame.height == 0 {
        return;
    }
    let Some((x0, x1, y0, y1)) = clip(dest, buf_width, buf_height) else {
        return;
    };
    for y in y0..y1 {
        let sy = (y as i32 - dest.y) as usize * frame.height / dest.height as usize;
        let src_row = &frame.pixels[sy * frame.width..(sy + 1) * frame.width];
        let row = &mut pixels[y * buf_width..(y + 1) * buf_width];
        for x in x0..x1 {
            let sx = (x as i32 - dest.x) as usize * frame.width / dest.width as usize;
            let src = src_row[sx];
            match (src >> 24) as u8 {
                0 => {}
                255 => row[x] = src,
                alpha => row[x] = blend_argb(row[x], src, alpha),
            }
        }
    }
}

/// Blend `fg` over `bg` at the given alpha, SWAR over all four channels,
/// forcing the result opaque.
#[inline]
pub(crate) fn blend_argb(bg: u32, fg: u32, alpha: u8) -> u32 {
    let mut bg = bg as u64;
    bg = (bg | (bg << 16)) & 0x0000FFFF0000FFFF;
    bg = (bg | (bg << 8)) & 0x00FF00FF00FF00FF;

    let mut fg = fg as u64;
    fg = (fg | (fg << 16)) & 0x0000FFFF0000FFFF;
    fg = (fg | (fg << 8)) & 0x00FF00FF00FF00FF;

    let alpha = alpha as u64;
    let mut blended = bg * (255 - alpha) + fg * alpha;
    blended = (blended >> 8) & 0x00FF00FF00FF00FF;
    blended = (blended | (blended >> 8)) & 0x0000FFFF0000FFFF;
    blended = blended | (blended >> 16);

    blended as u32 | 0xFF00_0000
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = 8;
    const H: usize = 6;

    fn buffer() -> Vec<u32> {
        vec![0xFF_00_00_00; W * H]
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut pixels = buffer();
        fill_rect(&mut pixels, W, H, Rect::new(-2, -2, 4, 4), 0xFF_FF_FF_FF);
        assert_eq!(pixels[0], 0xFF_FF_FF_FF);
        assert_eq!(pixels[1], 0xFF_FF_FF_FF);
        assert_eq!(pixels[2], 0xFF_00_00_00);
        assert_eq!(pixels[W + 1], 0xFF_FF_FF_FF);
        assert_eq!(pixels[2 * W], 0xFF_00_00_00);
    }

    #[test]
    fn test_fill_rect_fully_outside() {
        let mut pixels = buffer();
        fill_rect(&mut pixels, W, H, Rect::new(100, 100, 4, 4), 0xFF_FF_FF_FF);
        fill_rect(&mut pixels, W, H, Rect::new(-10, 0, 4, 4), 0xFF_FF_FF_FF);
        assert!(pixels.iter().all(|&p| p == 0xFF_00_00_00));
    }

    #[test]
    fn test_blend_rect_half_alpha() {
        let mut pixels = buffer();
        blend_rect(&mut pixels, W, H, Rect::new(0, 0, 1, 1), 0x80_FF_FF_FF);
        let px = pixels[0];
        // Roughly half grey, exact value depends on the >>8 blend
        let r = (px >> 16) & 0xFF;
        assert!((0x78..=0x88).contains(&r), "r = {r:#X}");
        assert_eq!(px >> 24, 0xFF, "output stays opaque");
    }

    #[test]
    fn test_blend_rect_zero_alpha_noop() {
        let mut pixels = buffer();
        blend_rect(&mut pixels, W, H, Rect::new(0, 0, W as i32, H as i32), 0x00_FF_FF_FF);
        assert!(pixels.iter().all(|&p| p == 0xFF_00_00_00));
    }

    #[test]
    fn test_blit_frame_unscaled() {
        let mut pixels = buffer();
        let frame = BitmapFrame::solid(2, 2, 0xFF_12_34_56);
        blit_frame(&mut pixels, W, H, &frame, Rect::new(1, 1, 2, 2));
        assert_eq!(pixels[0], 0xFF_00_00_00);
        assert_eq!(pixels[W + 1], 0xFF_12_34_56);
        assert_eq!(pixels[2 * W + 2], 0xFF_12_34_56);
        assert_eq!(pixels[3 * W + 3], 0xFF_00_00_00);
    }

    #[test]
    fn test_blit_frame_scales_nearest() {
        let mut pixels = buffer();
        // 1x1 source stretched over 4x4
        let frame = BitmapFrame::solid(1, 1, 0xFF_AB_CD_EF);
        blit_frame(&mut pixels, W, H, &frame, Rect::new(0, 0, 4, 4));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(pixels[y * W + x], 0xFF_AB_CD_EF);
            }
        }
    }

    #[test]
    fn test_blit_frame_transparent_pixels_skip() {
        let mut pixels = buffer();
        let frame = BitmapFrame::solid(2, 1, 0x00_FF_FF_FF);
        blit_frame(&mut pixels, W, H, &frame, Rect::new(0, 0, 2, 1));
        assert_eq!(pixels[0], 0xFF_00_00_00);
    }
}

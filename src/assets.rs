//! Decoding downloaded emote/image bytes into renderable frames.
//!
//! Static assets decode to a single [`BitmapFrame`]; animated emotes decode
//! to a frame sequence with per-frame delays. Scheduling frame advances is
//! the animation clock's job, not ours — it calls
//! [`BitmapHandle::swap_frame`](crate::types::emote::BitmapHandle::swap_frame)
//! with entries from the decoded sequence.

use std::io::Cursor;
use std::time::Duration;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, RgbaImage};
use thiserror::Error;

use crate::types::emote::BitmapFrame;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("animated emote has no frames")]
    EmptyAnimation,
}

/// Decode a static emote, badge or inline image (PNG/JPEG/single-frame GIF).
pub fn decode_static(bytes: &[u8]) -> Result<BitmapFrame, AssetError> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    Ok(frame_from_rgba(&img))
}

/// Decode an animated GIF emote into its frame sequence.
pub fn decode_animated(bytes: &[u8]) -> Result<Vec<(BitmapFrame, Duration)>, AssetError> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    let mut frames = Vec::new();
    for frame in decoder.into_frames() {
        let frame = frame?;
        let delay: Duration = frame.delay().into();
        frames.push((frame_from_rgba(frame.buffer()), delay));
    }
    if frames.is_empty() {
        return Err(AssetError::EmptyAnimation);
    }
    log::debug!("decoded animated emote: {} frames", frames.len());
    Ok(frames)
}

/// RGBA8 rows to packed ARGB (0xAARRGGBB).
fn frame_from_rgba(img: &RgbaImage) -> BitmapFrame {
    let (width, height) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
        })
        .collect();
    BitmapFrame {
        pixels,
        width: width as usize,
        height: height as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifEncoder;
    use image::{Delay, Frame, ImageFormat, Rgba};

    fn png_bytes(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(w, h, Rgba(rgba));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_static_png() {
        let frame = decode_static(&png_bytes(3, 2, [0x10, 0x20, 0x30, 0xFF])).unwrap();
        assert_eq!((frame.width, frame.height), (3, 2));
        assert_eq!(frame.pixels.len(), 6);
        assert_eq!(frame.pixels[0], 0xFF_10_20_30);
    }

    #[test]
    fn test_decode_static_garbage() {
        assert!(matches!(
            decode_static(b"not an image"),
            Err(AssetError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_animated_gif() {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            for colour in [[255, 0, 0, 255], [0, 255, 0, 255]] {
                let img = RgbaImage::from_pixel(2, 2, Rgba(colour));
                encoder
                    .encode_frame(Frame::from_parts(
                        img,
                        0,
                        0,
                        Delay::from_numer_denom_ms(100, 1),
                    ))
                    .unwrap();
            }
        }

        let frames = decode_animated(&bytes).unwrap();
        assert_eq!(frames.len(), 2);
        for (frame, delay) in &frames {
            assert_eq!((frame.width, frame.height), (2, 2));
            assert_eq!(*delay, Duration::from_millis(100));
        }
        // GIF is palette-based but solid colours survive exactly
        assert_eq!(frames[0].0.pixels[0], 0xFF_FF_00_00);
        assert_eq!(frames[1].0.pixels[0], 0xFF_00_FF_00);
    }
}

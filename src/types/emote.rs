//! Emote and inline-image bitmap state shared with the asset loader.
//!
//! Bitmap contents are produced asynchronously: the loader decodes a frame
//! (or, for animated emotes, keeps swapping frames on its own clock) while
//! the renderer reads whatever frame is current. Each handle carries its own
//! lock, held only for the duration of a single read or swap, so a draw
//! never observes a half-written frame.

use std::sync::Mutex;

/// One decoded frame in packed ARGB (0xAARRGGBB), row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapFrame {
    pub pixels: Vec<u32>,
    pub width: usize,
    pub height: usize,
}

impl BitmapFrame {
    /// A solid single-colour frame. Handy for placeholders and tests.
    pub fn solid(width: usize, height: usize, colour: u32) -> Self {
        Self {
            pixels: vec![colour; width * height],
            width,
            height,
        }
    }
}

/// Shared bitmap slot with its per-asset lock.
///
/// `None` means not loaded yet; the renderer treats that as skip-this-frame,
/// never as an error.
#[derive(Debug, Default)]
pub struct BitmapHandle {
    frame: Mutex<Option<BitmapFrame>>,
}

impl BitmapHandle {
    /// A handle whose bitmap has not been decoded yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_loaded(frame: BitmapFrame) -> Self {
        Self {
            frame: Mutex::new(Some(frame)),
        }
    }

    /// Swap in a newly decoded frame. Called by the loader/decoder side.
    pub fn swap_frame(&self, frame: BitmapFrame) {
        if let Ok(mut slot) = self.frame.lock() {
            *slot = Some(frame);
        }
    }

    /// Drop the current frame (asset evicted or reload pending).
    pub fn clear(&self) {
        if let Ok(mut slot) = self.frame.lock() {
            *slot = None;
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.frame.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }

    /// Run `f` against the current frame under the asset lock.
    ///
    /// Returns `None` when no frame is loaded (or the lock is poisoned);
    /// callers skip the word for this frame.
    pub fn with_frame<R>(&self, f: impl FnOnce(&BitmapFrame) -> R) -> Option<R> {
        let slot = self.frame.lock().ok()?;
        slot.as_ref().map(f)
    }
}

/// A chat emote: its code (e.g. "Kappa"), whether it animates, and the
/// bitmap slot the loader fills in.
#[derive(Debug)]
pub struct Emote {
    pub code: String,
    pub animated: bool,
    pub handle: BitmapHandle,
}

impl Emote {
    pub fn new(code: impl Into<String>, animated: bool) -> Self {
        Self {
            code: code.into(),
            animated,
            handle: BitmapHandle::empty(),
        }
    }

    pub fn with_frame_loaded(code: impl Into<String>, animated: bool, frame: BitmapFrame) -> Self {
        Self {
            code: code.into(),
            animated,
            handle: BitmapHandle::with_loaded(frame),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_handle_skips() {
        let handle = BitmapHandle::empty();
        assert!(!handle.is_loaded());
        assert_eq!(handle.with_frame(|f| f.width), None);
    }

    #[test]
    fn test_swap_and_read() {
        let handle = BitmapHandle::empty();
        handle.swap_frame(BitmapFrame::solid(2, 3, 0xFF00FF00));
        assert!(handle.is_loaded());
        assert_eq!(handle.with_frame(|f| (f.width, f.height)), Some((2, 3)));
        assert_eq!(handle.with_frame(|f| f.pixels[0]), Some(0xFF00FF00));

        // A swapped frame fully replaces the old one
        handle.swap_frame(BitmapFrame::solid(1, 1, 0xFFFF0000));
        assert_eq!(handle.with_frame(|f| (f.width, f.height)), Some((1, 1)));

        handle.clear();
        assert!(!handle.is_loaded());
    }

    #[test]
    fn test_concurrent_swap_never_tears() {
        use std::sync::Arc;

        // Decoder thread keeps swapping between two solid frames while the
        // reader checks every observed frame is internally consistent.
        let handle = Arc::new(BitmapHandle::empty());
        let writer = Arc::clone(&handle);
        let t = std::thread::spawn(move || {
            for i in 0..500u32 {
                let colour = if i % 2 == 0 { 0xFF111111 } else { 0xFF222222 };
                writer.swap_frame(BitmapFrame::solid(4, 4, colour));
            }
        });
        for _ in 0..500 {
            if let Some(ok) = handle.with_frame(|f| f.pixels.iter().all(|&p| p == f.pixels[0])) {
                assert!(ok, "observed a torn frame");
            }
        }
        t.join().unwrap();
    }
}

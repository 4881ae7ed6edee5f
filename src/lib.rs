//! Chat message layout, selection addressing and highlight rendering core.
//!
//! A message is an ordered list of heterogeneous words (text, emotes,
//! inline images), some wrapped across visual lines. This crate owns the
//! selection coordinate model over that layout, the highlight-geometry
//! engine that turns a selection range into paint rectangles, and the frame
//! renderer that draws rows into a packed-ARGB pixel buffer — including the
//! separate animated-emote pass that refreshes GIF regions on their own
//! clock without redrawing the row around them.
//!
//! Line wrapping, input handling, asset downloading and the host window are
//! external collaborators: layout arrives pre-wrapped, selections arrive
//! normalised, and bitmaps arrive through per-asset locked handles.

pub mod assets;
pub mod types;
pub mod ui;

pub use types::*;
pub use ui::{Theme, TextDraw, TextMeasure, TextRenderer};

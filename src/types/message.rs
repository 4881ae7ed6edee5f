//! Message layout model: an ordered list of heterogeneous words.
//!
//! Layout is produced once per message by the line-wrapping pass; the
//! rendering core treats it as immutable apart from `last_origin`, which the
//! frame renderer stamps with the on-screen position each time the message
//! is drawn (the animated-emote pass redraws relative to that origin).

use std::sync::Arc;

use crate::types::emote::{BitmapHandle, Emote};
use crate::types::geometry::Rect;

/// One wrapped sub-line of a text word: the substring rendered on that line
/// and its rectangle relative to the message origin.
///
/// Invariants (owed by the line-wrapping pass, not re-checked per frame):
/// the segment list is non-empty, the concatenated substrings equal the full
/// word text, and rectangles are in increasing (line, x) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSegment {
    pub text: String,
    pub rect: Rect,
}

impl SplitSegment {
    pub fn new(text: impl Into<String>, rect: Rect) -> Self {
        Self {
            text: text.into(),
            rect,
        }
    }
}

/// Word payload. Exactly one kind per word; dispatch is by `match`.
#[derive(Debug, Clone)]
pub enum WordKind {
    Text {
        value: String,
        /// Font size in pixels.
        size: f32,
        /// Font weight (400 regular, 700 bold).
        weight: u16,
        /// Per-word colour override (user name colours etc), packed ARGB.
        /// `None` falls back to the theme text colour.
        colour: Option<u32>,
        /// Present only when the wrapping pass broke this word across lines.
        split_segments: Option<Vec<SplitSegment>>,
    },
    Emote(Arc<Emote>),
    /// Non-emote inline image (badge, attachment thumbnail).
    Image(Arc<BitmapHandle>),
}

/// One laid-out word with its geometry relative to the message origin.
#[derive(Debug, Clone)]
pub struct Word {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub kind: WordKind,
}

impl Word {
    pub fn new(x: i32, y: i32, width: i32, height: i32, kind: WordKind) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind,
        }
    }

    pub const fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// How many wrap segments this word renders as (1 when unwrapped, and
    /// for emote/image words which never wrap).
    pub fn split_count(&self) -> usize {
        match &self.kind {
            WordKind::Text {
                split_segments: Some(segments),
                ..
            } => segments.len(),
            _ => 1,
        }
    }
}

/// One chat message row.
#[derive(Debug, Clone, Default)]
pub struct Message {
    pub words: Vec<Word>,
    /// Total laid-out row height in pixels.
    pub height: i32,
    /// Full-row background tint (mention highlight).
    pub highlighted: bool,
    /// Dimmed/greyed-out row (timed-out user etc).
    pub disabled: bool,
    /// Buffer position of the most recent full draw. Stamped only by
    /// `draw_message`; the animated-emote pass skips its tick while this is
    /// `None` (message not drawn yet this session).
    pub(crate) last_origin: Option<(i32, i32)>,
}

impl Message {
    pub fn new(words: Vec<Word>, height: i32) -> Self {
        Self {
            words,
            height,
            ..Self::default()
        }
    }

    pub fn last_origin(&self) -> Option<(i32, i32)> {
        self.last_origin
    }
}

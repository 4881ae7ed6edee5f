pub mod emote;
pub mod geometry;
pub mod message;
pub mod selection;

pub use emote::{BitmapFrame, BitmapHandle, Emote};
pub use geometry::Rect;
pub use message::{Message, SplitSegment, Word, WordKind};
pub use selection::{Selection, SelectionPoint};

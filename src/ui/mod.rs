pub mod colour;
pub mod drawing;
pub mod highlight;
pub mod render;
pub mod text_rasterizing;
pub mod theme;

pub use colour::adjust_legibility;
pub use highlight::compute_highlights;
pub use render::{draw_animated_emotes, draw_message};
pub use text_rasterizing::{TextDraw, TextMeasure, TextRenderer};
pub use theme::Theme;

//! Frame rendering: the full message pass and the decoupled animated-emote
//! pass.
//!
//! `draw_message` paints a whole row (background tint, words, selection
//! overlay) and stamps the message's on-screen origin.
//! `draw_animated_emotes` runs on the animation clock instead of the redraw
//! loop: it repaints only the animated emote regions of an already-drawn
//! row, so a GIF frame advance costs a few small blits instead of a full
//! row redraw, and the static content around it never flickers.

use crate::types::geometry::Rect;
use crate::types::message::{Message, WordKind};
use crate::types::selection::{Selection, SelectionPoint};
use crate::ui::colour::adjust_legibility;
use crate::ui::drawing::{blend_rect, blit_frame, fill_rect};
use crate::ui::highlight::compute_highlights;
use crate::ui::text_rasterizing::TextDraw;
use crate::ui::theme::{self, Theme};

/// Draw one message row at (x_offset, y_offset).
///
/// `draw_text` suppresses the glyph pass (the caller may be repainting only
/// images and selection); `selection` is `None` when nothing is selected.
#[allow(clippy::too_many_arguments)]
pub fn draw_message<T: TextDraw>(
    pixels: &mut [u32],
    buf_width: usize,
    buf_height: usize,
    message: &mut Message,
    x_offset: i32,
    y_offset: i32,
    selection: Option<&Selection>,
    current_line: usize,
    draw_text: bool,
    theme: &Theme,
    text: &mut T,
) {
    // The animated pass redraws relative to this origin
    message.last_origin = Some((x_offset, y_offset));

    let space_width = text.text_width(" ", theme::CHAT_FONT_SIZE, theme::CHAT_FONT_WEIGHT);

    if message.highlighted {
        fill_rect(
            pixels,
            buf_width,
            buf_height,
            Rect::new(0, y_offset, buf_width as i32, message.height),
            theme.chat_background_highlighted,
        );
    }

    for word in &message.words {
        match &word.kind {
            WordKind::Text {
                value,
                size,
                weight,
                colour,
                split_segments,
            } => {
                if !draw_text {
                    continue;
                }
                let colour = adjust_legibility(colour.unwrap_or(theme.text), theme.is_light);
                match split_segments {
                    None => text.draw_text(
                        pixels,
                        buf_width,
                        value,
                        x_offset + word.x,
                        y_offset + word.y,
                        *size,
                        *weight,
                        colour,
                    ),
                    Some(segments) => {
                        for segment in segments {
                            text.draw_text(
                                pixels,
                                buf_width,
                                &segment.text,
                                x_offset + segment.rect.x,
                                y_offset + segment.rect.y,
                                *size,
                                *weight,
                                colour,
                            );
                        }
                    }
                }
            }
            // A handle with no frame yet is skipped for this frame only;
            // the loader fills it in later.
            WordKind::Emote(emote) => {
                emote.handle.with_frame(|frame| {
                    blit_frame(
                        pixels,
                        buf_width,
                        buf_height,
                        frame,
                        word.rect().translate(x_offset, y_offset),
                    );
                });
            }
            WordKind::Image(handle) => {
                handle.with_frame(|frame| {
                    blit_frame(
                        pixels,
                        buf_width,
                        buf_height,
                        frame,
                        word.rect().translate(x_offset, y_offset),
                    );
                });
            }
        }
    }

    if let Some(selection) = selection {
        for rect in compute_highlights(message, selection, current_line, space_width, text) {
            blend_rect(
                pixels,
                buf_width,
                buf_height,
                rect.translate(x_offset, y_offset),
                theme.selection,
            );
        }
    }
}

/// Repaint the animated-emote regions of a row on the animation clock.
///
/// Skips the tick when the message has not been drawn yet this session
/// (no stamped origin to repaint at). For each animated emote with a loaded
/// frame, under its asset lock: erase with the row background, blit the
/// current frame, reapply the selection overlay when the word is inside the
/// active selection, and dim the region when the row is disabled.
#[allow(clippy::too_many_arguments)]
pub fn draw_animated_emotes(
    pixels: &mut [u32],
    buf_width: usize,
    buf_height: usize,
    message: &Message,
    selection: Option<&Selection>,
    current_line: usize,
    space_width: i32,
    theme: &Theme,
) {
    let Some((x_offset, y_offset)) = message.last_origin else {
        return;
    };

    for (i, word) in message.words.iter().enumerate() {
        let WordKind::Emote(emote) = &word.kind else {
            continue;
        };
        if !emote.animated {
            continue;
        }

        let dest = word.rect().translate(x_offset, y_offset);
        let drawn = emote.handle.with_frame(|frame| {
            fill_rect(
                pixels,
                buf_width,
                buf_height,
                dest,
                theme.background_for(message.highlighted),
            );
            blit_frame(pixels, buf_width, buf_height, frame, dest);

            if let Some(selection) = selection {
                if !selection.is_empty() && word_in_selection(selection, current_line, i) {
                    blend_rect(pixels, buf_width, buf_height, dest, theme.selection);
                }
            }

            if message.disabled {
                let overlay = (u32::from(theme::DISABLED_OVERLAY_ALPHA) << 24)
                    | (theme.chat_background & 0x00FF_FFFF);
                let dimmed = Rect::new(dest.x, dest.y, dest.width + space_width, dest.height);
                blend_rect(pixels, buf_width, buf_height, dimmed, overlay);
            }
        });
        if drawn.is_none() {
            log::trace!("animated emote '{}' not loaded, skipping tick", emote.code);
        }
    }
}

/// Word-granular selection containment used by the animated pass: split and
/// character levels zeroed so the four-field comparison reduces to
/// (message, word).
fn word_in_selection(selection: &Selection, line: usize, word_index: usize) -> bool {
    let word = SelectionPoint::new(line, word_index, 0, 0);
    let first = SelectionPoint::new(
        selection.first.message_index,
        selection.first.word_index,
        0,
        0,
    );
    let last = SelectionPoint::new(selection.last.message_index, selection.last.word_index, 0, 0);
    word >= first && word < last
}

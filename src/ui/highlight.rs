//! Selection highlight geometry.
//!
//! Given a message's word list, a normalised selection and the index of the
//! row being drawn, computes the rectangles to paint as highlight, relative
//! to the message origin. Pure: no buffer access, no state. The partial
//! cases inside wrapped text segments are the interesting part; emotes and
//! inline images are addressed as 2-unit atoms, and animated emotes are
//! excluded here entirely (the animated pass applies its own highlight so a
//! GIF repaint never forces a full-row redraw).

use crate::types::geometry::Rect;
use crate::types::message::{Message, Word, WordKind};
use crate::types::selection::{Selection, SelectionPoint};
use crate::ui::text_rasterizing::TextMeasure;

/// Selection-unit width of an atomic (emote/image) word: one unit for the
/// content, one for its trailing space.
const ATOMIC_UNITS: usize = 2;

/// Compute the highlight rectangles for `message` drawn as row
/// `current_line`.
///
/// `space_width` is the rendered width of one space glyph in the chat font;
/// a highlight extends over the trailing space whenever the selection
/// continues past the word, so adjacent words read as one contiguous band.
/// Out-of-range selection endpoints (stale after scrollback trim) simply
/// produce no rectangles.
pub fn compute_highlights(
    message: &Message,
    selection: &Selection,
    current_line: usize,
    space_width: i32,
    measure: &mut dyn TextMeasure,
) -> Vec<Rect> {
    let mut rects = Vec::new();
    if selection.is_empty() || !selection.contains_line(current_line) {
        return rects;
    }
    let first = selection.first;
    let last = selection.last;

    for (i, word) in message.words.iter().enumerate() {
        // Word-index bounds apply only on the selection's boundary rows; on
        // interior rows every word is selected.
        if (current_line == first.message_index && i < first.word_index)
            || (current_line == last.message_index && i > last.word_index)
        {
            continue;
        }

        match &word.kind {
            WordKind::Text {
                value,
                size,
                weight,
                split_segments,
                ..
            } => {
                for j in 0..word.split_count() {
                    // Segments before the start split on the first selected
                    // row, or past the end split on the last, carry nothing.
                    if (first.message_index == current_line
                        && first.word_index == i
                        && first.split_index > j)
                        || (last.message_index == current_line
                            && last.word_index == i
                            && last.split_index < j)
                    {
                        continue;
                    }

                    let (text, rect) = match split_segments {
                        Some(segments) => (segments[j].text.as_str(), segments[j].rect),
                        None => (value.as_str(), word.rect()),
                    };
                    let len = text.chars().count();

                    let start = if first.message_index == current_line
                        && first.word_index == i
                        && first.split_index == j
                    {
                        first.char_index.min(len)
                    } else {
                        0
                    };
                    let end = if last.message_index == current_line
                        && last.word_index == i
                        && last.split_index == j
                    {
                        last.char_index.min(len)
                    } else {
                        len
                    };

                    if start == 0 && end == len {
                        // Full coverage: measured text width plus the
                        // trailing space
                        rects.push(Rect::new(
                            rect.x,
                            rect.y,
                            measure.text_width(text, *size, *weight) + space_width,
                            rect.height,
                        ));
                    } else if start == len {
                        // Caret-at-end: only the trailing space is selected
                        rects.push(Rect::new(
                            rect.x + rect.width,
                            rect.y,
                            space_width,
                            rect.height,
                        ));
                    } else if start < end {
                        // Partial interior: offset by the measured prefix,
                        // trailing space only when the selection continues
                        // past this segment
                        let prefix = if start == 0 {
                            0
                        } else {
                            measure.text_width(char_slice(text, 0, start), *size, *weight)
                        };
                        let segment_end = SelectionPoint::new(current_line, i, j, end);
                        let trailing = if last > segment_end { space_width } else { 0 };
                        rects.push(Rect::new(
                            rect.x + prefix,
                            rect.y,
                            measure.text_width(char_slice(text, start, end), *size, *weight)
                                + trailing,
                            rect.height,
                        ));
                    }
                }
            }
            WordKind::Image(_) => {
                if let Some(rect) =
                    atomic_highlight(word, i, current_line, first, last, space_width)
                {
                    rects.push(rect);
                }
            }
            WordKind::Emote(emote) => {
                // Animated emotes are repainted on the animation clock,
                // highlight included; painting one here too would flicker.
                if !emote.animated {
                    if let Some(rect) =
                        atomic_highlight(word, i, current_line, first, last, space_width)
                    {
                        rects.push(rect);
                    }
                }
            }
        }
    }

    rects
}

/// Highlight rectangle for an atomic word addressed on the 2-unit domain:
/// unit 0 covers the bitmap, unit 1 the trailing space.
fn atomic_highlight(
    word: &Word,
    word_index: usize,
    current_line: usize,
    first: SelectionPoint,
    last: SelectionPoint,
    space_width: i32,
) -> Option<Rect> {
    let start = if first.message_index == current_line && first.word_index == word_index {
        first.char_index.min(ATOMIC_UNITS)
    } else {
        0
    };
    let end = if last.message_index == current_line && last.word_index == word_index {
        last.char_index.min(ATOMIC_UNITS)
    } else {
        ATOMIC_UNITS
    };
    if end <= start {
        return None;
    }

    let x = word.x + if start == 0 { 0 } else { word.width };
    let body = if start == 0 { word.width } else { 0 };
    let trailing = if end == ATOMIC_UNITS { space_width } else { 0 };
    let width = body + trailing;
    if width <= 0 {
        return None;
    }
    Some(Rect::new(x, word.y, width, word.height))
}

/// Slice by character counts (selection indices are characters, not bytes).
fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let from = byte_at(text, start);
    let to = byte_at(text, end);
    &text[from..to]
}

fn byte_at(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(byte, _)| byte)
}

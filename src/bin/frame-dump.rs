//! Headless demo: lay out a couple of chat messages, apply a selection,
//! render one frame into an ARGB buffer and dump it as PNG.
//!
//! Usage: frame-dump [output.png]

use std::sync::Arc;

use anyhow::Context;
use cinder_chat::ui::{self, theme, TextMeasure, TextRenderer, Theme};
use cinder_chat::{
    BitmapFrame, Emote, Message, Rect, Selection, SelectionPoint, SplitSegment, Word, WordKind,
};

const WIDTH: usize = 420;
const HEIGHT: usize = 96;
const ROW_HEIGHT: i32 = 24;

fn text_word(text: &mut TextRenderer, x: i32, y: i32, value: &str, colour: Option<u32>) -> Word {
    let width = text.text_width(value, theme::CHAT_FONT_SIZE, theme::CHAT_FONT_WEIGHT);
    Word::new(
        x,
        y,
        width,
        ROW_HEIGHT,
        WordKind::Text {
            value: value.into(),
            size: theme::CHAT_FONT_SIZE,
            weight: theme::CHAT_FONT_WEIGHT,
            colour,
            split_segments: None,
        },
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "frame.png".into());

    let dark = Theme::dark();
    let mut text = TextRenderer::new();
    let space = text.text_width(" ", theme::CHAT_FONT_SIZE, theme::CHAT_FONT_WEIGHT);

    // Row 0: name + text + static emote
    let emote = Arc::new(Emote::with_frame_loaded(
        "Kappa",
        false,
        BitmapFrame::solid(20, 20, 0xFF_27_AE_60),
    ));
    let mut x = 4;
    let mut words = Vec::new();
    for (value, colour) in [("forsen:", Some(0xFF_20_20_80)), ("hello", None), ("chat", None)] {
        let word = text_word(&mut text, x, 2, value, colour);
        x += word.width + space;
        words.push(word);
    }
    words.push(Word::new(x, 2, 20, 20, WordKind::Emote(emote)));
    let mut row0 = Message::new(words, ROW_HEIGHT);

    // Row 1: highlighted mention with a word wrapped across two lines
    let wrapped_value = "borrowedchecker";
    let head = text.text_width("borrowed", theme::CHAT_FONT_SIZE, theme::CHAT_FONT_WEIGHT);
    let tail = text.text_width("checker", theme::CHAT_FONT_SIZE, theme::CHAT_FONT_WEIGHT);
    let wrapped = Word::new(
        4,
        2,
        head.max(tail),
        2 * ROW_HEIGHT,
        WordKind::Text {
            value: wrapped_value.into(),
            size: theme::CHAT_FONT_SIZE,
            weight: theme::CHAT_FONT_WEIGHT,
            colour: None,
            split_segments: Some(vec![
                SplitSegment::new("borrowed", Rect::new(4, 2, head, ROW_HEIGHT)),
                SplitSegment::new("checker", Rect::new(4, 2 + ROW_HEIGHT, tail, ROW_HEIGHT)),
            ]),
        },
    );
    let mut row1 = Message::new(vec![wrapped], 2 * ROW_HEIGHT);
    row1.highlighted = true;

    // Drag from "hello" char 2 into the wrapped word's second segment
    let selection = Selection::new(
        SelectionPoint::new(0, 1, 0, 2),
        SelectionPoint::new(1, 0, 1, 4),
    );

    let mut pixels = vec![dark.chat_background; WIDTH * HEIGHT];
    ui::draw_message(
        &mut pixels,
        WIDTH,
        HEIGHT,
        &mut row0,
        0,
        0,
        Some(&selection),
        0,
        true,
        &dark,
        &mut text,
    );
    ui::draw_message(
        &mut pixels,
        WIDTH,
        HEIGHT,
        &mut row1,
        0,
        ROW_HEIGHT,
        Some(&selection),
        1,
        true,
        &dark,
        &mut text,
    );

    log::info!("rendered {} words across 2 rows", row0.words.len() + row1.words.len());

    let mut img = image::RgbaImage::new(WIDTH as u32, HEIGHT as u32);
    for (i, px) in pixels.iter().enumerate() {
        let x = (i % WIDTH) as u32;
        let y = (i / WIDTH) as u32;
        let [_, r, g, b] = px.to_be_bytes();
        img.put_pixel(x, y, image::Rgba([r, g, b, 0xFF]));
    }
    img.save(&output)
        .with_context(|| format!("writing {output}"))?;
    println!("wrote {output}");
    Ok(())
}

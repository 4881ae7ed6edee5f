// Chat theme colours and font constants
// All colours are u32 in packed ARGB format: 0xAARRGGBB

// Dark theme
pub const CHAT_BACKGROUND_DARK: u32 = 0xFF_19_19_19;
pub const CHAT_BACKGROUND_HIGHLIGHTED_DARK: u32 = 0xFF_4C_14_14; // Mention tint (dark red)
pub const TEXT_DARK: u32 = 0xFF_EE_EE_EE;

// Light theme
pub const CHAT_BACKGROUND_LIGHT: u32 = 0xFF_FF_FF_FF;
pub const CHAT_BACKGROUND_HIGHLIGHTED_LIGHT: u32 = 0xFF_FF_D5_D5; // Mention tint (pale red)
pub const TEXT_LIGHT: u32 = 0xFF_11_11_11;

/// Translucent orange selection overlay (alpha 127)
pub const SELECTION: u32 = 0x7F_FF_A5_00;

/// Alpha of the background-coloured overlay composited over disabled rows
pub const DISABLED_OVERLAY_ALPHA: u8 = 172;

// Chat font (used for the trailing-space measure; words carry their own
// size/weight for their own text)
pub const CHAT_FONT_SIZE: f32 = 14.0;
pub const CHAT_FONT_WEIGHT: u16 = 400;

/// Resolved theme handed to the renderer per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub chat_background: u32,
    pub chat_background_highlighted: u32,
    pub text: u32,
    pub selection: u32,
    pub is_light: bool,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            chat_background: CHAT_BACKGROUND_DARK,
            chat_background_highlighted: CHAT_BACKGROUND_HIGHLIGHTED_DARK,
            text: TEXT_DARK,
            selection: SELECTION,
            is_light: false,
        }
    }

    pub const fn light() -> Self {
        Self {
            chat_background: CHAT_BACKGROUND_LIGHT,
            chat_background_highlighted: CHAT_BACKGROUND_HIGHLIGHTED_LIGHT,
            text: TEXT_LIGHT,
            selection: SELECTION,
            is_light: true,
        }
    }

    /// Row background, accounting for the mention tint.
    pub const fn background_for(&self, highlighted: bool) -> u32 {
        if highlighted {
            self.chat_background_highlighted
        } else {
            self.chat_background
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

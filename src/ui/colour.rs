//! RGB ↔ HSL conversion and the text legibility clamp.
//!
//! User name colours arrive in arbitrary RGB; on a dark background a very
//! dark colour is unreadable, on a light background a very bright one is.
//! The clamp pins luminosity to a fixed bound (170 on the classic 0..=240
//! scale) while keeping hue and saturation.

/// Luminosity bound on the 0..=1 scale.
const LEGIBILITY_BOUND: f32 = 170.0 / 240.0;

/// A colour within this distance of the bound counts as already legible.
/// Absorbs 8-bit quantisation, so a clamped colour is stable under a second
/// application.
const BOUND_SLACK: f32 = 1.5 / 255.0;

/// Clamp `colour`'s luminosity toward legibility against the theme
/// background. Light themes cap luminosity at the bound; dark themes floor
/// it there. The alpha channel passes through untouched.
pub fn adjust_legibility(colour: u32, light_theme: bool) -> u32 {
    let (h, s, l) = rgb_to_hsl(colour);
    if light_theme {
        if l <= LEGIBILITY_BOUND + BOUND_SLACK {
            return colour;
        }
    } else if l >= LEGIBILITY_BOUND - BOUND_SLACK {
        return colour;
    }
    hsl_to_rgb(h, s, LEGIBILITY_BOUND, colour & 0xFF00_0000)
}

/// Packed ARGB to (hue 0..=1, saturation 0..=1, luminosity 0..=1).
fn rgb_to_hsl(colour: u32) -> (f32, f32, f32) {
    let r = ((colour >> 16) & 0xFF) as f32 / 255.0;
    let g = ((colour >> 8) & 0xFF) as f32 / 255.0;
    let b = (colour & 0xFF) as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l); // achromatic
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    } / 6.0;

    (h, s, l)
}

/// (hue, saturation, luminosity) back to packed RGB, ORed with `alpha`
/// (already shifted into the top byte).
fn hsl_to_rgb(h: f32, s: f32, l: f32, alpha: u32) -> u32 {
    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_channel(p, q, h + 1.0 / 3.0),
            hue_channel(p, q, h),
            hue_channel(p, q, h - 1.0 / 3.0),
        )
    };

    let r = (r * 255.0).round() as u32;
    let g = (g * 255.0).round() as u32;
    let b = (b * 255.0).round() as u32;
    alpha | (r << 16) | (g << 8) | b
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luminosity(colour: u32) -> f32 {
        rgb_to_hsl(colour).2
    }

    #[test]
    fn test_dark_colour_lifted_on_dark_theme() {
        let dim = 0xFF_20_20_40; // Well below the floor
        let adjusted = adjust_legibility(dim, false);
        assert_ne!(adjusted, dim);
        assert!(luminosity(adjusted) >= LEGIBILITY_BOUND - BOUND_SLACK);
    }

    #[test]
    fn test_bright_colour_capped_on_light_theme() {
        let bright = 0xFF_FF_FF_80;
        let adjusted = adjust_legibility(bright, true);
        assert_ne!(adjusted, bright);
        assert!(luminosity(adjusted) <= LEGIBILITY_BOUND + BOUND_SLACK);
    }

    #[test]
    fn test_legible_colour_untouched() {
        // Bright stays bright on dark, dark stays dark on light
        assert_eq!(adjust_legibility(0xFF_F0_F0_F0, false), 0xFF_F0_F0_F0);
        assert_eq!(adjust_legibility(0xFF_20_20_20, true), 0xFF_20_20_20);
    }

    #[test]
    fn test_idempotent() {
        // A second application never moves a colour again
        for &colour in &[
            0xFF_00_00_00,
            0xFF_FF_FF_FF,
            0xFF_12_34_56,
            0xFF_FF_00_00,
            0xFF_00_C0_40,
            0xFF_80_80_FF,
            0x7F_10_99_E0,
        ] {
            for light in [false, true] {
                let once = adjust_legibility(colour, light);
                assert_eq!(
                    adjust_legibility(once, light),
                    once,
                    "colour {colour:08X} light={light}"
                );
            }
        }
    }

    #[test]
    fn test_alpha_preserved() {
        let translucent = 0x40_10_10_10;
        let adjusted = adjust_legibility(translucent, false);
        assert_eq!(adjusted >> 24, 0x40);
    }

    #[test]
    fn test_hue_preserved_for_saturated_colour() {
        // Pure red lifted to the floor should stay red-hued
        let adjusted = adjust_legibility(0xFF_60_00_00, false);
        let (h, s, _) = rgb_to_hsl(adjusted);
        assert!(h < 0.02 || h > 0.98, "hue drifted: {h}");
        assert!(s > 0.5);
    }
}

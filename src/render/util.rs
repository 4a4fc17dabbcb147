//! Color token parsing for the SVG preview.

use plotters::prelude::*;

/// Neutral fallback for tokens that are not hex colors.
pub const FALLBACK_COLOR: RGBColor = RGBColor(165, 165, 165);

/// Parse `#RGB` or `#RRGGBB` (leading `#` optional). Anything else maps to the fallback gray.
pub fn token_color(token: &str) -> RGBColor {
    parse_hex(token).unwrap_or_else(|| {
        log::debug!("color token {:?} is not hex, using fallback", token);
        FALLBACK_COLOR
    })
}

fn parse_hex(token: &str) -> Option<RGBColor> {
    let hex = token.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut it = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(RGBColor(it.next()??, it.next()??, it.next()??))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(RGBColor(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

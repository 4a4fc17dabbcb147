//! Text measurement and wrapping for content labels.

use crate::timeline::ContentAlignment;

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Cut `text` so it fits `max_px`, ending in a single ellipsis when shortened.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out: String = String::new();
    for ch in text.chars() {
        out.push(ch);
        if estimate_text_width_px(&out, font_px) + estimate_text_width_px("…", font_px) > max_px {
            out.pop();
            break;
        }
    }
    let kept = out.trim_end().to_string();
    if kept.is_empty() {
        String::new()
    } else {
        kept + "…"
    }
}

/// Greedy word wrap to `max_px`, at most `max_lines` lines; the last kept line is
/// truncated when text remains.
pub fn wrap_lines(text: &str, font_px: u32, max_px: u32, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        let candidate = if cur.is_empty() {
            word.to_string()
        } else {
            format!("{cur} {word}")
        };
        if estimate_text_width_px(&candidate, font_px) <= max_px || cur.is_empty() {
            cur = candidate;
        } else {
            lines.push(std::mem::take(&mut cur));
            cur = word.to_string();
        }
    }
    if !cur.is_empty() {
        lines.push(cur);
    }

    if lines.len() > max_lines.max(1) {
        lines.truncate(max_lines.max(1));
        if let Some(last) = lines.last_mut() {
            *last = truncate_to_width(&format!("{last} …"), font_px, max_px);
        }
    }
    for line in lines.iter_mut() {
        if estimate_text_width_px(line, font_px) > max_px {
            *line = truncate_to_width(line, font_px, max_px);
        }
    }
    lines
}

/// Anchor x for a line inside a box of width `box_w` starting at `box_x`.
pub fn aligned_x(box_x: f64, box_w: f64, alignment: ContentAlignment) -> f64 {
    match alignment {
        ContentAlignment::Left => box_x,
        ContentAlignment::Right => box_x + box_w,
        ContentAlignment::Center => box_x + box_w / 2.0,
    }
}

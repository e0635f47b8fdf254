//! Shared terminal formatting.
//!
//! Format-only: every function takes core types and returns text. Colours
//! come from `console` and drop out automatically when stdout is not a tty.

pub mod form;
pub mod panels;

use console::{style, Color, StyledObject};
use pet_care_core::panels::{BadgeStyle, Tone};

pub use form::{render_consultation, render_field_errors, render_notice};
pub use panels::render_panels;

/// Terminal colour for a badge tone.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Primary => Color::Magenta,
        Tone::Secondary => Color::Green,
        Tone::Accent => Color::Yellow,
        Tone::Muted => Color::White,
    }
}

/// Render a label as a bracketed badge.
pub fn badge(label: &str, badge_style: BadgeStyle) -> StyledObject<String> {
    let styled = style(format!("[{}]", label)).fg(tone_color(badge_style.tone));
    // Higher intensity reads as a stronger badge
    if badge_style.intensity >= 40 {
        styled.bold()
    } else {
        styled
    }
}

/// Horizontal rule.
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_keeps_label() {
        let text = badge("Easy", BadgeStyle::for_difficulty("Easy")).to_string();
        assert!(console::strip_ansi_codes(&text).contains("[Easy]"));
    }

    #[test]
    fn test_neutral_is_muted() {
        assert_eq!(tone_color(BadgeStyle::NEUTRAL.tone), Color::White);
    }
}

//! Terminal rendering for the board.

use owo_colors::{OwoColorize, Stream};

pub mod board;

pub use board::render_board;

/// Single-character glyph for an icon id. Unknown ids render as `?`.
pub fn icon_glyph(icon_id: &str) -> &'static str {
    match icon_id {
        "backlog" => "◌",
        "todo" => "○",
        "in-progress" => "◑",
        "done" => "●",
        "canceled" => "⊘",
        "no-priority" => "···",
        "priority-low" => "▂",
        "priority-medium" => "▂▄",
        "priority-high" => "▂▄▆",
        "priority-urgent" => "!",
        "user-available" => "●",
        "user-away" => "○",
        _ => "?",
    }
}

/// Glyph for an icon id, coloured when stdout supports it.
pub fn format_icon_colored(icon_id: &str) -> String {
    let glyph = icon_glyph(icon_id);
    match icon_id {
        "backlog" => glyph.if_supports_color(Stream::Stdout, |g| g.dimmed()).to_string(),
        "todo" => glyph.if_supports_color(Stream::Stdout, |g| g.yellow()).to_string(),
        "in-progress" => glyph.if_supports_color(Stream::Stdout, |g| g.cyan()).to_string(),
        "done" => glyph.if_supports_color(Stream::Stdout, |g| g.green()).to_string(),
        "canceled" => glyph.if_supports_color(Stream::Stdout, |g| g.dimmed()).to_string(),
        "priority-urgent" => glyph.if_supports_color(Stream::Stdout, |g| g.red()).to_string(),
        "priority-high" => glyph.if_supports_color(Stream::Stdout, |g| g.yellow()).to_string(),
        "user-available" => glyph.if_supports_color(Stream::Stdout, |g| g.green()).to_string(),
        "user-away" => glyph.if_supports_color(Stream::Stdout, |g| g.dimmed()).to_string(),
        _ => glyph.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_glyph_known_ids() {
        assert_eq!(icon_glyph("todo"), "○");
        assert_eq!(icon_glyph("priority-urgent"), "!");
        assert_eq!(icon_glyph("user-away"), "○");
    }

    #[test]
    fn test_icon_glyph_unknown_id() {
        assert_eq!(icon_glyph("user-unknown"), "?");
        assert_eq!(icon_glyph(""), "?");
    }
}

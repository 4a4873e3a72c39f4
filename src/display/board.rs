use owo_colors::{OwoColorize, Stream};

use super::format_icon_colored;
use crate::board::{BoardViewModel, CardViewModel, ColumnViewModel};

/// Render the board as text, one column section after another.
pub fn render_board(board: &BoardViewModel) -> String {
    board
        .columns
        .iter()
        .map(format_column)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format a column header followed by its cards
pub fn format_column(column: &ColumnViewModel) -> String {
    let mut lines = vec![format!(
        "{} {} {}",
        format_icon_colored(&column.icon),
        column.title.if_supports_color(Stream::Stdout, |t| t.bold()),
        column.count.if_supports_color(Stream::Stdout, |c| c.dimmed()),
    )];

    if column.cards.is_empty() {
        lines.push(format!(
            "  {}",
            "(no tickets)".if_supports_color(Stream::Stdout, |t| t.dimmed())
        ));
    } else {
        lines.extend(column.cards.iter().map(format_card));
    }

    lines.join("\n")
}

/// Format a card on a single line: id, status, title, tags, assignee
pub fn format_card(card: &CardViewModel) -> String {
    let mut line = format!(
        "  {} ",
        card.id.if_supports_color(Stream::Stdout, |id| id.cyan())
    );

    if let Some(ref icon) = card.status_icon {
        line.push_str(&format_icon_colored(icon));
        line.push(' ');
    }
    line.push_str(&card.title);

    for tag in &card.tags {
        line.push_str(&format!(" [{tag}]"));
    }

    if let Some(ref user) = card.user {
        let presence = if user.available {
            "user-available"
        } else {
            "user-away"
        };
        line.push_str(&format!(
            " ({}{})",
            user.initials,
            format_icon_colored(presence)
        ));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::UserBadge;

    fn card(status_icon: Option<&str>, user: Option<UserBadge>) -> CardViewModel {
        CardViewModel {
            id: "CAM-1".to_string(),
            title: "Update user profile".to_string(),
            tags: vec!["Feature request".to_string()],
            priority: 4,
            status_icon: status_icon.map(str::to_string),
            user,
        }
    }

    #[test]
    fn test_format_card_plain() {
        owo_colors::set_override(false);
        let line = format_card(&card(None, None));
        assert_eq!(line, "  CAM-1 Update user profile [Feature request]");
    }

    #[test]
    fn test_format_card_with_status_and_user() {
        owo_colors::set_override(false);
        let badge = UserBadge {
            name: "Anoop Sharma".to_string(),
            initials: "AS".to_string(),
            available: false,
        };
        let line = format_card(&card(Some("todo"), Some(badge)));
        assert_eq!(line, "  CAM-1 ○ Update user profile [Feature request] (AS○)");
    }

    #[test]
    fn test_format_empty_column() {
        owo_colors::set_override(false);
        let column = ColumnViewModel {
            key: "Done".to_string(),
            title: "Done".to_string(),
            icon: "done".to_string(),
            count: 0,
            cards: vec![],
        };
        assert_eq!(format_column(&column), "● Done 0\n  (no tickets)");
    }
}

//! Submit button for the expense form

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Width that fits `label` with a space of padding inside each border
pub fn button_width(label: &str) -> u16 {
    u16::try_from(label.chars().count() + 4).unwrap_or(u16::MAX)
}

/// Render the submit button.
///
/// A blocked button (enforced constraints currently failing) keeps its focus
/// border but greys and strikes out the label.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool, blocked: bool) {
    let border_color = match (focused, blocked) {
        (true, _) => Color::Cyan,
        (false, true) => Color::Yellow,
        (false, false) => Color::DarkGray,
    };

    let mut label_style = Style::default();
    if focused {
        label_style = label_style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
    }
    if blocked {
        label_style = label_style
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let paragraph = Paragraph::new(Line::from(Span::styled(label, label_style)))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(focused: bool, blocked: bool) -> Terminal<TestBackend> {
        let label = "Add Expense";
        let width = button_width(label);
        let mut terminal = Terminal::new(TestBackend::new(width, BUTTON_HEIGHT)).unwrap();
        terminal
            .draw(|f| render_button(f, f.area(), label, focused, blocked))
            .unwrap();
        terminal
    }

    #[test]
    fn test_button_width_pads_label() {
        assert_eq!(button_width("Add Expense"), 15);
    }

    #[test]
    fn test_focused_label_is_bold_cyan() {
        let terminal = draw(true, false);
        let cell = &terminal.backend().buffer()[(2, 1)];
        assert_eq!(cell.symbol(), "A");
        assert_eq!(cell.fg, Color::Cyan);
        assert!(cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_blocked_label_is_struck_out() {
        let terminal = draw(false, true);
        let buffer = terminal.backend().buffer();
        let cell = &buffer[(2, 1)];
        assert!(cell.modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(cell.fg, Color::DarkGray);
        assert_eq!(buffer[(0, 0)].fg, Color::Yellow);
    }
}

//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render an error dialog overlay centered on the screen.
/// `queued` is the number of errors waiting behind this one.
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, queued: usize) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    let title = if queued > 0 {
        format!("Error ({queued} more)")
    } else {
        "Error".to_string()
    };

    render_dialog(
        frame,
        DialogConfig {
            title,
            accent: Color::Red,
            message: error_message,
            hint,
            max_width: 60,
        },
    );
}

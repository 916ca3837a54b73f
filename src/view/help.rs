//! Help overlay widget displaying keyboard shortcuts.

use crate::view::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use crate::view::helpers::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

/// Help content lines grouped by category.
fn build_help_content() -> Vec<Line<'static>> {
    let category_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let shortcut = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", keys), key_style),
            Span::styled(desc, desc_style),
        ])
    };

    vec![
        Line::from(vec![Span::styled("Navigation", category_style)]),
        shortcut("j/\u{2193}", "Next row"),
        shortcut("k/\u{2191}", "Previous row"),
        Line::default(),
        Line::from(vec![Span::styled("Adjust value", category_style)]),
        shortcut("l/\u{2192}", "Step up / next sauce / switch on"),
        shortcut("h/\u{2190}", "Step down / previous sauce / switch off"),
        shortcut("Space/Enter", "Toggle switch, cycle picker, step slider"),
        Line::default(),
        Line::from(vec![Span::styled("Order", category_style)]),
        shortcut("o", "Review and place the order"),
        Line::default(),
        Line::from(vec![Span::styled("Application", category_style)]),
        shortcut("?", "Toggle this help"),
        shortcut("q/Ctrl+c", "Quit"),
        Line::default(),
        Line::from(vec![Span::styled(
            " Press Esc or ? to close ",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn help_overlay_renders_shortcut_titles() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| render_help_overlay(frame))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .flat_map(|row| {
                (0..buffer.area.width)
                    .map(move |col| buffer[(col, row)].symbol().to_string())
                    .chain(std::iter::once("\n".to_string()))
            })
            .collect();
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("Navigation"));
        assert!(text.contains("Quit"));
    }
}

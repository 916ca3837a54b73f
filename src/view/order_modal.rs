//! Order confirmation modal.
//!
//! Shows the formatted order sentence and waits for a confirm or cancel.
//! There is nothing behind the confirm: the sentence is the order.

use crate::view::constants::{ORDER_POPUP_HEIGHT_PERCENT, ORDER_POPUP_WIDTH_PERCENT};
use crate::view::helpers::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the order confirmation modal with the given summary sentence.
pub fn render_order_modal(frame: &mut Frame, summary: &str) {
    let area = frame.area();
    let popup_area = centered_rect(ORDER_POPUP_WIDTH_PERCENT, ORDER_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::default(),
        Line::from(summary.to_string()),
        Line::default(),
        Line::from(vec![Span::styled(
            "Enter confirm \u{00b7} Esc cancel",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Place order ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn modal_shows_summary_and_hint() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| render_order_modal(frame, "Are you sure?"))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .flat_map(|row| {
                (0..buffer.area.width)
                    .map(move |col| buffer[(col, row)].symbol().to_string())
                    .chain(std::iter::once("\n".to_string()))
            })
            .collect();
        assert!(text.contains("Place order"));
        assert!(text.contains("Are you sure?"));
        assert!(text.contains("Enter confirm"));
    }
}

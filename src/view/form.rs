//! Sectioned form rendering.
//!
//! Walks the declarative section/row model and renders one cell per row,
//! picking the renderer from the row's cell kind. Every row rect is also
//! registered with the hit registry so mouse clicks route back to the
//! row that drew there.

use crate::model::{CellKind, Coordinate, DoughThickness, FieldValue, FormState, RowId, Sauce, SectionId};
use crate::state::{AppState, HitRegistry};
use crate::view::constants::{SECTION_GAP, SLIDER_TRACK_WIDTH, TITLE_COLUMN_WIDTH};
use crate::view::styles::FormStyles;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the whole form into `area`, registering hit areas as it goes.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: &FormStyles,
    registry: &mut HitRegistry,
) {
    let mut y = area.y;

    for (section_index, section) in SectionId::ALL.iter().enumerate() {
        if y >= area.bottom() {
            break;
        }

        let header_height = section.header_height().min(area.bottom() - y);
        let header_rect = Rect::new(area.x, y, area.width, header_height);
        let header = Paragraph::new(Line::from(Span::styled(
            section.title(),
            styles.section_header,
        )));
        frame.render_widget(header, header_rect);
        y += header_height;

        for (row_index, row) in section.rows().iter().enumerate() {
            if y >= area.bottom() {
                break;
            }

            let height = row.height().min(area.bottom() - y);
            let rect = Rect::new(area.x, y, area.width, height);
            let coordinate = Coordinate::new(section_index, row_index);
            let selected = state.cursor == coordinate;

            match row.cell_kind() {
                CellKind::Switch => render_switch_row(frame, rect, *row, &state.form, selected, styles),
                CellKind::Slider => render_slider_row(frame, rect, *row, &state.form, selected, styles),
                CellKind::Picker => render_picker_row(frame, rect, *row, &state.form, selected, styles),
            }

            registry.register(rect, coordinate);
            y += height;
        }

        y = y.saturating_add(SECTION_GAP);
    }
}

/// Pad a row title out to the shared control column.
fn pad_title(title: &str) -> String {
    let width = UnicodeWidthStr::width(title);
    let padding = TITLE_COLUMN_WIDTH.saturating_sub(width);
    format!("{}{}", title, " ".repeat(padding))
}

/// Cursor marker plus padded title, shared by all cell renderers.
fn title_spans(row: RowId, selected: bool, styles: &FormStyles) -> Vec<Span<'static>> {
    let marker = if selected { "\u{25b8} " } else { "  " };
    vec![
        Span::raw(marker),
        Span::styled(pad_title(row.title()), styles.row_title),
    ]
}

fn row_style(selected: bool, styles: &FormStyles) -> Style {
    if selected {
        styles.selected
    } else {
        Style::default()
    }
}

fn render_switch_row(
    frame: &mut Frame,
    rect: Rect,
    row: RowId,
    form: &FormState,
    selected: bool,
    styles: &FormStyles,
) {
    let on = matches!(row.current_value(form), FieldValue::Toggle(true));
    let mut spans = title_spans(row, selected, styles);
    if on {
        spans.push(Span::styled("[ on]", styles.switch_on));
    } else {
        spans.push(Span::styled("[off]", styles.switch_off));
    }
    let widget = Paragraph::new(Line::from(spans)).style(row_style(selected, styles));
    frame.render_widget(widget, rect);
}

fn render_slider_row(
    frame: &mut Frame,
    rect: Rect,
    row: RowId,
    form: &FormState,
    selected: bool,
    styles: &FormStyles,
) {
    let raw = match row.current_value(form) {
        FieldValue::Slider(raw) => raw,
        _ => 0.0,
    };

    // Marker position scaled across the track; the label re-derives the
    // bucket from the raw reading so track and label cannot disagree.
    let track_len = SLIDER_TRACK_WIDTH.max(2);
    let position = (raw.clamp(0.0, 1.0) * (track_len - 1) as f32).round() as usize;
    let label = DoughThickness::classify(raw).title().to_lowercase();

    let mut spans = title_spans(row, selected, styles);
    spans.push(Span::styled("\u{2500}".repeat(position), styles.control));
    spans.push(Span::styled("\u{25cf}", styles.control_active));
    spans.push(Span::styled(
        "\u{2500}".repeat(track_len - 1 - position),
        styles.control,
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(label, styles.row_title));

    let widget = Paragraph::new(Line::from(spans)).style(row_style(selected, styles));
    frame.render_widget(widget, rect);
}

fn render_picker_row(
    frame: &mut Frame,
    rect: Rect,
    row: RowId,
    form: &FormState,
    selected: bool,
    styles: &FormStyles,
) {
    let current = match row.current_value(form) {
        FieldValue::Sauce(sauce) => sauce,
        _ => Sauce::Tomato,
    };

    let mut lines = vec![Line::from(title_spans(row, selected, styles))];
    for sauce in Sauce::ALL {
        let (bullet, style) = if sauce == current {
            ("\u{25cf} ", styles.control_active)
        } else {
            ("\u{25cb} ", styles.control)
        };
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(bullet, style),
            Span::styled(sauce.title(), style),
        ]));
    }

    let widget = Paragraph::new(lines).style(row_style(selected, styles));
    frame.render_widget(widget, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_buffer(state: &AppState, width: u16, height: u16) -> (String, HitRegistry) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        let styles = FormStyles::with_color_config(
            crate::view::styles::ColorConfig::from_env_and_config(false),
        );
        let mut registry = HitRegistry::new();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_form(frame, area, state, &styles, &mut registry);
            })
            .expect("draw");
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for row in 0..buffer.area.height {
            for col in 0..buffer.area.width {
                text.push_str(buffer[(col, row)].symbol());
            }
            text.push('\n');
        }
        (text, registry)
    }

    #[test]
    fn form_renders_section_headers_and_rows() {
        let state = AppState::default();
        let (text, _) = render_to_buffer(&state, 60, 24);
        assert!(text.contains("Dough"));
        assert!(text.contains("Ingredients"));
        assert!(text.contains("Thickness"));
        assert!(text.contains("Cheese border"));
        assert!(text.contains("Sauce"));
        assert!(text.contains("Anchovies"));
    }

    #[test]
    fn picker_lists_every_sauce() {
        let state = AppState::default();
        let (text, _) = render_to_buffer(&state, 60, 24);
        for sauce in Sauce::ALL {
            assert!(text.contains(sauce.title()), "missing {}", sauce.title());
        }
    }

    #[test]
    fn switch_rows_show_their_state() {
        let state = AppState::default();
        let (text, _) = render_to_buffer(&state, 60, 24);
        // Bacon defaults on, olives off.
        let bacon_line = text
            .lines()
            .find(|line| line.contains("Bacon"))
            .expect("bacon row");
        assert!(bacon_line.contains("[ on]"));
        let olives_line = text
            .lines()
            .find(|line| line.contains("Olives"))
            .expect("olives row");
        assert!(olives_line.contains("[off]"));
    }

    #[test]
    fn every_row_registers_a_hit_area() {
        let state = AppState::default();
        let (_, registry) = render_to_buffer(&state, 60, 24);
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn short_viewport_registers_only_visible_rows() {
        let state = AppState::default();
        let (_, registry) = render_to_buffer(&state, 60, 3);
        assert!(registry.len() < 7);
    }

    #[test]
    fn slider_label_tracks_thickness() {
        let mut state = AppState::default();
        state.form.thickness = DoughThickness::Thick;
        let (text, _) = render_to_buffer(&state, 60, 24);
        let slider_line = text
            .lines()
            .find(|line| line.contains("Thickness"))
            .expect("slider row");
        assert!(slider_line.contains("thick"));
    }
}

//! Form dialog rendering
//!
//! Renders the centered add-record dialog with its field list and key hints.

use crate::app::AppState;
use crate::form::FieldKind;
use crate::theme::Colors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the active form as a centered dialog
pub fn render_form_dialog(f: &mut Frame, state: &AppState) {
    let Some(ref form) = state.form else {
        return;
    };
    let area = f.area();

    // Create a centered dialog box
    let dialog_width = (area.width * 3 / 4).min(70);
    let dialog_height = (area.height * 3 / 4).min(14);
    let dialog_x = (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_rect = Rect::new(dialog_x, dialog_y, dialog_width, dialog_height);

    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", form.title))
            .title_style(Style::default().fg(Colors::PRIMARY))
            .style(Style::default().bg(Colors::BG_PRIMARY)),
        dialog_rect,
    );

    // Field list
    let field_area = Rect::new(
        dialog_x + 2,
        dialog_y + 2,
        dialog_width.saturating_sub(4),
        dialog_height.saturating_sub(6),
    );

    let mut field_items = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        let style = if i == form.current_field {
            Style::default().fg(Colors::SECONDARY)
        } else {
            Style::default().fg(Colors::FG_PRIMARY)
        };

        let raw_value = form.values.get(i).map(String::as_str).unwrap_or("");

        let display_value = match &field.kind {
            FieldKind::Choice(_) if i == form.current_field => format!("< {} >", raw_value),
            FieldKind::Text | FieldKind::Number if i == form.current_field => {
                format!("{}_", raw_value)
            }
            _ => raw_value.to_string(),
        };

        field_items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("{}: ", field.label),
                Style::default().fg(Colors::PRIMARY),
            ),
            Span::styled(display_value, style),
        ])));
    }

    let field_list = List::new(field_items);
    f.render_widget(field_list, field_area);

    // Key hints
    let instruction_area = Rect::new(
        dialog_x + 2,
        dialog_y + dialog_height.saturating_sub(3),
        dialog_width.saturating_sub(4),
        1,
    );

    f.render_widget(
        Paragraph::new("Enter: Next/Save | Left/Right: Change option | Esc: Cancel")
            .style(Style::default().fg(Colors::FG_SECONDARY)),
        instruction_area,
    );
}

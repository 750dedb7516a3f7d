//! Roster screen rendering
//!
//! Read-only list screens for the three rosters. Records render with their
//! own display formatting in insertion order.

use super::header::{self, HeaderRenderer};
use crate::app::{AppMode, AppState};
use crate::theme::Colors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the roster screen for the current mode
pub fn render_roster_in_area(f: &mut Frame, state: &AppState, area: Rect, hdr: &HeaderRenderer) {
    let (title, lines) = match state.mode {
        AppMode::Vehicles => ("Vehicles", state.vehicles.display_lines()),
        AppMode::Drivers => ("Drivers", state.drivers.display_lines()),
        AppMode::Passengers => ("Passengers", state.passengers.display_lines()),
        _ => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Roster
            Constraint::Length(1), // Instructions
        ])
        .split(area);

    hdr.render_header(f, chunks[0]);
    hdr.render_title(f, chunks[1], title);

    if lines.is_empty() {
        render_empty_roster(f, chunks[2], title);
    } else {
        let items: Vec<ListItem> = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                ListItem::new(format!("  {}. {}", index + 1, line))
                    .style(Style::default().fg(Colors::FG_PRIMARY))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} registered ", lines.len()))
                    .title_style(
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Colors::PRIMARY)),
            )
            .style(Style::default().bg(Colors::BG_PRIMARY));
        f.render_widget(list, chunks[2]);
    }

    header::render_instructions(f, chunks[3], "Esc/b: Back to menu");
}

fn render_empty_roster(f: &mut Frame, area: Rect, title: &str) {
    let empty = Paragraph::new(format!("\nNo entries yet. {} appear here once added.", title))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Colors::FG_MUTED)),
        )
        .style(Style::default().fg(Colors::FG_MUTED).bg(Colors::BG_PRIMARY));
    f.render_widget(empty, area);
}

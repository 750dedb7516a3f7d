//! Header and common widget rendering
//!
//! This module contains the ASCII art header, title rendering,
//! the status line, and the navigation bar.

use crate::app::{AppMode, AppState};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Header renderer containing the ASCII art header
pub struct HeaderRenderer {
    /// ASCII art header lines
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the ASCII art header
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render a title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::PRIMARY));
        f.render_widget(title_widget, area);
    }

    /// Create the ASCII art header
    fn create_header() -> Vec<Line<'static>> {
        [
            " ████████ ██████   █████  ███    ██ ███████ ██ ████████",
            "    ██    ██   ██ ██   ██ ████   ██ ██      ██    ██   ",
            "    ██    ██████  ███████ ██ ██  ██ ███████ ██    ██   ",
            "    ██    ██   ██ ██   ██ ██  ██ ██      ██ ██    ██   ",
            "    ██    ██   ██ ██   ██ ██   ████ ███████ ██    ██   ",
        ]
        .iter()
        .map(|text| {
            Line::from(vec![Span::styled(
                *text,
                Style::default().fg(Colors::PRIMARY),
            )])
        })
        .collect()
    }
}

/// Render instructions text
pub fn render_instructions(f: &mut Frame, area: Rect, text: &str) {
    let instructions = Paragraph::new(text)
        .block(Block::default().borders(Borders::NONE))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Colors::SECONDARY));
    f.render_widget(instructions, area);
}

/// Render the status line with the latest feedback message
pub fn render_status_line(f: &mut Frame, state: &AppState, area: Rect) {
    let status = Paragraph::new(state.status_message.as_str()).style(Styles::status());
    f.render_widget(status, area);
}

/// Render the navigation bar with the key hints for the current mode
pub fn render_nav_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let hints: &[(&str, &str)] = match state.mode {
        AppMode::MainMenu => &[
            ("1-6", "Select"),
            ("0/q", "Exit"),
            ("↑↓", "Navigate"),
            ("Enter", "Confirm"),
            ("?", "Help"),
        ],
        AppMode::VehicleForm | AppMode::DriverForm | AppMode::PassengerForm => &[
            ("Enter", "Next/Save"),
            ("←→", "Change option"),
            ("↑↓", "Field"),
            ("Esc", "Cancel"),
        ],
        AppMode::Vehicles | AppMode::Drivers | AppMode::Passengers => {
            &[("Esc/b", "Back"), ("?", "Help")]
        }
        AppMode::Done => &[],
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  |  ", Style::default().fg(Colors::FG_MUTED)));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Colors::SECONDARY)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Colors::FG_SECONDARY),
        ));
    }

    let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(nav, area);
}

/// Render the help overlay on top of the current screen
pub fn render_help_overlay(f: &mut Frame) {
    let area = f.area();
    let width = (area.width * 3 / 4).min(60);
    let height = 12.min(area.height);
    let overlay = Rect::new(
        (area.width.saturating_sub(width)) / 2,
        (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let lines = vec![
        Line::from(""),
        Line::from("  1-6        Run the matching menu option"),
        Line::from("  0 / q      Exit the program"),
        Line::from("  Up/Down    Move the menu cursor"),
        Line::from("  Enter      Confirm / next form field"),
        Line::from("  Left/Right Change a fixed-option field"),
        Line::from("  Esc        Cancel a form or close a roster"),
        Line::from(""),
        Line::from("  Press any key to close this help."),
    ];

    f.render_widget(Clear, overlay);
    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Colors::PRIMARY)),
        )
        .style(Style::default().bg(Colors::BG_PRIMARY));
    f.render_widget(help, overlay);
}

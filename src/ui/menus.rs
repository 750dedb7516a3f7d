//! Menu rendering module
//!
//! Handles rendering of the main menu plus the description panel for the
//! highlighted option.

use super::header::HeaderRenderer;
use crate::app::state::MenuChoice;
use crate::app::AppState;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render main menu in specified area
pub fn render_main_menu_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Menu
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Transport System");

    // Split content into menu and description
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);

    let menu_items: Vec<ListItem> = MenuChoice::ALL
        .iter()
        .enumerate()
        .map(|(index, choice)| {
            let style = if index == state.main_menu_selection {
                Styles::selected()
            } else {
                Styles::unselected()
            };
            let prefix = if index == state.main_menu_selection {
                "▸ "
            } else {
                "  "
            };
            ListItem::new(format!("{}{}. {}", prefix, choice.digit(), choice.label()))
                .style(style)
        })
        .collect();

    let menu = List::new(menu_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Main Menu ")
                .title_style(
                    Style::default()
                        .fg(Colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Colors::PRIMARY)),
        )
        .style(Style::default().bg(Colors::BG_PRIMARY));

    f.render_widget(menu, content_chunks[0]);

    // Description panel
    let description = choice_description(state.selected_choice());
    let desc_widget = Paragraph::new(description)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Overview ")
                .title_style(
                    Style::default()
                        .fg(Colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Colors::PRIMARY)),
        )
        .style(Style::default().bg(Colors::BG_PRIMARY))
        .wrap(Wrap { trim: false });

    f.render_widget(desc_widget, content_chunks[1]);
}

/// Description text for the highlighted menu option
fn choice_description(choice: MenuChoice) -> &'static str {
    match choice {
        MenuChoice::AddVehicle => {
            "Register a vehicle.\n\n\
             Collects an id, a kind from the fixed set (Bus, Taxi, Metro, \
             Motorcycle) and a passenger capacity. A non-numeric capacity \
             is stored as 0."
        }
        MenuChoice::ListVehicles => {
            "Show every registered vehicle in the order it was added."
        }
        MenuChoice::AddDriver => {
            "Register a driver.\n\n\
             Collects a name, a salary and a license class. A non-numeric \
             salary is stored as 0."
        }
        MenuChoice::ListDrivers => {
            "Show every registered driver in the order they were added."
        }
        MenuChoice::AddPassenger => {
            "Register a passenger.\n\n\
             Collects a name, an account balance and an extra payload: \
             either a card number or an email address."
        }
        MenuChoice::ListPassengers => {
            "Show every registered passenger in the order they were added."
        }
        MenuChoice::Exit => "Leave the transport system.",
    }
}

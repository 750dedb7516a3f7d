//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Header, title, status line and navigation bar rendering
//! - `menus` - Main menu rendering
//! - `screens` - Roster list screens
//! - `dialogs` - Add-record form dialog rendering

mod dialogs;
mod header;
mod menus;
mod screens;

use crate::app::{AppMode, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for different parts of the UI.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        // Main layout with status line and nav bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let status_area = main_chunks[1];
        let nav_bar_area = main_chunks[2];

        match state.mode {
            AppMode::MainMenu => {
                menus::render_main_menu_in_area(f, state, content_area, &self.header);
            }
            AppMode::VehicleForm | AppMode::DriverForm | AppMode::PassengerForm => {
                // Menu stays visible behind the dialog
                menus::render_main_menu_in_area(f, state, content_area, &self.header);
                dialogs::render_form_dialog(f, state);
            }
            AppMode::Vehicles | AppMode::Drivers | AppMode::Passengers => {
                screens::render_roster_in_area(f, state, content_area, &self.header);
            }
            AppMode::Done => {
                f.render_widget(Paragraph::new("Goodbye."), content_area);
            }
        }

        header::render_status_line(f, state, status_area);
        header::render_nav_bar(f, state, nav_bar_area);

        if state.help_visible {
            header::render_help_overlay(f);
        }
    }
}

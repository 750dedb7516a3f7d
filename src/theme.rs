//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors and common styles so the menu, forms,
//! and roster screens stay visually consistent.

#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary dark background - used for most panels and dialogs
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color - borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback
    pub const WARNING: Color = Color::Yellow;

    /// Error/danger feedback
    pub const ERROR: Color = Color::Red;

    /// Informational accent
    pub const INFO: Color = Color::Blue;
}

/// Pre-built styles used across the UI
pub struct Styles;

impl Styles {
    /// Panel title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the currently selected menu/form entry
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for an unselected entry
    pub fn unselected() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Status bar style for notices
    pub fn status() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }
}

//! Core application logic
//!
//! Owns the event loop: draw the current mode, poll for input, and route key
//! events into state transitions until the session finishes.

pub mod state;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use crate::error::Result;
use crate::form::FormResult;
use crate::ui::UiRenderer;

pub use state::{AppMode, AppState, MenuChoice};

/// Main application controller
pub struct App {
    state: AppState,
    ui: UiRenderer,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            ui: UiRenderer::new(),
        }
    }

    /// Run the event loop until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        tracing::info!("session started");
        loop {
            terminal.draw(|f| self.ui.render(f, &self.state))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key)?;
                    }
                }
            }

            if self.state.mode == AppMode::Done {
                break;
            }
        }
        tracing::info!("session finished");
        Ok(())
    }

    /// Route a key press according to the current mode.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Help overlay swallows all input until dismissed.
        if self.state.help_visible {
            self.state.help_visible = false;
            return Ok(());
        }

        match self.state.mode {
            AppMode::MainMenu => self.handle_main_menu_key(key),
            AppMode::VehicleForm | AppMode::DriverForm | AppMode::PassengerForm => {
                self.handle_form_key(key)
            }
            AppMode::Vehicles | AppMode::Drivers | AppMode::Passengers => {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('q') => {
                        self.state.close_roster();
                    }
                    KeyCode::Char('?') => self.state.help_visible = true,
                    _ => {}
                }
                Ok(())
            }
            AppMode::Done => Ok(()),
        }
    }

    fn handle_main_menu_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Up => self.state.menu_up(),
            KeyCode::Down => self.state.menu_down(),
            KeyCode::Enter => {
                let choice = self.state.selected_choice();
                self.state.apply_choice(choice);
            }
            KeyCode::Char('?') => self.state.help_visible = true,
            KeyCode::Char('q') => self.state.apply_choice(MenuChoice::Exit),
            KeyCode::Char(c) if c.is_ascii_digit() => match MenuChoice::from_digit(c) {
                Some(choice) => self.state.apply_choice(choice),
                None => self.state.invalid_option(c),
            },
            _ => {}
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(form) = self.state.form.as_mut() else {
            // Mode says form but no form exists; recover to the menu.
            self.state.close_roster();
            return Ok(());
        };
        match form.handle_key(key) {
            FormResult::Continue => Ok(()),
            FormResult::Submit(_) => self.state.submit_form(),
            FormResult::Cancel => {
                self.state.cancel_form();
                Ok(())
            }
        }
    }
}

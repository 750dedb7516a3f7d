//! Sequential field forms
//!
//! The add flows collect their fields through one form mechanism: an ordered
//! list of fields, a cursor, and the raw string values entered so far. The
//! form owns navigation and editing only; coercion and record construction
//! stay with the controller.

use crossterm::event::{KeyCode, KeyEvent};

/// What a single form field accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Numeric text, coerced by the controller on submit
    Number,
    /// One of a fixed option list, cycled with Left/Right
    Choice(Vec<String>),
}

/// A single field definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: String,
    pub kind: FieldKind,
}

impl FormField {
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Text,
        }
    }

    pub fn number(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Number,
        }
    }

    pub fn choice(label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Choice(options),
        }
    }
}

/// Result of feeding one key event to a form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult {
    /// Keep collecting input
    Continue,
    /// Last field confirmed; the values are in field order
    Submit(Vec<String>),
    /// User backed out; nothing was constructed
    Cancel,
}

/// In-progress form state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub title: String,
    pub fields: Vec<FormField>,
    pub current_field: usize,
    pub values: Vec<String>,
}

impl FormState {
    /// Create a form; choice fields start on their first option.
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        let values = fields
            .iter()
            .map(|field| match &field.kind {
                FieldKind::Choice(options) => options.first().cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .collect();
        Self {
            title: title.into(),
            fields,
            current_field: 0,
            values,
        }
    }

    /// Feed one key event into the form.
    pub fn handle_key(&mut self, key_event: KeyEvent) -> FormResult {
        match key_event.code {
            KeyCode::Esc => return FormResult::Cancel,
            KeyCode::Enter => {
                if self.current_field + 1 < self.fields.len() {
                    self.current_field += 1;
                } else {
                    return FormResult::Submit(self.values.clone());
                }
            }
            KeyCode::Up => {
                if self.current_field > 0 {
                    self.current_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.current_field + 1 < self.fields.len() {
                    self.current_field += 1;
                }
            }
            KeyCode::Left => self.cycle_choice(-1),
            KeyCode::Right => self.cycle_choice(1),
            KeyCode::Backspace => {
                if !self.current_is_choice() {
                    self.values[self.current_field].pop();
                }
            }
            KeyCode::Char(c) => {
                if !self.current_is_choice() {
                    self.values[self.current_field].push(c);
                }
            }
            _ => {}
        }
        FormResult::Continue
    }

    fn current_is_choice(&self) -> bool {
        matches!(self.fields[self.current_field].kind, FieldKind::Choice(_))
    }

    fn cycle_choice(&mut self, step: isize) {
        if let FieldKind::Choice(options) = &self.fields[self.current_field].kind {
            if options.is_empty() {
                return;
            }
            let len = options.len() as isize;
            let current = options
                .iter()
                .position(|opt| *opt == self.values[self.current_field])
                .unwrap_or(0) as isize;
            let next = (current + step).rem_euclid(len) as usize;
            self.values[self.current_field] = options[next].clone();
        }
    }
}

//! Transit TUI - library crate
//!
//! A small terminal interface for keeping a transport roster: vehicles,
//! drivers and passengers, each in its own append-only collection.

pub mod app;
pub mod cli;
pub mod container;
pub mod error;
pub mod form;
pub mod theme;
pub mod types;
pub mod ui;

pub use app::{App, AppMode, AppState, MenuChoice};
pub use container::Container;
pub use error::{Result, TransitTuiError};
pub use types::{Driver, Passenger, PassengerExtra, PaymentOutcome, Vehicle, VehicleKind};

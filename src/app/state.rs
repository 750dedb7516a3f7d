//! Application state definitions
//!
//! Contains all state-related types for the application: the rosters, the
//! `AppMode` state machine, the menu options, and the transitions the event
//! loop drives. Everything here is pure state mutation so it stays testable
//! without a terminal.

use strum::IntoEnumIterator;

use crate::container::Container;
use crate::error::{Result, TransitTuiError};
use crate::form::{FormField, FormState};
use crate::types::{
    coerce, Driver, Passenger, PassengerExtra, PayloadKind, Vehicle, VehicleId, VehicleKind,
};

/// Application operating modes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Main menu - entry point for all functionality
    MainMenu,
    /// Collecting vehicle fields
    VehicleForm,
    /// Collecting driver fields
    DriverForm,
    /// Collecting passenger fields
    PassengerForm,
    /// Read-only vehicle roster
    Vehicles,
    /// Read-only driver roster
    Drivers,
    /// Read-only passenger roster
    Passengers,
    /// Session finished; the event loop exits
    Done,
}

/// The fixed menu. Order matches the on-screen list; each option also has a
/// digit shortcut matching its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddVehicle,
    ListVehicles,
    AddDriver,
    ListDrivers,
    AddPassenger,
    ListPassengers,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        Self::AddVehicle,
        Self::ListVehicles,
        Self::AddDriver,
        Self::ListDrivers,
        Self::AddPassenger,
        Self::ListPassengers,
        Self::Exit,
    ];

    /// Digit shortcut for this option.
    pub fn digit(&self) -> char {
        match self {
            Self::AddVehicle => '1',
            Self::ListVehicles => '2',
            Self::AddDriver => '3',
            Self::ListDrivers => '4',
            Self::AddPassenger => '5',
            Self::ListPassengers => '6',
            Self::Exit => '0',
        }
    }

    /// Map a typed digit to its option, `None` for unmapped digits.
    pub fn from_digit(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.digit() == c)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddVehicle => "Add vehicle",
            Self::ListVehicles => "List vehicles",
            Self::AddDriver => "Add driver",
            Self::ListDrivers => "List drivers",
            Self::AddPassenger => "Add passenger",
            Self::ListPassengers => "List passengers",
            Self::Exit => "Exit",
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Main menu selection state
    pub main_menu_selection: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// In-progress add form, present only in the form modes
    pub form: Option<FormState>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Vehicle roster
    pub vehicles: Container<Vehicle>,
    /// Driver roster
    pub drivers: Container<Driver>,
    /// Passenger roster
    pub passengers: Container<Passenger>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::MainMenu,
            main_menu_selection: 0,
            status_message: "Welcome to the transport system".to_string(),
            form: None,
            help_visible: false,
            vehicles: Container::new(),
            drivers: Container::new(),
            passengers: Container::new(),
        }
    }
}

impl AppState {
    /// Move the menu cursor up one entry.
    pub fn menu_up(&mut self) {
        if self.main_menu_selection > 0 {
            self.main_menu_selection -= 1;
        }
    }

    /// Move the menu cursor down one entry.
    pub fn menu_down(&mut self) {
        if self.main_menu_selection + 1 < MenuChoice::ALL.len() {
            self.main_menu_selection += 1;
        }
    }

    /// The menu option currently under the cursor.
    pub fn selected_choice(&self) -> MenuChoice {
        MenuChoice::ALL[self.main_menu_selection]
    }

    /// Apply a menu option: open the matching form or roster, or finish.
    pub fn apply_choice(&mut self, choice: MenuChoice) {
        tracing::info!(?choice, "menu selection");
        match choice {
            MenuChoice::AddVehicle => {
                self.form = Some(vehicle_form());
                self.mode = AppMode::VehicleForm;
                self.status_message = "Adding a vehicle".to_string();
            }
            MenuChoice::ListVehicles => {
                self.mode = AppMode::Vehicles;
                self.status_message = format!("{} vehicle(s)", self.vehicles.len());
            }
            MenuChoice::AddDriver => {
                self.form = Some(driver_form());
                self.mode = AppMode::DriverForm;
                self.status_message = "Adding a driver".to_string();
            }
            MenuChoice::ListDrivers => {
                self.mode = AppMode::Drivers;
                self.status_message = format!("{} driver(s)", self.drivers.len());
            }
            MenuChoice::AddPassenger => {
                self.form = Some(passenger_form());
                self.mode = AppMode::PassengerForm;
                self.status_message = "Adding a passenger".to_string();
            }
            MenuChoice::ListPassengers => {
                self.mode = AppMode::Passengers;
                self.status_message = format!("{} passenger(s)", self.passengers.len());
            }
            MenuChoice::Exit => {
                self.mode = AppMode::Done;
                self.status_message = "Leaving the transport system".to_string();
            }
        }
    }

    /// A digit with no mapped option: notice only, no state mutation.
    pub fn invalid_option(&mut self, c: char) {
        tracing::warn!(option = %c, "invalid menu option");
        self.status_message = format!("Invalid option '{}', try again", c);
    }

    /// Construct the record for the active form and append it to the
    /// matching roster. Numeric fields coerce with a silent 0 default.
    pub fn submit_form(&mut self) -> Result<()> {
        let form = self
            .form
            .take()
            .ok_or_else(|| TransitTuiError::state("form submitted with no active form"))?;
        match self.mode {
            AppMode::VehicleForm => {
                let kind = form.values[1]
                    .parse::<VehicleKind>()
                    .unwrap_or_default();
                let vehicle = Vehicle::new(
                    VehicleId::parse(&form.values[0]),
                    kind,
                    coerce::integer(&form.values[2]),
                );
                self.status_message = format!("Added: {}", vehicle.info());
                self.vehicles.add(vehicle);
            }
            AppMode::DriverForm => {
                let driver = Driver::new(
                    form.values[0].clone(),
                    coerce::non_negative(&form.values[1]),
                    form.values[2].clone(),
                );
                self.status_message = format!("Added: {}", driver);
                self.drivers.add(driver);
            }
            AppMode::PassengerForm => {
                let kind = form.values[2]
                    .parse::<PayloadKind>()
                    .unwrap_or_default();
                let passenger = Passenger::new(
                    form.values[0].clone(),
                    coerce::number(&form.values[1]),
                    PassengerExtra::from_parts(kind, form.values[3].clone()),
                );
                self.status_message = format!("Added: {}", passenger);
                self.passengers.add(passenger);
            }
            _ => {
                return Err(TransitTuiError::state(format!(
                    "form submitted in non-form mode {:?}",
                    self.mode
                )))
            }
        }
        self.mode = AppMode::MainMenu;
        Ok(())
    }

    /// Drop the active form without constructing anything.
    pub fn cancel_form(&mut self) {
        self.form = None;
        self.mode = AppMode::MainMenu;
        self.status_message = "Cancelled".to_string();
    }

    /// Return from a roster screen to the main menu.
    pub fn close_roster(&mut self) {
        self.mode = AppMode::MainMenu;
        self.status_message = "Welcome to the transport system".to_string();
    }
}

/// Fields for the add-vehicle flow. The kind options come straight from the
/// enum, so the menu can never offer a category outside the fixed set.
pub fn vehicle_form() -> FormState {
    FormState::new(
        "Add vehicle",
        vec![
            FormField::text("Id"),
            FormField::choice(
                "Kind",
                VehicleKind::iter().map(|k| k.to_string()).collect(),
            ),
            FormField::number("Capacity"),
        ],
    )
}

/// Fields for the add-driver flow.
pub fn driver_form() -> FormState {
    FormState::new(
        "Add driver",
        vec![
            FormField::text("Name"),
            FormField::number("Salary"),
            FormField::text("License"),
        ],
    )
}

/// Fields for the add-passenger flow. The payload value is free text for
/// either payload kind; the kind tag decides which variant gets built.
pub fn passenger_form() -> FormState {
    FormState::new(
        "Add passenger",
        vec![
            FormField::text("Name"),
            FormField::number("Balance"),
            FormField::choice(
                "Payload kind",
                PayloadKind::iter().map(|k| k.to_string()).collect(),
            ),
            FormField::text("Payload value"),
        ],
    )
}

//! End-to-end scenarios driven through key events
//!
//! These tests feed crossterm key events through the same state transitions
//! the event loop uses, then assert on the resulting rosters. No terminal is
//! involved.

use crossterm::event::{KeyCode, KeyEvent};
use transit_tui::app::state::vehicle_form;
use transit_tui::app::{AppMode, AppState, MenuChoice};
use transit_tui::form::FormResult;
use transit_tui::types::{PassengerExtra, PaymentOutcome};
use transit_tui::{Container, Vehicle, VehicleKind};

/// Type a string into the active form field, then press Enter.
fn type_and_enter(state: &mut AppState, text: &str) -> FormResult {
    let form = state.form.as_mut().unwrap();
    for c in text.chars() {
        form.handle_key(KeyEvent::from(KeyCode::Char(c)));
    }
    form.handle_key(KeyEvent::from(KeyCode::Enter))
}

#[test]
fn vehicles_list_in_registration_order_and_first_is_earliest() {
    let mut state = AppState::default();

    // Register BUS-123 as a bus with capacity 40.
    state.apply_choice(MenuChoice::AddVehicle);
    assert!(matches!(type_and_enter(&mut state, "BUS-123"), FormResult::Continue));
    // Kind field: leave the default Bus selection.
    state
        .form
        .as_mut()
        .unwrap()
        .handle_key(KeyEvent::from(KeyCode::Enter));
    assert!(matches!(type_and_enter(&mut state, "40"), FormResult::Submit(_)));
    state.submit_form().unwrap();
    assert_eq!(state.mode, AppMode::MainMenu);

    // Register 2024 as a taxi with capacity 4.
    state.apply_choice(MenuChoice::AddVehicle);
    type_and_enter(&mut state, "2024");
    state
        .form
        .as_mut()
        .unwrap()
        .handle_key(KeyEvent::from(KeyCode::Right));
    state
        .form
        .as_mut()
        .unwrap()
        .handle_key(KeyEvent::from(KeyCode::Enter));
    type_and_enter(&mut state, "4");
    state.submit_form().unwrap();

    let lines = state.vehicles.display_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("BUS-123"));
    assert!(lines[0].contains("Bus"));
    assert!(lines[1].contains("2024"));
    assert!(lines[1].contains("Taxi"));

    // The first registered vehicle stays first no matter how often asked.
    for _ in 0..3 {
        assert!(state.vehicles.first().unwrap().info().contains("BUS-123"));
    }
}

#[test]
fn passenger_payment_scenario() {
    let mut state = AppState::default();

    state.apply_choice(MenuChoice::AddPassenger);
    type_and_enter(&mut state, "Ana");
    type_and_enter(&mut state, "5000");
    // Payload kind: keep Card.
    state
        .form
        .as_mut()
        .unwrap()
        .handle_key(KeyEvent::from(KeyCode::Enter));
    type_and_enter(&mut state, "4111-1111");
    state.submit_form().unwrap();

    let ana = state.passengers.first_mut().unwrap();
    assert!(matches!(ana.extra, PassengerExtra::Card(_)));

    // Covered charge succeeds and deducts.
    match ana.pay(2000.0) {
        PaymentOutcome::Paid { amount, remaining } => {
            assert_eq!(amount, 2000.0);
            assert_eq!(remaining, 3000.0);
        }
        other => panic!("expected payment to succeed, got {:?}", other),
    }
    assert_eq!(ana.balance, 3000.0);

    // Over-balance charge is refused and leaves the balance alone.
    match ana.pay(4000.0) {
        PaymentOutcome::InsufficientFunds { balance } => assert_eq!(balance, 3000.0),
        other => panic!("expected payment to fail, got {:?}", other),
    }
    assert_eq!(ana.balance, 3000.0);
}

#[test]
fn escape_cancels_a_form_without_registering() {
    let mut state = AppState::default();
    state.apply_choice(MenuChoice::AddDriver);
    let form = state.form.as_mut().unwrap();
    for c in "Carlos".chars() {
        form.handle_key(KeyEvent::from(KeyCode::Char(c)));
    }
    assert!(matches!(
        form.handle_key(KeyEvent::from(KeyCode::Esc)),
        FormResult::Cancel
    ));
    state.cancel_form();
    assert!(state.drivers.is_empty());
    assert_eq!(state.mode, AppMode::MainMenu);
}

#[test]
fn roster_holds_duplicate_entries() {
    let mut roster: Container<Vehicle> = Container::new();
    roster.add(Vehicle::new("X1", VehicleKind::Metro, 200));
    roster.add(Vehicle::new("X1", VehicleKind::Metro, 200));
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.display_lines()[0], roster.display_lines()[1]);
}

#[test]
fn vehicle_form_choice_field_wraps_through_all_kinds() {
    let mut form = vehicle_form();
    // Move to the kind field.
    form.handle_key(KeyEvent::from(KeyCode::Down));
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(form.values[1].clone());
        form.handle_key(KeyEvent::from(KeyCode::Right));
    }
    assert_eq!(seen, ["Bus", "Taxi", "Metro", "Motorcycle"]);
    // A full cycle lands back on the first kind.
    assert_eq!(form.values[1], "Bus");
}

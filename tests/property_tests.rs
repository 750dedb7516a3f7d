//! Property-Based Tests for Transit TUI
//!
//! Uses proptest for testing invariants and edge cases
//!
//! These tests verify:
//! - Enum string round-trips (parse → to_string → parse)
//! - Numeric coercion never panics and defaults to 0
//! - Payment invariants
//! - Roster ordering invariants

use proptest::prelude::*;

// =============================================================================
// VehicleKind Enum Property Tests
// =============================================================================

use transit_tui::types::{coerce, PayloadKind, Passenger, PassengerExtra, PaymentOutcome, VehicleId, VehicleKind};
use transit_tui::{Container, Driver};

/// Strategy for generating valid VehicleKind variants
fn vehicle_kind_strategy() -> impl Strategy<Value = VehicleKind> {
    prop_oneof![
        Just(VehicleKind::Bus),
        Just(VehicleKind::Taxi),
        Just(VehicleKind::Metro),
        Just(VehicleKind::Motorcycle),
    ]
}

proptest! {
    /// VehicleKind: to_string → parse round-trip is identity
    #[test]
    fn vehicle_kind_roundtrip(kind in vehicle_kind_strategy()) {
        let s = kind.to_string();
        let parsed: VehicleKind = s.parse().expect("Should parse");
        prop_assert_eq!(kind, parsed);
    }

    /// PayloadKind: to_string → parse round-trip is identity
    #[test]
    fn payload_kind_roundtrip(kind in prop_oneof![Just(PayloadKind::Card), Just(PayloadKind::Email)]) {
        let s = kind.to_string();
        let parsed: PayloadKind = s.parse().expect("Should parse");
        prop_assert_eq!(kind, parsed);
    }
}

// =============================================================================
// Coercion Property Tests
// =============================================================================

proptest! {
    /// Arbitrary text never panics, and the clamped form never goes negative
    #[test]
    fn coercion_total_on_any_input(raw in ".*") {
        let _ = coerce::number(&raw);
        let _ = coerce::integer(&raw);
        prop_assert!(coerce::non_negative(&raw) >= 0.0);
    }

    /// Digit strings coerce to their numeric value
    #[test]
    fn coercion_parses_digit_strings(n in 0u32..1_000_000) {
        prop_assert_eq!(coerce::integer(&n.to_string()), n);
        prop_assert_eq!(coerce::number(&n.to_string()), n as f64);
    }

    /// Non-numeric text coerces to 0
    #[test]
    fn coercion_defaults_to_zero(raw in "[xyzXYZ !@#]*") {
        prop_assert_eq!(coerce::integer(&raw), 0);
        prop_assert_eq!(coerce::number(&raw), 0.0);
    }

    /// All-digit ids parse as numbers, anything else stays text
    #[test]
    fn numeric_ids_detected(n in 0i64..1_000_000) {
        prop_assert_eq!(VehicleId::parse(&n.to_string()), VehicleId::Number(n));
    }
}

// =============================================================================
// Payment Property Tests
// =============================================================================

proptest! {
    /// pay never drives a balance negative and only deducts on success
    #[test]
    fn payment_never_overdraws(balance in 0.0f64..1e9, amount in 0.0f64..1e9) {
        let mut p = Passenger::new(
            "prop".to_string(),
            balance,
            PassengerExtra::Card("0000".to_string()),
        );
        let before = p.balance;
        match p.pay(amount) {
            PaymentOutcome::Paid { amount: paid, remaining } => {
                prop_assert!(before >= amount);
                prop_assert_eq!(paid, amount);
                prop_assert_eq!(remaining, before - amount);
                prop_assert_eq!(p.balance, before - amount);
            }
            PaymentOutcome::InsufficientFunds { balance: reported } => {
                prop_assert!(before < amount);
                prop_assert_eq!(reported, before);
                prop_assert_eq!(p.balance, before);
            }
        }
        prop_assert!(p.balance >= 0.0);
    }

    /// A zero charge always succeeds against a non-negative balance
    #[test]
    fn zero_charge_always_paid(balance in 0.0f64..1e9) {
        let mut p = Passenger::new(
            "prop".to_string(),
            balance,
            PassengerExtra::Email("p@example.com".to_string()),
        );
        prop_assert!(p.pay(0.0).is_paid());
        prop_assert_eq!(p.balance, balance);
    }
}

// =============================================================================
// Roster Property Tests
// =============================================================================

proptest! {
    /// Insertion order is preserved and first() is stable
    #[test]
    fn roster_preserves_insertion_order(names in prop::collection::vec("[a-z]{1,8}", 1..20)) {
        let mut roster: Container<Driver> = Container::new();
        for name in &names {
            roster.add(Driver::new(name.clone(), 1000.0, "B".to_string()));
        }
        prop_assert_eq!(roster.len(), names.len());
        prop_assert_eq!(&roster.first().unwrap().name, &names[0]);
        for (stored, name) in roster.items().iter().zip(&names) {
            prop_assert_eq!(&stored.name, name);
        }
        // Reading does not reorder.
        prop_assert_eq!(&roster.first().unwrap().name, &names[0]);
    }
}

//! Domain types for the transport roster
//!
//! Stringly-typed input stops at the boundary: vehicle kinds and passenger
//! payloads are enums with exhaustive matching, and the menu layer derives
//! its choice lists from them instead of parallel string tables.

use std::fmt;
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

/// Vehicle category
///
/// Closed set; a category outside it is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString, EnumIter)]
pub enum VehicleKind {
    #[default]
    #[strum(serialize = "Bus")]
    Bus,
    #[strum(serialize = "Taxi")]
    Taxi,
    #[strum(serialize = "Metro")]
    Metro,
    #[strum(serialize = "Motorcycle")]
    Motorcycle,
}

/// Vehicle identifier - free text or a plain number, caller's choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleId {
    Text(String),
    Number(i64),
}

impl VehicleId {
    /// Build an id from raw user input: an all-digit token becomes a
    /// numeric id, anything else stays text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match i64::from_str(trimmed) {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(trimmed.to_string()),
        }
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for VehicleId {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<i64> for VehicleId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// A vehicle in the roster. Immutable once created; there is no update or
/// delete path in this system.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub kind: VehicleKind,
    pub capacity: u32,
}

impl Vehicle {
    pub fn new(id: impl Into<VehicleId>, kind: VehicleKind, capacity: u32) -> Self {
        Self {
            id: id.into(),
            kind,
            capacity,
        }
    }

    /// Formatted one-line summary. Pure read; never mutates.
    pub fn info(&self) -> String {
        format!(
            "Vehicle [{}] - Kind: {}, Capacity: {}",
            self.id, self.kind, self.capacity
        )
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

/// A driver: name, salary, license class.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub name: String,
    pub salary: f64,
    pub license: String,
}

impl Driver {
    pub fn new(name: impl Into<String>, salary: f64, license: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            salary,
            license: license.into(),
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Driver {} - Salary: ${}, License: {}",
            self.name, self.salary, self.license
        )
    }
}

/// Auxiliary passenger payload, fixed per passenger at creation.
///
/// The menu only ever offers these two shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassengerExtra {
    /// A bare card-number token
    Card(String),
    /// A contact email
    Email(String),
}

/// Labels for the payload choice the passenger form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString, EnumIter)]
pub enum PayloadKind {
    #[default]
    #[strum(serialize = "Card")]
    Card,
    #[strum(serialize = "Email")]
    Email,
}

impl PassengerExtra {
    pub fn from_parts(kind: PayloadKind, value: impl Into<String>) -> Self {
        match kind {
            PayloadKind::Card => Self::Card(value.into()),
            PayloadKind::Email => Self::Email(value.into()),
        }
    }
}

impl fmt::Display for PassengerExtra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card(number) => write!(f, "Card {}", number),
            Self::Email(address) => write!(f, "Email {}", address),
        }
    }
}

/// Outcome of a balance deduction.
///
/// Inspectable success/failure signal; its `Display` carries the
/// user-facing message for callers that only want the log line.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Paid { amount: f64, remaining: f64 },
    InsufficientFunds { balance: f64 },
}

impl PaymentOutcome {
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid { .. })
    }
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid { amount, remaining } => {
                write!(f, "paid ${}. Remaining balance: {}", amount, remaining)
            }
            Self::InsufficientFunds { balance } => {
                write!(f, "insufficient balance ({})", balance)
            }
        }
    }
}

/// A passenger. `balance` is the only mutable field in the system.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub name: String,
    pub balance: f64,
    pub extra: PassengerExtra,
}

impl Passenger {
    pub fn new(name: impl Into<String>, balance: f64, extra: PassengerExtra) -> Self {
        Self {
            name: name.into(),
            balance,
            extra,
        }
    }

    /// Attempt to deduct `amount` from the balance.
    ///
    /// Total function: an amount above the balance leaves the balance
    /// unchanged and reports `InsufficientFunds` instead of raising.
    pub fn pay(&mut self, amount: f64) -> PaymentOutcome {
        if self.balance >= amount {
            self.balance -= amount;
            let outcome = PaymentOutcome::Paid {
                amount,
                remaining: self.balance,
            };
            tracing::info!(passenger = %self.name, %outcome, "payment accepted");
            outcome
        } else {
            let outcome = PaymentOutcome::InsufficientFunds {
                balance: self.balance,
            };
            tracing::warn!(passenger = %self.name, %outcome, "payment rejected");
            outcome
        }
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Passenger {} - Balance: {}, {}",
            self.name, self.balance, self.extra
        )
    }
}

/// Numeric coercion for form input.
///
/// Failed coercion silently yields 0 instead of surfacing an error.
pub mod coerce {
    /// Coerce text to a non-negative integer; 0 on anything unparseable.
    pub fn integer(raw: &str) -> u32 {
        raw.trim().parse().unwrap_or(0)
    }

    /// Coerce text to a number; 0 on anything unparseable.
    pub fn number(raw: &str) -> f64 {
        raw.trim().parse().unwrap_or(0.0)
    }

    /// Coerce text to a non-negative number; negatives clamp to 0.
    pub fn non_negative(raw: &str) -> f64 {
        number(raw).max(0.0)
    }
}

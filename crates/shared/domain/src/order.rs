//! In-progress and completed orders.

use crate::constants::{
    CC_CVV, CC_EXPIRATION, CC_NUMBER, DELIVERY_CITY, DELIVERY_NAME, DELIVERY_STATE,
    DELIVERY_STREET, DELIVERY_ZIP,
};
use crate::taco::Taco;
use crate::validation::FieldErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const INVALID_CC_NUMBER: &str = "Not a valid credit card number";
pub const INVALID_CC_EXPIRATION: &str = "Must be formatted MM/YY";
pub const INVALID_CC_CVV: &str = "Invalid CVV";

/// The tacos accumulated by one session, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TacoOrder {
    tacos: Vec<Taco>,
}

impl TacoOrder {
    #[must_use]
    pub const fn new() -> Self {
        Self { tacos: Vec::new() }
    }

    pub fn add_taco(&mut self, taco: Taco) {
        self.tacos.push(taco);
    }

    #[must_use]
    pub fn tacos(&self) -> &[Taco] {
        &self.tacos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tacos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tacos.is_empty()
    }

    /// Finalizes the order with validated delivery and payment details.
    ///
    /// # Errors
    /// Returns the rejected fields of `details`.
    pub fn complete(self, details: OrderDetails) -> Result<CompletedOrder, FieldErrors> {
        details.validate()?;
        Ok(CompletedOrder { tacos: self.tacos, details, placed_at: Utc::now() })
    }
}

/// Delivery and payment fields submitted on the order form.
///
/// Missing form fields bind as empty strings and are reported by [`OrderDetails::validate`].
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderDetails {
    pub delivery_name: String,
    pub delivery_street: String,
    pub delivery_city: String,
    pub delivery_state: String,
    pub delivery_zip: String,
    pub cc_number: String,
    pub cc_expiration: String,
    #[serde(rename = "ccCVV")]
    pub cc_cvv: String,
}

impl OrderDetails {
    /// Checks every field and collects all violations.
    ///
    /// # Errors
    /// Returns one [`FieldErrors`] entry per rejected field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let required = [
            (DELIVERY_NAME, &self.delivery_name, "Delivery name is required"),
            (DELIVERY_STREET, &self.delivery_street, "Street is required"),
            (DELIVERY_CITY, &self.delivery_city, "City is required"),
            (DELIVERY_STATE, &self.delivery_state, "State is required"),
            (DELIVERY_ZIP, &self.delivery_zip, "Zip code is required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.reject(field, message);
            }
        }

        if !is_luhn_valid(&self.cc_number) {
            errors.reject(CC_NUMBER, INVALID_CC_NUMBER);
        }
        if !is_valid_expiration(&self.cc_expiration) {
            errors.reject(CC_EXPIRATION, INVALID_CC_EXPIRATION);
        }
        if !is_valid_cvv(&self.cc_cvv) {
            errors.reject(CC_CVV, INVALID_CC_CVV);
        }

        errors.into_result(())
    }

    /// Card number reduced to its last four digits.
    #[must_use]
    pub fn masked_cc_number(&self) -> String {
        let digits = self.cc_number.chars().count();
        let tail: String = self.cc_number.chars().skip(digits.saturating_sub(4)).collect();
        format!("{}{tail}", "*".repeat(digits.saturating_sub(4)))
    }
}

impl fmt::Debug for OrderDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderDetails")
            .field("delivery_name", &self.delivery_name)
            .field("delivery_street", &self.delivery_street)
            .field("delivery_city", &self.delivery_city)
            .field("delivery_state", &self.delivery_state)
            .field("delivery_zip", &self.delivery_zip)
            .field("cc_number", &self.masked_cc_number())
            .field("cc_expiration", &self.cc_expiration)
            .field("cc_cvv", &"***")
            .finish()
    }
}

/// A finalized order. Only ever logged; there is no persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedOrder {
    pub tacos: Vec<Taco>,
    pub details: OrderDetails,
    pub placed_at: DateTime<Utc>,
}

/// Luhn (mod 10) checksum over an all-digit string.
#[must_use]
pub fn is_luhn_valid(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = number
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// `MM/YY` with month `01`-`12` and a year between `20` and `99`.
#[must_use]
pub fn is_valid_expiration(value: &str) -> bool {
    let bytes = value.as_bytes();
    let [m1, m2, b'/', y1, y2] = bytes else {
        return false;
    };
    if ![m1, m2, y1, y2].iter().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let month = (m1 - b'0') * 10 + (m2 - b'0');
    (1..=12).contains(&month) && (b'2'..=b'9').contains(y1)
}

/// One to three digits.
#[must_use]
pub fn is_valid_cvv(value: &str) -> bool {
    (1..=3).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

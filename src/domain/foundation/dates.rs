//! Stay dates: user-entered date parsing and the checkout-after-checkin
//! invariant.
//!
//! Guests type dates as `DD.MM.YYYY`; the booking backend speaks ISO
//! `YYYY-MM-DD`. Parsing is strict — an impossible calendar date such as
//! `31.02.2025` is rejected, not coerced.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const USER_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a guest-entered `DD.MM.YYYY` date, trimming surrounding whitespace.
pub fn parse_user_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), USER_DATE_FORMAT).ok()
}

/// Renders a date back in the guest-facing format.
pub fn format_user_date(date: NaiveDate) -> String {
    date.format(USER_DATE_FORMAT).to_string()
}

/// Error constructing a stay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StayDatesError {
    #[error("checkout date must be later than checkin date")]
    CheckoutNotAfterCheckin,
}

/// A validated stay period: checkout strictly after checkin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayDates {
    date_from: NaiveDate,
    date_to: NaiveDate,
}

impl StayDates {
    /// Builds a stay period, rejecting checkout on or before checkin.
    pub fn new(date_from: NaiveDate, date_to: NaiveDate) -> Result<Self, StayDatesError> {
        if date_to <= date_from {
            return Err(StayDatesError::CheckoutNotAfterCheckin);
        }
        Ok(Self { date_from, date_to })
    }

    /// Checkin date.
    pub fn date_from(&self) -> NaiveDate {
        self.date_from
    }

    /// Checkout date.
    pub fn date_to(&self) -> NaiveDate {
        self.date_to
    }

    /// Number of nights, always at least one.
    pub fn nights(&self) -> i64 {
        (self.date_to - self.date_from).num_days()
    }
}

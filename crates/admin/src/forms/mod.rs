//! Form models and their mapping to backend DTOs.
//!
//! Forms hold raw user input as strings (checkboxes as `bool`). Converting a
//! form into a DTO validates every field at once and either yields the DTO
//! or a [`ValidationErrors`] map naming each invalid field.

mod menu_item;
mod order;
mod phone_search;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use pizzeria_core::{Price, PriceError};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

pub use menu_item::MenuItemForm;
pub use order::OrderForm;
pub use phone_search::PhoneSearchForm;

/// Why a single field is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    NotANumber,
    Negative,
    BelowMinimum { min: u32 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("is required"),
            Self::NotANumber => f.write_str("must be a number"),
            Self::Negative => f.write_str("cannot be negative"),
            Self::BelowMinimum { min } => write!(f, "must be at least {min}"),
        }
    }
}

impl From<PriceError> for FieldError {
    fn from(e: PriceError) -> Self {
        match e {
            PriceError::Empty => Self::Required,
            PriceError::NotANumber(_) => Self::NotANumber,
            PriceError::Negative => Self::Negative,
        }
    }
}

/// Field name → error, in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, error: FieldError) {
        self.errors.insert(field, error);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<FieldError> {
        self.errors.get(field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns `self` if any field is invalid.
    pub fn into_result<V>(self, value: impl FnOnce() -> V) -> Result<V, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }

    /// One line per invalid field, e.g. `price: cannot be negative`.
    #[must_use]
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(field, error)| format!("{field}: {error}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Fields the user has interacted with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Touched {
    fields: BTreeSet<&'static str>,
}

impl Touched {
    pub fn touch(&mut self, field: &'static str) {
        self.fields.insert(field);
    }

    /// Mark every listed field, as after a rejected submit.
    pub fn mark_all(&mut self, fields: &[&'static str]) {
        self.fields.extend(fields.iter().copied());
    }

    #[must_use]
    pub fn is_touched(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

/// Trimmed non-empty text, or record `Required`.
pub(crate) fn required_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.add(field, FieldError::Required);
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A non-negative price, or record why not.
pub(crate) fn required_price(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
) -> Option<Price> {
    Price::parse(raw)
        .map_err(|e| errors.add(field, e.into()))
        .ok()
}

/// A whole non-negative number; `"2"` and `"2.0"` both read as 2.
pub(crate) fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<Decimal>().ok().and_then(whole_number)
}

fn whole_number(value: Decimal) -> Option<u32> {
    if value.fract().is_zero() {
        value.to_u32()
    } else {
        None
    }
}

/// A whole number of at least `min`, or record why not.
pub(crate) fn required_count(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
    min: u32,
) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.add(field, FieldError::Required);
        return None;
    }
    let Ok(value) = trimmed.parse::<Decimal>() else {
        errors.add(field, FieldError::NotANumber);
        return None;
    };
    if value.is_sign_negative() && !value.is_zero() {
        errors.add(field, FieldError::Negative);
        return None;
    }
    match whole_number(value) {
        Some(count) if count >= min => Some(count),
        Some(_) => {
            errors.add(field, FieldError::BelowMinimum { min });
            None
        }
        None => {
            errors.add(field, FieldError::NotANumber);
            None
        }
    }
}

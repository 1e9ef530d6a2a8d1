use pizzeria_core::SearchKey;

use super::{FieldError, Touched, ValidationErrors};

/// Customer lookup by phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneSearchForm {
    pub phone: String,
    pub touched: Touched,
}

impl PhoneSearchForm {
    pub const FIELDS: &[&'static str] = &["phone"];

    /// The trimmed phone number as a lookup key.
    ///
    /// # Errors
    ///
    /// Returns `phone: Required` when the input is blank.
    pub fn to_key(&self) -> Result<SearchKey, ValidationErrors> {
        SearchKey::parse(&self.phone).map_err(|_| {
            let mut errors = ValidationErrors::new();
            errors.add("phone", FieldError::Required);
            errors
        })
    }

    pub fn mark_all_touched(&mut self) {
        self.touched.mark_all(Self::FIELDS);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

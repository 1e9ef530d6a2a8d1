//! Customer DTO.

use serde::{Deserialize, Serialize};

use crate::types::CustomerId;

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Backend key.
    #[serde(rename = "idCustomer")]
    pub id: CustomerId,
    /// Full name.
    pub name: String,
    /// Delivery address.
    #[serde(default)]
    pub address: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact phone, used by the phone lookup.
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl Customer {
    /// The phone number, if one is on file and not blank.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone_number
            .as_deref()
            .filter(|phone| !phone.trim().is_empty())
    }
}

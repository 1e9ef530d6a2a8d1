//! Customer operations (`/customers`).

use pizzeria_core::{Customer, SearchKey};
use tracing::instrument;

use super::{ApiClient, ApiError, Transport};

const RESOURCE: &str = "customers";

impl<T: Transport> ApiClient<T> {
    /// All customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list.
    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        let url = self.url(&[RESOURCE], &[])?;
        self.get_list(url).await
    }

    /// Look up a customer by phone number. An empty body means no match.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a customer.
    #[instrument(skip(self), fields(phone = %phone))]
    pub async fn customer_by_phone(&self, phone: &SearchKey) -> Result<Option<Customer>, ApiError> {
        let url = self.url(&[RESOURCE, "phone", phone.as_str()], &[])?;
        self.get_optional(url).await
    }
}

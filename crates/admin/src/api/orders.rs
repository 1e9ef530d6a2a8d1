//! Order operations (`/orders`).

use pizzeria_core::{Order, OrderId, OrderPayload};
use tracing::instrument;

use super::{ApiClient, ApiError, Transport};

const RESOURCE: &str = "orders";

impl<T: Transport> ApiClient<T> {
    /// All orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let url = self.url(&[RESOURCE], &[])?;
        self.get_list(url).await
    }

    /// Orders placed today.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list.
    #[instrument(skip(self))]
    pub async fn todays_orders(&self) -> Result<Vec<Order>, ApiError> {
        let url = self.url(&[RESOURCE, "today"], &[])?;
        self.get_list(url).await
    }

    /// Delivery and carry-out orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list.
    #[instrument(skip(self))]
    pub async fn outside_orders(&self) -> Result<Vec<Order>, ApiError> {
        let url = self.url(&[RESOURCE, "outside"], &[])?;
        self.get_list(url).await
    }

    /// Create an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, order), fields(customer = %order.customer_id))]
    pub async fn create_order(&self, order: &OrderPayload) -> Result<Option<Order>, ApiError> {
        let url = self.url(&[RESOURCE], &[])?;
        self.post(url, order).await
    }

    /// Replace an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, order), fields(customer = %order.customer_id))]
    pub async fn update_order(
        &self,
        id: OrderId,
        order: &OrderPayload,
    ) -> Result<Option<Order>, ApiError> {
        let id = id.to_string();
        let url = self.url(&[RESOURCE, &id], &[])?;
        self.put(url, order).await
    }

    /// Delete an order, returning whatever text the backend sends back.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<String, ApiError> {
        let id = id.to_string();
        let url = self.url(&[RESOURCE, &id], &[])?;
        self.delete_text(url).await
    }
}

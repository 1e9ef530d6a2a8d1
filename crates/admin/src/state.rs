//! Application state shared by the pages.

use std::sync::Arc;

use crate::api::{ApiClient, ReqwestTransport, Transport};
use crate::config::AdminConfig;
use crate::error::AdminError;
use crate::pages::{CustomersPage, MenuItemsPage, OrdersPage};

/// Configuration plus the backend client.
///
/// Cheap to clone; every page built from it shares one transport.
pub struct AppState<T = ReqwestTransport> {
    inner: Arc<AppStateInner<T>>,
}

struct AppStateInner<T> {
    config: AdminConfig,
    api: ApiClient<T>,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for AppState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Build state backed by a real HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: AdminConfig) -> Result<Self, AdminError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> AppState<T> {
    #[must_use]
    pub fn with_transport(config: AdminConfig, transport: T) -> Self {
        let api = ApiClient::new(transport, &config.api_url);
        Self {
            inner: Arc::new(AppStateInner { config, api }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient<T> {
        &self.inner.api
    }

    #[must_use]
    pub fn menu_items_page(&self) -> MenuItemsPage<T> {
        MenuItemsPage::with_page_size(self.api().clone(), self.config().page_size)
    }

    #[must_use]
    pub fn orders_page(&self) -> OrdersPage<T> {
        OrdersPage::with_selection_page_size(
            self.api().clone(),
            self.config().selection_page_size,
        )
    }

    #[must_use]
    pub fn customers_page(&self) -> CustomersPage<T> {
        CustomersPage::new(self.api().clone())
    }
}

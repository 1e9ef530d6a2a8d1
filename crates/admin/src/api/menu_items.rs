//! Menu item operations (`/pizzas`).

use pizzeria_core::{MenuItem, MenuItemId, Page, Price, PriceUpdate, SearchKey};
use tracing::instrument;

use super::{ApiClient, ApiError, Transport};

const RESOURCE: &str = "pizzas";

/// Sort order accepted by the availability listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Lowest first.
    #[default]
    Ascending,
    /// Highest first.
    Descending,
}

impl SortDirection {
    /// Query-string value expected by the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl<T: Transport> ApiClient<T> {
    /// List one page of the menu.
    ///
    /// `GET /pizzas?page=&elements=` (paginated envelope).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a page.
    #[instrument(skip(self))]
    pub async fn list_menu_items(
        &self,
        page: u32,
        elements: u32,
    ) -> Result<Page<MenuItem>, ApiError> {
        let url = self.url(
            &[RESOURCE],
            &[("page", page.to_string()), ("elements", elements.to_string())],
        )?;
        Ok(self.get_optional(url).await?.unwrap_or_default())
    }

    /// List one page of the items currently offered, sorted by a field.
    ///
    /// `GET /pizzas/available?page=&elements=&sortBy=&sortDirection=`
    /// (paginated envelope).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a page.
    #[instrument(skip(self))]
    pub async fn available_menu_items(
        &self,
        page: u32,
        elements: u32,
        sort_by: &str,
        direction: SortDirection,
    ) -> Result<Page<MenuItem>, ApiError> {
        let url = self.url(
            &[RESOURCE, "available"],
            &[
                ("page", page.to_string()),
                ("elements", elements.to_string()),
                ("sortBy", sort_by.to_string()),
                ("sortDirection", direction.as_str().to_string()),
            ],
        )?;
        Ok(self.get_optional(url).await?.unwrap_or_default())
    }

    /// Look up a menu item by exact name.
    ///
    /// `GET /pizzas/name/{name}`. An empty body means no match.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a menu item.
    #[instrument(skip(self), fields(name = %name))]
    pub async fn menu_item_by_name(&self, name: &SearchKey) -> Result<Option<MenuItem>, ApiError> {
        let url = self.url(&[RESOURCE, "name", name.as_str()], &[])?;
        self.get_optional(url).await
    }

    /// Menu items whose description mentions an ingredient.
    ///
    /// `GET /pizzas/with/{ingredient}` (bare array).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list.
    #[instrument(skip(self), fields(ingredient = %ingredient))]
    pub async fn menu_items_with(&self, ingredient: &SearchKey) -> Result<Vec<MenuItem>, ApiError> {
        let url = self.url(&[RESOURCE, "with", ingredient.as_str()], &[])?;
        self.get_list(url).await
    }

    /// Menu items whose description does not mention an ingredient.
    ///
    /// `GET /pizzas/without/{ingredient}` (bare array).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list.
    #[instrument(skip(self), fields(ingredient = %ingredient))]
    pub async fn menu_items_without(
        &self,
        ingredient: &SearchKey,
    ) -> Result<Vec<MenuItem>, ApiError> {
        let url = self.url(&[RESOURCE, "without", ingredient.as_str()], &[])?;
        self.get_list(url).await
    }

    /// Menu items priced at or below `max_price`.
    ///
    /// `GET /pizzas/cheapest/{maxPrice}` (bare array).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list.
    #[instrument(skip(self), fields(max_price = %max_price))]
    pub async fn cheapest_menu_items(&self, max_price: Price) -> Result<Vec<MenuItem>, ApiError> {
        let max_price = max_price.to_string();
        let url = self.url(&[RESOURCE, "cheapest", &max_price], &[])?;
        self.get_list(url).await
    }

    /// Create a menu item. The item's id should be `None`.
    ///
    /// `POST /pizzas`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, item), fields(name = %item.name))]
    pub async fn create_menu_item(&self, item: &MenuItem) -> Result<Option<MenuItem>, ApiError> {
        let url = self.url(&[RESOURCE], &[])?;
        self.post(url, item).await
    }

    /// Replace a menu item. The id travels in the body.
    ///
    /// `PUT /pizzas`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, item), fields(id = ?item.id, name = %item.name))]
    pub async fn update_menu_item(&self, item: &MenuItem) -> Result<Option<MenuItem>, ApiError> {
        let url = self.url(&[RESOURCE], &[])?;
        self.put(url, item).await
    }

    /// Change only the price of a menu item.
    ///
    /// `PUT /pizzas/price` with `{pizzaId, newPrice}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn update_menu_item_price(&self, update: PriceUpdate) -> Result<(), ApiError> {
        let url = self.url(&[RESOURCE, "price"], &[])?;
        self.put::<serde_json::Value, _>(url, &update).await?;
        Ok(())
    }

    /// Delete a menu item, returning the backend's plain-text confirmation.
    ///
    /// `DELETE /pizzas/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_menu_item(&self, id: MenuItemId) -> Result<String, ApiError> {
        let id = id.to_string();
        let url = self.url(&[RESOURCE, &id], &[])?;
        self.delete_text(url).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::api::testing::{BASE_URL, client};

    fn margherita() -> serde_json::Value {
        json!({
            "idPizza": 1,
            "name": "Margherita",
            "description": "Tomato, mozzarella, basil",
            "price": 9.5,
            "vegetarian": true,
            "vegan": false,
            "available": true
        })
    }

    #[tokio::test]
    async fn test_list_menu_items_reads_page_envelope() {
        let (mock, api) = client();
        mock.respond_json(
            200,
            &json!({
                "content": [margherita()],
                "totalElements": 1,
                "totalPages": 1,
                "size": 20,
                "number": 0
            }),
        );

        let page = api.list_menu_items(0, 20).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].name, "Margherita");

        let request = mock.last_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.url.as_str(),
            format!("{BASE_URL}/pizzas?page=0&elements=20")
        );
    }

    #[tokio::test]
    async fn test_available_menu_items_query() {
        let (mock, api) = client();
        mock.respond_text(200, "null");

        let page = api
            .available_menu_items(0, 20, "price", SortDirection::Ascending)
            .await
            .unwrap();
        assert!(page.content.is_empty());
        assert_eq!(
            mock.last_request().url.as_str(),
            format!("{BASE_URL}/pizzas/available?page=0&elements=20&sortBy=price&sortDirection=ASC")
        );
    }

    #[tokio::test]
    async fn test_menu_item_by_name_missing() {
        let (mock, api) = client();
        mock.respond_text(200, "");

        let key = SearchKey::parse("Hawaiian").unwrap();
        assert_eq!(api.menu_item_by_name(&key).await.unwrap(), None);
        assert_eq!(
            mock.last_request().url.as_str(),
            format!("{BASE_URL}/pizzas/name/Hawaiian")
        );
    }

    #[tokio::test]
    async fn test_ingredient_searches_use_bare_arrays() {
        let (mock, api) = client();
        mock.respond_json(200, &json!([margherita()]));
        mock.respond_json(200, &json!([]));

        let basil = SearchKey::parse("basil").unwrap();
        assert_eq!(api.menu_items_with(&basil).await.unwrap().len(), 1);
        assert!(api.menu_items_without(&basil).await.unwrap().is_empty());

        let urls: Vec<String> = mock
            .requests()
            .iter()
            .map(|r| r.url.to_string())
            .collect();
        assert_eq!(
            urls,
            vec![
                format!("{BASE_URL}/pizzas/with/basil"),
                format!("{BASE_URL}/pizzas/without/basil"),
            ]
        );
    }

    #[tokio::test]
    async fn test_cheapest_formats_price_in_path() {
        let (mock, api) = client();
        mock.respond_json(200, &json!([]));

        api.cheapest_menu_items(Price::parse("12.50").unwrap())
            .await
            .unwrap();
        assert_eq!(
            mock.last_request().url.as_str(),
            format!("{BASE_URL}/pizzas/cheapest/12.5")
        );
    }

    #[tokio::test]
    async fn test_create_posts_and_update_puts() {
        let (mock, api) = client();
        mock.respond_json(200, &margherita());
        mock.respond_text(200, "");

        let item: MenuItem = serde_json::from_value(margherita()).unwrap();
        let created = api.create_menu_item(&item).await.unwrap();
        assert_eq!(created.unwrap().id, Some(MenuItemId::new(1)));
        assert!(api.update_menu_item(&item).await.unwrap().is_none());

        let requests = mock.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[1].method, Method::PUT);
        assert_eq!(requests[1].url.as_str(), format!("{BASE_URL}/pizzas"));
        assert_eq!(requests[1].body.as_ref().unwrap()["idPizza"], 1);
    }

    #[tokio::test]
    async fn test_update_price_body() {
        let (mock, api) = client();
        mock.respond_text(200, "");

        api.update_menu_item_price(PriceUpdate {
            menu_item_id: MenuItemId::new(3),
            new_price: Price::from(14),
        })
        .await
        .unwrap();

        let request = mock.last_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.url.as_str(), format!("{BASE_URL}/pizzas/price"));
        assert_eq!(request.body.unwrap(), json!({"pizzaId": 3, "newPrice": 14.0}));
    }

    #[tokio::test]
    async fn test_delete_returns_plain_text() {
        let (mock, api) = client();
        mock.respond_text(200, "Pizza deleted");

        let text = api.delete_menu_item(MenuItemId::new(9)).await.unwrap();
        assert_eq!(text, "Pizza deleted");

        let request = mock.last_request();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.url.as_str(), format!("{BASE_URL}/pizzas/9"));
        assert!(request.body.is_none());
    }
}

use pizzeria_core::{MenuItem, MenuItemId};

use super::{Touched, ValidationErrors, required_price, required_text};

/// Create/edit form for a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub vegetarian: bool,
    pub vegan: bool,
    pub available: bool,
    pub touched: Touched,
}

impl Default for MenuItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: "0".to_string(),
            vegetarian: false,
            vegan: false,
            available: true,
            touched: Touched::default(),
        }
    }
}

impl MenuItemForm {
    /// Every field, in display order.
    pub const FIELDS: &[&'static str] = &[
        "name",
        "description",
        "price",
        "vegetarian",
        "vegan",
        "available",
    ];

    /// Populate the form from an existing item.
    #[must_use]
    pub fn from_entity(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            vegetarian: item.vegetarian,
            vegan: item.vegan,
            available: item.available,
            touched: Touched::default(),
        }
    }

    /// Validate and build the request body.
    ///
    /// `id` is `None` when creating and the edited item's id when updating.
    ///
    /// # Errors
    ///
    /// Returns every invalid field when name or description is blank or the
    /// price is missing, not a number or negative.
    pub fn to_dto(&self, id: Option<MenuItemId>) -> Result<MenuItem, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = required_text(&mut errors, "name", &self.name);
        let description = required_text(&mut errors, "description", &self.description);
        let price = required_price(&mut errors, "price", &self.price);

        match (name, description, price) {
            (Some(name), Some(description), Some(price)) if errors.is_empty() => Ok(MenuItem {
                id,
                name,
                description,
                price,
                vegetarian: self.vegetarian,
                vegan: self.vegan,
                available: self.available,
            }),
            _ => Err(errors),
        }
    }

    pub fn mark_all_touched(&mut self) {
        self.touched.mark_all(Self::FIELDS);
    }

    /// Back to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pizzeria_core::Price;

    use super::*;
    use crate::forms::FieldError;

    fn filled() -> MenuItemForm {
        MenuItemForm {
            name: "Diavola".to_string(),
            description: "Spicy salami".to_string(),
            price: "11.5".to_string(),
            ..MenuItemForm::default()
        }
    }

    #[test]
    fn test_defaults() {
        let form = MenuItemForm::default();
        assert_eq!(form.price, "0");
        assert!(form.available);
        assert!(!form.vegan);
    }

    #[test]
    fn test_to_dto_create() {
        let item = filled().to_dto(None).unwrap();
        assert_eq!(item.id, None);
        assert_eq!(item.name, "Diavola");
        assert_eq!(item.price, Price::parse("11.5").unwrap());
        assert!(item.available);
    }

    #[test]
    fn test_to_dto_collects_every_error() {
        let form = MenuItemForm {
            name: "  ".to_string(),
            price: "-3".to_string(),
            ..MenuItemForm::default()
        };
        let errors = form.to_dto(None).unwrap_err();
        assert_eq!(errors.get("name"), Some(FieldError::Required));
        assert_eq!(errors.get("description"), Some(FieldError::Required));
        assert_eq!(errors.get("price"), Some(FieldError::Negative));
    }

    #[test]
    fn test_from_entity_then_to_dto_keeps_id() {
        let original = filled().to_dto(Some(MenuItemId::new(5))).unwrap();
        let form = MenuItemForm::from_entity(&original);
        assert_eq!(form.to_dto(original.id).unwrap(), original);
    }

    #[test]
    fn test_mark_all_and_reset() {
        let mut form = filled();
        form.mark_all_touched();
        assert!(form.touched.is_touched("price"));

        form.reset();
        assert_eq!(form, MenuItemForm::default());
    }
}

//! Product records, creation input and partial updates

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use super::validation::{limit_text, require_text};
use super::{ValidationError, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};

/// Product row as stored in `products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub count: i32,
    pub price: f64,
    pub user_id: Option<i64>,
    pub category_id: Option<i64>,
}

/// Validated input for inserting a product.
///
/// `count` and `price` are already resolved to their defaults (zero) when the
/// caller omitted them.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: Option<String>,
    pub count: i32,
    pub price: f64,
    pub user_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl NewProduct {
    /// Build a product with zero count and price.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            count: 0,
            price: 0.0,
            user_id: None,
            category_id: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title, TITLE_MAX_LEN)?;
        if let Some(description) = &self.description {
            limit_text("description", description, DESCRIPTION_MAX_LEN)?;
        }
        check_count(self.count)?;
        check_price(self.price)?;
        check_reference("user_id", self.user_id)?;
        check_reference("category_id", self.category_id)
    }
}

/// Partial update for a product.
///
/// An absent key leaves the stored value alone. `description` distinguishes
/// "absent" (`None`) from "set to null" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductPatch {
    #[serde(default)]
    pub count: Option<i32>,

    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,

    #[serde(default)]
    pub price: Option<f64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.count.is_none() && self.description.is_none() && self.price.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(count) = self.count {
            check_count(count)?;
        }
        if let Some(Some(description)) = &self.description {
            limit_text("description", description, DESCRIPTION_MAX_LEN)?;
        }
        if let Some(price) = self.price {
            check_price(price)?;
        }
        Ok(())
    }

    /// Overwrite the supplied fields of `product`, leaving the rest untouched.
    pub fn apply(&self, product: &mut Product) {
        if let Some(count) = self.count {
            product.count = count;
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}

/// Marks a key as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn check_count(count: i32) -> Result<(), ValidationError> {
    if count < 0 {
        return Err(ValidationError::OutOfRange {
            field: "count",
            reason: "must not be negative",
        });
    }
    Ok(())
}

fn check_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "price",
            reason: "must be a finite, non-negative number",
        });
    }
    Ok(())
}

fn check_reference(field: &'static str, id: Option<i64>) -> Result<(), ValidationError> {
    match id {
        Some(id) if id <= 0 => Err(ValidationError::OutOfRange {
            field,
            reason: "must be a positive id",
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 7,
            title: "lamp".into(),
            description: Some("desk lamp".into()),
            count: 3,
            price: 19.5,
            user_id: Some(1),
            category_id: Some(2),
        }
    }

    #[test]
    fn new_product_defaults_to_zero() {
        let p = NewProduct::new("lamp");
        assert_eq!(p.count, 0);
        assert_eq!(p.price, 0.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let err = NewProduct::new("  ").validate().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "title" });
    }

    #[test]
    fn rejects_long_description() {
        let mut p = NewProduct::new("lamp");
        p.description = Some("x".repeat(DESCRIPTION_MAX_LEN + 1));
        assert!(matches!(
            p.validate(),
            Err(ValidationError::TooLong { field: "description", .. })
        ));
    }

    #[test]
    fn rejects_negative_price_and_count() {
        let mut p = NewProduct::new("lamp");
        p.price = -1.0;
        assert!(p.validate().is_err());

        let mut p = NewProduct::new("lamp");
        p.count = -1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_reference() {
        let mut p = NewProduct::new("lamp");
        p.category_id = Some(0);
        assert!(matches!(
            p.validate(),
            Err(ValidationError::OutOfRange { field: "category_id", .. })
        ));
    }

    #[test]
    fn patch_only_touches_supplied_fields() {
        let patch: ProductPatch = serde_json::from_str(r#"{"price": 50.0}"#).unwrap();
        let mut p = product();
        patch.apply(&mut p);

        assert_eq!(p.price, 50.0);
        assert_eq!(p, Product { price: 50.0, ..product() });
    }

    #[test]
    fn patch_null_description_clears_it() {
        let patch: ProductPatch = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(patch.description, Some(None));

        let mut p = product();
        patch.apply(&mut p);
        assert_eq!(p.description, None);
    }

    #[test]
    fn patch_absent_description_is_kept() {
        let patch: ProductPatch = serde_json::from_str(r#"{"count": 10}"#).unwrap();
        assert_eq!(patch.description, None);

        let mut p = product();
        patch.apply(&mut p);
        assert_eq!(p.count, 10);
        assert_eq!(p.description.as_deref(), Some("desk lamp"));
    }

    #[test]
    fn empty_patch() {
        let patch: ProductPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let mut p = product();
        patch.apply(&mut p);
        assert_eq!(p, product());
    }

    #[test]
    fn patch_rejects_unknown_fields() {
        let res: Result<ProductPatch, _> = serde_json::from_str(r#"{"title": "x"}"#);
        assert!(res.is_err());
    }
}

use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter, FromQueryResult};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product lifecycle status
///
/// Stored in PostgreSQL as the `product_status` enum; serialized with
/// capitalized values ("Draft", "Published", "Archived") on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "product_status")]
pub enum ProductStatus {
    /// Newly created, not yet public
    #[default]
    #[sea_orm(string_value = "Draft")]
    Draft,
    /// Visible on the public live view
    #[sea_orm(string_value = "Published")]
    Published,
    /// Retired from the catalog
    #[sea_orm(string_value = "Archived")]
    Archived,
}

/// Product entity - a catalog row with lifecycle fields
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the store
    pub product_id: i64,
    /// Product name
    pub product_name: String,
    /// Optional description
    pub product_desc: Option<String>,
    /// Lifecycle status
    pub status: ProductStatus,
    /// Soft-delete flag; deleted rows are hidden from default reads
    pub is_deleted: bool,
    /// Actor who created the row (immutable)
    pub created_by: String,
    /// Creation timestamp (immutable)
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
    /// Actor of the last mutation
    pub updated_by: Option<String>,
}

/// Public projection of a published product
#[derive(Debug, Clone, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct LiveProduct {
    pub product_id: i64,
    pub product_name: String,
    pub product_desc: Option<String>,
}

/// DTO for creating a new product
///
/// `product_name` and `created_by` default to empty strings when absent so
/// the service can answer with the required-fields message instead of a
/// deserialization error.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub product_name: String,
    pub product_desc: Option<String>,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub created_by: String,
}

/// Distinguishes a key that is absent from one explicitly set to `null`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

/// DTO for partially updating an existing product
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 255))]
    pub product_name: Option<String>,
    /// Absent keeps the current description; an explicit `null` clears it
    #[serde(default, deserialize_with = "double_option")]
    pub product_desc: Option<Option<String>>,
    pub status: Option<ProductStatus>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub updated_by: String,
}

/// Request body for soft delete and restore; carries only the actor
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ActorPayload {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub updated_by: String,
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Exact status match; no default
    pub status: Option<ProductStatus>,
    /// Include soft-deleted rows (ignored when `live` is set)
    #[serde(rename = "includeDeleted", default)]
    pub include_deleted: bool,
    /// Published-only public view; overrides the other filters
    #[serde(default)]
    pub live: bool,
}

impl Product {
    /// Apply a partial update; absent fields retain prior values.
    ///
    /// `updated_by` and `updated_at` are always written, even when no
    /// domain field changed.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(product_name) = update.product_name {
            self.product_name = product_name;
        }
        if let Some(product_desc) = update.product_desc {
            self.product_desc = product_desc;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_by = Some(update.updated_by);
        self.updated_at = Utc::now();
    }

    /// Whether this product appears on the public live view.
    pub fn is_live(&self) -> bool {
        self.status == ProductStatus::Published && !self.is_deleted
    }
}

impl From<&Product> for LiveProduct {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.product_id,
            product_name: product.product_name.clone(),
            product_desc: product.product_desc.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            product_id: 1,
            product_name: "Widget".to_string(),
            product_desc: Some("A widget".to_string()),
            status: ProductStatus::Draft,
            is_deleted: false,
            created_by: "alice".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            updated_by: None,
        }
    }

    #[test]
    fn test_status_serializes_capitalized() {
        assert_eq!(
            serde_json::to_value(ProductStatus::Draft).unwrap(),
            serde_json::json!("Draft")
        );
        assert_eq!(
            serde_json::to_value(ProductStatus::Published).unwrap(),
            serde_json::json!("Published")
        );
    }

    #[test]
    fn test_status_maps_to_db_strings() {
        use sea_orm::ActiveEnum;

        assert_eq!(ProductStatus::Published.to_value(), "Published");
        assert_eq!(
            ProductStatus::try_from_value(&"Archived".to_string()).unwrap(),
            ProductStatus::Archived
        );
    }

    #[test]
    fn test_status_defaults_to_draft() {
        let input: CreateProduct =
            serde_json::from_str(r#"{"product_name": "Widget", "created_by": "alice"}"#).unwrap();
        assert_eq!(input.status, ProductStatus::Draft);
    }

    #[test]
    fn test_filter_deserializes_camel_case_flag() {
        let filter: ProductFilter =
            serde_json::from_str(r#"{"includeDeleted": true, "status": "Archived"}"#).unwrap();
        assert!(filter.include_deleted);
        assert!(!filter.live);
        assert_eq!(filter.status, Some(ProductStatus::Archived));
    }

    #[test]
    fn test_apply_update_partial() {
        let mut product = sample_product();

        product.apply_update(UpdateProduct {
            status: Some(ProductStatus::Published),
            updated_by: "bob".to_string(),
            ..Default::default()
        });

        assert_eq!(product.product_name, "Widget");
        assert_eq!(product.product_desc.as_deref(), Some("A widget"));
        assert_eq!(product.status, ProductStatus::Published);
        assert_eq!(product.updated_by.as_deref(), Some("bob"));
    }

    #[test]
    fn test_apply_update_clears_description_on_explicit_null() {
        let mut product = sample_product();

        // Absent key keeps the description
        let keep: UpdateProduct =
            serde_json::from_str(r#"{"updated_by": "bob"}"#).unwrap();
        assert!(keep.product_desc.is_none());
        product.apply_update(keep);
        assert_eq!(product.product_desc.as_deref(), Some("A widget"));

        // Explicit null clears it
        let clear: UpdateProduct =
            serde_json::from_str(r#"{"product_desc": null, "updated_by": "bob"}"#).unwrap();
        assert_eq!(clear.product_desc, Some(None));
        product.apply_update(clear);
        assert_eq!(product.product_desc, None);
    }

    #[test]
    fn test_is_live() {
        let mut product = sample_product();
        assert!(!product.is_live());

        product.status = ProductStatus::Published;
        assert!(product.is_live());

        product.is_deleted = true;
        assert!(!product.is_live());
    }
}

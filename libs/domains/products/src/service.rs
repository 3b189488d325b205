use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, LiveProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product; name and creator are required
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        if input.product_name.trim().is_empty() || input.created_by.trim().is_empty() {
            return Err(ProductError::Validation(
                "Product name and created_by are required".to_string(),
            ));
        }

        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a product by id; soft-deleted products report not-found
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .get_active(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List products with filters
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.list(filter).await
    }

    /// List the public live view
    pub async fn list_live_products(&self) -> ProductResult<Vec<LiveProduct>> {
        self.repository.list_live().await
    }

    /// Partially update a product; `updated_by` is checked before existence
    pub async fn update_product(&self, id: i64, input: UpdateProduct) -> ProductResult<Product> {
        self.require_actor(&input.updated_by)?;

        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Soft-delete a product; already-deleted rows report not-found
    pub async fn delete_product(&self, id: i64, updated_by: String) -> ProductResult<()> {
        self.require_actor(&updated_by)?;

        let deleted = self.repository.soft_delete(id, updated_by).await?;
        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }

    /// Restore a product; succeeds for any existing row, deleted or not
    pub async fn restore_product(&self, id: i64, updated_by: String) -> ProductResult<()> {
        self.require_actor(&updated_by)?;

        let restored = self.repository.restore(id, updated_by).await?;
        if !restored {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }

    fn require_actor(&self, updated_by: &str) -> ProductResult<()> {
        if updated_by.trim().is_empty() {
            return Err(ProductError::Validation(
                "updated_by is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductStatus;
    use crate::repository::MockProductRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_product(id: i64) -> Product {
        Product {
            product_id: id,
            product_name: "Widget".to_string(),
            product_desc: None,
            status: ProductStatus::Draft,
            is_deleted: false,
            created_by: "alice".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            updated_by: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_missing_name() {
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let result = service
            .create_product(CreateProduct {
                product_name: "".to_string(),
                product_desc: None,
                status: ProductStatus::Draft,
                created_by: "alice".to_string(),
            })
            .await;

        match result {
            Err(ProductError::Validation(msg)) => {
                assert_eq!(msg, "Product name and created_by are required");
            }
            other => panic!("expected validation error, got {:?}", other.map(|p| p.product_id)),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_missing_creator() {
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let result = service
            .create_product(CreateProduct {
                product_name: "Widget".to_string(),
                product_desc: None,
                status: ProductStatus::Draft,
                created_by: "  ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_passes_valid_input_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .returning(|input| {
                Ok(Product {
                    product_id: 1,
                    product_name: input.product_name,
                    product_desc: input.product_desc,
                    status: input.status,
                    is_deleted: false,
                    created_by: input.created_by,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                    updated_by: None,
                })
            })
            .once();

        let service = ProductService::new(mock_repo);
        let product = service
            .create_product(CreateProduct {
                product_name: "Widget".to_string(),
                product_desc: None,
                status: ProductStatus::Published,
                created_by: "alice".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(product.status, ProductStatus::Published);
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_active()
            .with(eq(42))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(42).await;

        assert!(matches!(result, Err(ProductError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_update_requires_actor_before_existence_check() {
        // No repository expectations: the actor check must short-circuit
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let result = service
            .update_product(
                1,
                UpdateProduct {
                    product_name: Some("Renamed".to_string()),
                    updated_by: "".to_string(),
                    ..Default::default()
                },
            )
            .await;

        match result {
            Err(ProductError::Validation(msg)) => assert_eq!(msg, "updated_by is required"),
            other => panic!(
                "expected validation error, got {:?}",
                other.map(|p| p.product_id)
            ),
        }
    }

    #[tokio::test]
    async fn test_update_missing_row_reports_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product(
                7,
                UpdateProduct {
                    status: Some(ProductStatus::Archived),
                    updated_by: "bob".to_string(),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_update_returns_post_update_row() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().returning(|id, input| {
            let mut product = sample_product(id);
            product.apply_update(input);
            Ok(Some(product))
        });

        let service = ProductService::new(mock_repo);
        let product = service
            .update_product(
                1,
                UpdateProduct {
                    status: Some(ProductStatus::Published),
                    updated_by: "bob".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(product.status, ProductStatus::Published);
        assert_eq!(product.updated_by.as_deref(), Some("bob"));
    }

    #[tokio::test]
    async fn test_delete_requires_actor() {
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let result = service.delete_product(1, "".to_string()).await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_row_reports_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_soft_delete()
            .with(eq(3), eq("bob".to_string()))
            .returning(|_, _| Ok(false));

        let service = ProductService::new(mock_repo);
        let result = service.delete_product(3, "bob".to_string()).await;

        assert!(matches!(result, Err(ProductError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_restore_missing_row_reports_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_restore().returning(|_, _| Ok(false));

        let service = ProductService::new(mock_repo);
        let result = service.restore_product(3, "carol".to_string()).await;

        assert!(matches!(result, Err(ProductError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_restore_active_row_succeeds() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_restore()
            .with(eq(5), eq("carol".to_string()))
            .returning(|_, _| Ok(true));

        let service = ProductService::new(mock_repo);
        service.restore_product(5, "carol".to_string()).await.unwrap();
    }
}

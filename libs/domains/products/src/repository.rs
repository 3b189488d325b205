use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, LiveProduct, Product, ProductFilter, UpdateProduct};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return the stored row
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a non-deleted product by id; soft-deleted rows are invisible here
    async fn get_active(&self, id: i64) -> ProductResult<Option<Product>>;

    /// List products per the filter contract, newest first
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// List the public projection of published, non-deleted products
    async fn list_live(&self) -> ProductResult<Vec<LiveProduct>>;

    /// Partially update an existing, non-deleted product
    ///
    /// Returns `Ok(None)` when the row is missing or soft-deleted.
    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Mark a currently active product deleted; returns false when the row
    /// is missing or already deleted
    async fn soft_delete(&self, id: i64, updated_by: String) -> ProductResult<bool>;

    /// Clear the deleted flag without pre-checking it; returns false only
    /// when the row does not exist
    async fn restore(&self, id: i64, updated_by: String) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<i64, Product>>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let now = Utc::now();
        let product = Product {
            product_id: self.next_id.fetch_add(1, Ordering::SeqCst),
            product_name: input.product_name,
            product_desc: input.product_desc,
            status: input.status,
            is_deleted: false,
            created_by: input.created_by,
            created_at: now,
            updated_at: now,
            updated_by: None,
        };
        products.insert(product.product_id, product.clone());

        tracing::info!(product_id = product.product_id, "Created product");
        Ok(product)
    }

    async fn get_active(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).filter(|p| !p.is_deleted).cloned())
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products
            .values()
            .filter(|p| {
                if filter.live {
                    return p.is_live();
                }
                if let Some(status) = filter.status {
                    if p.status != status {
                        return false;
                    }
                }
                if !filter.include_deleted && p.is_deleted {
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        // Newest first; id breaks ties between same-instant rows
        result.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.product_id.cmp(&a.product_id))
        });

        Ok(result)
    }

    async fn list_live(&self) -> ProductResult<Vec<LiveProduct>> {
        let products = self.products.read().await;

        let mut live: Vec<&Product> = products.values().filter(|p| p.is_live()).collect();
        live.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.product_id.cmp(&a.product_id))
        });

        Ok(live.into_iter().map(LiveProduct::from).collect())
    }

    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        match products.get_mut(&id).filter(|p| !p.is_deleted) {
            Some(product) => {
                product.apply_update(input);
                tracing::info!(product_id = id, "Updated product");
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn soft_delete(&self, id: i64, updated_by: String) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        match products.get_mut(&id).filter(|p| !p.is_deleted) {
            Some(product) => {
                product.is_deleted = true;
                product.updated_by = Some(updated_by);
                product.updated_at = Utc::now();
                tracing::info!(product_id = id, "Soft-deleted product");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn restore(&self, id: i64, updated_by: String) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        match products.get_mut(&id) {
            Some(product) => {
                product.is_deleted = false;
                product.updated_by = Some(updated_by);
                product.updated_at = Utc::now();
                tracing::info!(product_id = id, "Restored product");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductStatus;

    fn create_input(name: &str, status: ProductStatus) -> CreateProduct {
        CreateProduct {
            product_name: name.to_string(),
            product_desc: None,
            status,
            created_by: "alice".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let product = repo
            .create(create_input("Widget", ProductStatus::Draft))
            .await
            .unwrap();
        assert_eq!(product.product_name, "Widget");
        assert!(!product.is_deleted);

        let fetched = repo.get_active(product.product_id).await.unwrap();
        assert_eq!(fetched.unwrap().product_id, product.product_id);
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let repo = InMemoryProductRepository::new();

        let first = repo
            .create(create_input("A", ProductStatus::Draft))
            .await
            .unwrap();
        let second = repo
            .create(create_input("B", ProductStatus::Draft))
            .await
            .unwrap();

        assert_ne!(first.product_id, second.product_id);
    }

    #[tokio::test]
    async fn test_soft_deleted_invisible_to_get_active() {
        let repo = InMemoryProductRepository::new();
        let product = repo
            .create(create_input("Widget", ProductStatus::Published))
            .await
            .unwrap();

        let deleted = repo
            .soft_delete(product.product_id, "bob".to_string())
            .await
            .unwrap();
        assert!(deleted);

        assert!(repo.get_active(product.product_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_soft_delete_twice_reports_not_found() {
        let repo = InMemoryProductRepository::new();
        let product = repo
            .create(create_input("Widget", ProductStatus::Draft))
            .await
            .unwrap();

        assert!(
            repo.soft_delete(product.product_id, "bob".to_string())
                .await
                .unwrap()
        );
        assert!(
            !repo
                .soft_delete(product.product_id, "bob".to_string())
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_restore_is_unconditional() {
        let repo = InMemoryProductRepository::new();
        let product = repo
            .create(create_input("Widget", ProductStatus::Draft))
            .await
            .unwrap();

        // Restore of an active row still succeeds and stamps the actor
        assert!(
            repo.restore(product.product_id, "carol".to_string())
                .await
                .unwrap()
        );
        let fetched = repo.get_active(product.product_id).await.unwrap().unwrap();
        assert_eq!(fetched.updated_by.as_deref(), Some("carol"));

        // Missing row is the only failure
        assert!(!repo.restore(9999, "carol".to_string()).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_filter_resolution() {
        let repo = InMemoryProductRepository::new();

        let draft = repo
            .create(create_input("Draft", ProductStatus::Draft))
            .await
            .unwrap();
        let published = repo
            .create(create_input("Published", ProductStatus::Published))
            .await
            .unwrap();
        let deleted = repo
            .create(create_input("Deleted", ProductStatus::Published))
            .await
            .unwrap();
        repo.soft_delete(deleted.product_id, "bob".to_string())
            .await
            .unwrap();

        // Default: non-deleted only
        let all = repo.list(ProductFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        // includeDeleted: everything
        let with_deleted = repo
            .list(ProductFilter {
                include_deleted: true,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(with_deleted.len(), 3);

        // Status filter
        let drafts = repo
            .list(ProductFilter {
                status: Some(ProductStatus::Draft),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].product_id, draft.product_id);

        // live overrides status and includeDeleted
        let live = repo
            .list(ProductFilter {
                live: true,
                status: Some(ProductStatus::Draft),
                include_deleted: true,
            })
            .await
            .unwrap();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].product_id, published.product_id);
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let repo = InMemoryProductRepository::new();

        for name in ["first", "second", "third"] {
            repo.create(create_input(name, ProductStatus::Draft))
                .await
                .unwrap();
        }

        let listed = repo.list(ProductFilter::default()).await.unwrap();
        assert_eq!(listed[0].product_name, "third");
        assert_eq!(listed[2].product_name, "first");
    }

    #[tokio::test]
    async fn test_list_live_projection() {
        let repo = InMemoryProductRepository::new();

        repo.create(CreateProduct {
            product_name: "Public".to_string(),
            product_desc: Some("visible".to_string()),
            status: ProductStatus::Published,
            created_by: "alice".to_string(),
        })
        .await
        .unwrap();
        repo.create(create_input("Hidden", ProductStatus::Draft))
            .await
            .unwrap();

        let live = repo.list_live().await.unwrap();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].product_name, "Public");
        assert_eq!(live[0].product_desc.as_deref(), Some("visible"));
    }

    #[tokio::test]
    async fn test_update_skips_deleted_rows() {
        let repo = InMemoryProductRepository::new();
        let product = repo
            .create(create_input("Widget", ProductStatus::Draft))
            .await
            .unwrap();
        repo.soft_delete(product.product_id, "bob".to_string())
            .await
            .unwrap();

        let result = repo
            .update(
                product.product_id,
                UpdateProduct {
                    product_name: Some("Renamed".to_string()),
                    updated_by: "bob".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }
}

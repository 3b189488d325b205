use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    entity,
    error::ProductResult,
    models::{CreateProduct, LiveProduct, Product, ProductFilter, ProductStatus, UpdateProduct},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository backed by SeaORM
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();

        // insert() re-fetches the row, picking up the assigned id and
        // database-side defaults
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.product_id, "Created product");
        Ok(model.into())
    }

    async fn get_active(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id)
            .filter(entity::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let mut query = entity::Entity::find();

        if filter.live {
            // Published-only public view; other filters do not apply
            query = query
                .filter(entity::Column::Status.eq(ProductStatus::Published))
                .filter(entity::Column::IsDeleted.eq(false));
        } else {
            if let Some(status) = filter.status {
                query = query.filter(entity::Column::Status.eq(status));
            }

            if !filter.include_deleted {
                query = query.filter(entity::Column::IsDeleted.eq(false));
            }
        }

        let models = query
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn list_live(&self) -> ProductResult<Vec<LiveProduct>> {
        let live = entity::Entity::find()
            .select_only()
            .column(entity::Column::ProductId)
            .column(entity::Column::ProductName)
            .column(entity::Column::ProductDesc)
            .filter(entity::Column::Status.eq(ProductStatus::Published))
            .filter(entity::Column::IsDeleted.eq(false))
            .order_by_desc(entity::Column::CreatedAt)
            .into_model::<LiveProduct>()
            .all(&self.db)
            .await?;

        Ok(live)
    }

    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<Option<Product>> {
        // Soft-deleted rows are not updatable
        let Some(model) = entity::Entity::find_by_id(id)
            .filter(entity::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = model.into_active_model();

        if let Some(product_name) = input.product_name {
            active.product_name = Set(product_name);
        }
        if let Some(product_desc) = input.product_desc {
            active.product_desc = Set(product_desc);
        }
        if let Some(status) = input.status {
            active.status = Set(status);
        }
        active.updated_by = Set(Some(input.updated_by));
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(updated.into()))
    }

    async fn soft_delete(&self, id: i64, updated_by: String) -> ProductResult<bool> {
        // Single conditional UPDATE; the is_deleted predicate makes a
        // repeat delete report not-found
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::IsDeleted, Expr::value(true))
            .col_expr(entity::Column::UpdatedBy, Expr::value(updated_by))
            .col_expr(entity::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(entity::Column::ProductId.eq(id))
            .filter(entity::Column::IsDeleted.eq(false))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Soft-deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn restore(&self, id: i64, updated_by: String) -> ProductResult<bool> {
        // No deleted-state predicate: restoring an active row succeeds and
        // still stamps the actor
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::IsDeleted, Expr::value(false))
            .col_expr(entity::Column::UpdatedBy, Expr::value(updated_by))
            .col_expr(entity::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(entity::Column::ProductId.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Restored product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

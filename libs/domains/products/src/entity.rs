use crate::models::ProductStatus;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub product_id: i64,
    pub product_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub product_desc: Option<String>,
    pub status: ProductStatus,
    pub is_deleted: bool,
    pub created_by: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Product
impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            product_id: model.product_id,
            product_name: model.product_name,
            product_desc: model.product_desc,
            status: model.status,
            is_deleted: model.is_deleted,
            created_by: model.created_by,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            updated_by: model.updated_by,
        }
    }
}

// Conversion from domain CreateProduct to Sea-ORM ActiveModel
impl From<crate::models::CreateProduct> for ActiveModel {
    fn from(input: crate::models::CreateProduct) -> Self {
        let now = chrono::Utc::now();

        ActiveModel {
            product_id: NotSet,
            product_name: Set(input.product_name),
            product_desc: Set(input.product_desc),
            status: Set(input.status),
            is_deleted: Set(false),
            created_by: Set(input.created_by),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            updated_by: Set(None),
        }
    }
}

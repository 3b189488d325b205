use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create product_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(ProductStatus::Enum)
                    .values([
                        ProductStatus::Draft,
                        ProductStatus::Published,
                        ProductStatus::Archived,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create products table
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::ProductId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string(Products::ProductName))
                    .col(text_null(Products::ProductDesc))
                    .col(
                        ColumnDef::new(Products::Status)
                            .enumeration(
                                ProductStatus::Enum,
                                [
                                    ProductStatus::Draft,
                                    ProductStatus::Published,
                                    ProductStatus::Archived,
                                ],
                            )
                            .not_null()
                            .default("Draft"),
                    )
                    .col(boolean(Products::IsDeleted).default(false))
                    .col(string(Products::CreatedBy))
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Products::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(string_null(Products::UpdatedBy))
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_products_status")
                    .table(Products::Table)
                    .col(Products::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_is_deleted")
                    .table(Products::Table)
                    .col(Products::IsDeleted)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_created_at")
                    .table(Products::Table)
                    .col(Products::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(ProductStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    ProductId,
    ProductName,
    ProductDesc,
    Status,
    IsDeleted,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    UpdatedBy,
}

#[derive(DeriveIden)]
enum ProductStatus {
    #[sea_orm(iden = "product_status")]
    Enum,
    #[sea_orm(iden = "Draft")]
    Draft,
    #[sea_orm(iden = "Published")]
    Published,
    #[sea_orm(iden = "Archived")]
    Archived,
}

//! Create pledge table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pledge::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Pledge::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Pledge::Amount).big_integer().not_null())
                    .col(
                        ColumnDef::new(Pledge::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Pledge::ModifiedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Pledge::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pledge::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Pledge {
    #[iden = "pledges"]
    Table,
    Id,
    Amount,
    CreatedAt,
    ModifiedAt,
    DeletedAt,
}

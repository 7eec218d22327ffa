//! Create notification table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notification::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notification::UserId).uuid())
                    .col(ColumnDef::new(Notification::EmailAddr).string())
                    .col(ColumnDef::new(Notification::OrganizationId).uuid())
                    .col(ColumnDef::new(Notification::Type).string().not_null())
                    .col(ColumnDef::new(Notification::PledgeId).uuid())
                    .col(
                        ColumnDef::new(Notification::Payload)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Notification::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Notification::ModifiedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Notification::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notifications_pledge")
                            .from(Notification::Table, Notification::PledgeId)
                            .to(Pledge::Table, Pledge::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: user_id (for listing a user's notifications)
        manager
            .create_index(
                Index::create()
                    .name("idx_notifications_user_id")
                    .table(Notification::Table)
                    .col(Notification::UserId)
                    .to_owned(),
            )
            .await?;

        // Index: organization_id (for listing an organization's notifications)
        manager
            .create_index(
                Index::create()
                    .name("idx_notifications_organization_id")
                    .table(Notification::Table)
                    .col(Notification::OrganizationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Notification {
    #[iden = "notifications"]
    Table,
    Id,
    UserId,
    EmailAddr,
    OrganizationId,
    Type,
    PledgeId,
    Payload,
    CreatedAt,
    ModifiedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Pledge {
    #[iden = "pledges"]
    Table,
    Id,
}

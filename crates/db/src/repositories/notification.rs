//! Notification repository.

use std::sync::Arc;

use chrono::Utc;
use openpledge_common::AppResult;
use sea_orm::entity::prelude::{DateTimeWithTimeZone, Json, Uuid};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use serde::Deserialize;
use validator::Validate;

use super::map_db_err;
use crate::entities::{Notification, notification};

/// Fields accepted when inserting a notification.
///
/// The inherited record columns (`id`, `created_at`, `modified_at`,
/// `deleted_at`) are never supplied by callers.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NotificationCreate {
    /// Recipient user.
    pub user_id: Option<Uuid>,
    /// Denormalized recipient email address.
    pub email_addr: Option<String>,
    /// Recipient organization.
    pub organization_id: Option<Uuid>,
    /// Notification kind discriminator; required.
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub notification_type: String,
    /// Referenced pledge; must exist when set.
    pub pledge_id: Option<Uuid>,
    /// Payload for the notification kind; defaults to the empty mapping.
    pub payload: Option<Json>,
}

/// Notification repository for database operations.
#[derive(Clone)]
pub struct NotificationRepository {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepository {
    /// Create a new notification repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert a new notification.
    ///
    /// The id and creation timestamp are generated at insert. A
    /// `pledge_id` referencing no pledge surfaces as a foreign key
    /// violation from the storage engine.
    pub async fn create(&self, new: NotificationCreate) -> AppResult<notification::Model> {
        new.validate()?;

        let active_model = notification::ActiveModel {
            user_id: Set(new.user_id),
            email_addr: Set(new.email_addr),
            organization_id: Set(new.organization_id),
            notification_type: Set(new.notification_type),
            pledge_id: Set(new.pledge_id),
            payload: Set(new
                .payload
                .unwrap_or_else(|| Json::Object(serde_json::Map::new()))),
            ..Default::default()
        };

        active_model
            .insert(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Find a notification by ID.
    ///
    /// Soft-deleted rows are still returned; callers decide whether a
    /// deleted record counts as found.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<notification::Model>> {
        Notification::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// List non-deleted notifications addressed to a user.
    ///
    /// Rows with a NULL `user_id` never match. Ordering follows the
    /// storage engine default.
    pub async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<notification::Model>> {
        Notification::find()
            .filter(notification::Column::UserId.eq(user_id))
            .filter(notification::Column::DeletedAt.is_null())
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// List non-deleted notifications addressed to an organization.
    pub async fn list_by_organization(
        &self,
        organization_id: Uuid,
    ) -> AppResult<Vec<notification::Model>> {
        Notification::find()
            .filter(notification::Column::OrganizationId.eq(organization_id))
            .filter(notification::Column::DeletedAt.is_null())
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Soft-delete a notification.
    ///
    /// Idempotent: an already-deleted record keeps its original
    /// deletion timestamp, and an unknown id is a no-op success.
    pub async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        if let Some(found) = self.find_by_id(id).await? {
            if found.deleted_at.is_some() {
                return Ok(());
            }

            let now: DateTimeWithTimeZone = Utc::now().into();
            let mut active: notification::ActiveModel = found.into();
            active.deleted_at = Set(Some(now));
            active
                .update(self.db.as_ref())
                .await
                .map_err(map_db_err)?;
        }
        Ok(())
    }
}

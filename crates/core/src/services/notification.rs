//! Notification service.

use openpledge_common::{AppError, AppResult};
use openpledge_db::{
    entities::{Record, notification},
    repositories::{NotificationCreate, NotificationRepository},
};
use sea_orm::entity::prelude::{Json, Uuid};
use serde_json::json;
use tracing::debug;

/// Typed notification payloads.
///
/// Each variant maps to one `type` discriminator and fixes the shape of
/// the JSON payload stored on the record, so producers get compile-time
/// safety at the boundary where notifications are created. [`Custom`]
/// keeps the storage layer's no-enumeration contract available for
/// kinds this crate does not know about.
///
/// [`Custom`]: NotificationPayload::Custom
#[derive(Debug, Clone)]
pub enum NotificationPayload {
    /// A payment against a pledge has been received.
    PaymentReceived {
        /// Amount received, in minor currency units.
        amount: i64,
    },
    /// A new pledge has been created.
    PledgeCreated {
        /// Pledged amount, in minor currency units.
        pledge_amount: i64,
    },
    /// A pledge is awaiting completion.
    PledgePending {
        /// Pledged amount, in minor currency units.
        pledge_amount: i64,
    },
    /// An arbitrary notification kind with a free-form payload.
    Custom {
        /// The `type` discriminator to store.
        notification_type: String,
        /// The payload to store, unvalidated.
        payload: Json,
    },
}

impl NotificationPayload {
    /// The `type` discriminator stored on the record.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::PaymentReceived { .. } => "payment_received",
            Self::PledgeCreated { .. } => "pledge_created",
            Self::PledgePending { .. } => "pledge_pending",
            Self::Custom {
                notification_type, ..
            } => notification_type,
        }
    }

    /// Split into the stored `type` discriminator and JSON payload.
    #[must_use]
    pub fn into_parts(self) -> (String, Json) {
        match self {
            Self::PaymentReceived { amount } => (
                "payment_received".to_string(),
                json!({ "amount": amount }),
            ),
            Self::PledgeCreated { pledge_amount } => (
                "pledge_created".to_string(),
                json!({ "pledge_amount": pledge_amount }),
            ),
            Self::PledgePending { pledge_amount } => (
                "pledge_pending".to_string(),
                json!({ "pledge_amount": pledge_amount }),
            ),
            Self::Custom {
                notification_type,
                payload,
            } => (notification_type, payload),
        }
    }
}

/// Notification service for business logic.
#[derive(Clone)]
pub struct NotificationService {
    notification_repo: NotificationRepository,
}

impl NotificationService {
    /// Create a new notification service.
    #[must_use]
    pub const fn new(notification_repo: NotificationRepository) -> Self {
        Self { notification_repo }
    }

    /// Create a notification addressed to a user.
    pub async fn notify_user(
        &self,
        user_id: Uuid,
        email_addr: Option<String>,
        pledge_id: Option<Uuid>,
        payload: NotificationPayload,
    ) -> AppResult<notification::Model> {
        let (notification_type, payload) = payload.into_parts();
        debug!(%user_id, %notification_type, "Creating user notification");

        self.notification_repo
            .create(NotificationCreate {
                user_id: Some(user_id),
                email_addr,
                organization_id: None,
                notification_type,
                pledge_id,
                payload: Some(payload),
            })
            .await
    }

    /// Create a notification addressed to an organization.
    pub async fn notify_organization(
        &self,
        organization_id: Uuid,
        pledge_id: Option<Uuid>,
        payload: NotificationPayload,
    ) -> AppResult<notification::Model> {
        let (notification_type, payload) = payload.into_parts();
        debug!(%organization_id, %notification_type, "Creating organization notification");

        self.notification_repo
            .create(NotificationCreate {
                user_id: None,
                email_addr: None,
                organization_id: Some(organization_id),
                notification_type,
                pledge_id,
                payload: Some(payload),
            })
            .await
    }

    /// Fetch a notification by id.
    ///
    /// Soft-deleted notifications are reported as not found.
    pub async fn get(&self, id: Uuid) -> AppResult<notification::Model> {
        self.notification_repo
            .find_by_id(id)
            .await?
            .filter(|found| !found.is_deleted())
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// List notifications addressed to a user.
    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<notification::Model>> {
        self.notification_repo.list_by_user(user_id).await
    }

    /// List notifications addressed to an organization.
    pub async fn list_for_organization(
        &self,
        organization_id: Uuid,
    ) -> AppResult<Vec<notification::Model>> {
        self.notification_repo
            .list_by_organization(organization_id)
            .await
    }

    /// Soft-delete a notification. Idempotent.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.notification_repo.soft_delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn create_test_notification(
        notification_type: &str,
        user_id: Option<Uuid>,
        payload: Json,
    ) -> notification::Model {
        notification::Model {
            id: Uuid::new_v4(),
            user_id,
            email_addr: None,
            organization_id: None,
            notification_type: notification_type.to_string(),
            pledge_id: None,
            payload,
            created_at: Utc::now().into(),
            modified_at: None,
            deleted_at: None,
        }
    }

    fn service_with(results: Vec<Vec<notification::Model>>) -> NotificationService {
        let mut db = MockDatabase::new(DatabaseBackend::Postgres);
        for result in results {
            db = db.append_query_results([result]);
        }
        let db = Arc::new(
            db.append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection(),
        );

        NotificationService::new(NotificationRepository::new(db))
    }

    #[test]
    fn test_payment_received_payload_shape() {
        let (notification_type, payload) =
            NotificationPayload::PaymentReceived { amount: 500 }.into_parts();

        assert_eq!(notification_type, "payment_received");
        assert_eq!(payload, json!({ "amount": 500 }));
    }

    #[test]
    fn test_pledge_payload_shapes() {
        let (created_type, created) =
            NotificationPayload::PledgeCreated { pledge_amount: 2500 }.into_parts();
        let (pending_type, pending) =
            NotificationPayload::PledgePending { pledge_amount: 2500 }.into_parts();

        assert_eq!(created_type, "pledge_created");
        assert_eq!(created, json!({ "pledge_amount": 2500 }));
        assert_eq!(pending_type, "pledge_pending");
        assert_eq!(pending, json!({ "pledge_amount": 2500 }));
    }

    #[test]
    fn test_custom_payload_passes_through() {
        let payload = NotificationPayload::Custom {
            notification_type: "issue_closed".to_string(),
            payload: json!({ "issue": 42 }),
        };

        assert_eq!(payload.type_name(), "issue_closed");

        let (notification_type, stored) = payload.into_parts();
        assert_eq!(notification_type, "issue_closed");
        assert_eq!(stored, json!({ "issue": 42 }));
    }

    #[tokio::test]
    async fn test_notify_user_stores_typed_payload() {
        let user_id = Uuid::new_v4();
        let expected = create_test_notification(
            "payment_received",
            Some(user_id),
            json!({ "amount": 500 }),
        );

        let service = service_with(vec![vec![expected]]);
        let created = service
            .notify_user(
                user_id,
                None,
                None,
                NotificationPayload::PaymentReceived { amount: 500 },
            )
            .await
            .unwrap();

        assert_eq!(created.notification_type, "payment_received");
        assert_eq!(created.payload, json!({ "amount": 500 }));
        assert_eq!(created.user_id, Some(user_id));
    }

    #[tokio::test]
    async fn test_get_found() {
        let expected =
            create_test_notification("pledge_created", Some(Uuid::new_v4()), json!({}));

        let service = service_with(vec![vec![expected.clone()]]);
        let found = service.get(expected.id).await.unwrap();

        assert_eq!(found.id, expected.id);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let service = service_with(vec![vec![]]);
        let result = service.get(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_soft_deleted_is_not_found() {
        let mut deleted =
            create_test_notification("payment_received", Some(Uuid::new_v4()), json!({}));
        deleted.deleted_at = Some(Utc::now().into());

        let service = service_with(vec![vec![deleted.clone()]]);
        let result = service.get(deleted.id).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_for_user_passes_through() {
        let user_id = Uuid::new_v4();
        let expected =
            create_test_notification("payment_received", Some(user_id), json!({}));

        let service = service_with(vec![vec![expected]]);
        let results = service.list_for_user(user_id).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].user_id, Some(user_id));
    }
}

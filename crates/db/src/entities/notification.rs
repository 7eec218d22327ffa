//! Notification entity.

use chrono::Utc;
use openpledge_common::IdGenerator;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use super::record::Record;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Recipient user (indexed)
    #[sea_orm(nullable)]
    pub user_id: Option<Uuid>,

    /// Denormalized recipient email address
    #[sea_orm(nullable)]
    pub email_addr: Option<String>,

    /// Recipient organization, alternative to `user_id` (indexed)
    #[sea_orm(nullable)]
    pub organization_id: Option<Uuid>,

    /// Discriminator identifying the notification kind.
    ///
    /// No enumeration is enforced at this layer; the payload shape
    /// depends on this value.
    #[sea_orm(column_name = "type")]
    pub notification_type: String,

    /// Referenced pledge, when the notification concerns one
    #[sea_orm(nullable)]
    pub pledge_id: Option<Uuid>,

    /// Free-form data associated with `notification_type`, never NULL
    #[sea_orm(column_type = "JsonBinary")]
    pub payload: Json,

    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(nullable)]
    pub modified_at: Option<DateTimeWithTimeZone>,

    /// Soft-delete marker
    #[sea_orm(nullable)]
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pledge::Entity",
        from = "Column::PledgeId",
        to = "super::pledge::Column::Id",
        on_delete = "Restrict"
    )]
    Pledge,
}

impl Related<super::pledge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pledge.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Stamps the generated id and the base-record timestamps.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now: DateTimeWithTimeZone = Utc::now().into();
        if insert {
            if self.id.is_not_set() {
                self.id = Set(IdGenerator::new().generate());
            }
            self.created_at = Set(now);
        } else {
            self.modified_at = Set(Some(now));
        }
        Ok(self)
    }
}

impl Record for Model {
    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTimeWithTimeZone {
        self.created_at
    }

    fn modified_at(&self) -> Option<DateTimeWithTimeZone> {
        self.modified_at
    }

    fn deleted_at(&self) -> Option<DateTimeWithTimeZone> {
        self.deleted_at
    }
}

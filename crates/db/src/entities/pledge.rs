//! Pledge entity.
//!
//! Pledges are owned by another subsystem; the entity exists here as
//! the target of the `notifications.pledge_id` foreign key.

use chrono::Utc;
use openpledge_common::IdGenerator;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use super::record::Record;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pledges")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Pledged amount in minor currency units
    pub amount: i64,

    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(nullable)]
    pub modified_at: Option<DateTimeWithTimeZone>,

    /// Soft-delete marker
    #[sea_orm(nullable)]
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
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

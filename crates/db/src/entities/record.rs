//! Shared base-record contract.

use sea_orm::entity::prelude::{DateTimeWithTimeZone, Uuid};

/// Common contract for persisted records.
///
/// Every entity carries an immutable generated `id`, creation and
/// modification timestamps, and a soft-delete marker. Deletion is
/// logical: `deleted_at` is set instead of removing the row.
pub trait Record {
    /// Unique identifier, immutable once assigned.
    fn id(&self) -> Uuid;

    /// When the record was inserted.
    fn created_at(&self) -> DateTimeWithTimeZone;

    /// When the record was last updated, if ever.
    fn modified_at(&self) -> Option<DateTimeWithTimeZone>;

    /// When the record was soft-deleted, if ever.
    fn deleted_at(&self) -> Option<DateTimeWithTimeZone>;

    /// Whether the record has been soft-deleted.
    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }
}

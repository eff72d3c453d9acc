//! Storage-facing traits shared by all records.

use serde::{Serialize, de::DeserializeOwned};

/// Name of the ownership field carried by every user-owned record.
pub const OWNER_FIELD: &str = "userID";

/// A record type persisted in a named collection.
///
/// The identifier is assigned by the store. It is merged into the
/// materialized record but never written into the stored body.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// Collection holding records of this type.
    const COLLECTION: &'static str;

    /// Store-assigned identifier, empty until the record is persisted.
    fn id(&self) -> &str;

    /// Sets the store-assigned identifier.
    fn set_id(&mut self, id: String);
}

/// A record that belongs to a single user.
pub trait OwnedRecord: Record {
    /// The owning user's identifier.
    fn owner_id(&self) -> &str;
}

/// Entity identifiers are opaque strings, stable for the entity's lifetime.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

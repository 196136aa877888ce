/// Project identifiers are opaque strings assigned by the gateway at
/// creation and never reused.
pub type ProjectId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// All database primary keys are SQLite INTEGER PRIMARY KEY (rowid) values.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

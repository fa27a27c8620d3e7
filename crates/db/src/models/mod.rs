//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! DTOs carry an explicit `validate()` step enforcing domain rules the
//! typed deserializer cannot express (non-empty title, length caps).

pub mod task;

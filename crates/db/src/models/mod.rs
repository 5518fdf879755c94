//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for client payloads
//! - Where inserts need server-assigned fields, a validated `New*` struct
//!   built by the handler layer
//!
//! External JSON field names are camelCase -- the wire format the catalog
//! clients already speak.

pub mod movie;
pub mod review;
pub mod user;
pub mod watchlist;

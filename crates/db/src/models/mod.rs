//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row, the DTO used for inserts, and any response shape built from it.

pub mod card;
pub mod card_progress;
pub mod deck;
pub mod user;

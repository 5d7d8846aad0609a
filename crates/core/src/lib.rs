//! Domain logic for the Cardify flashcard service.
//!
//! Nothing in this crate touches the database or HTTP layer; repositories
//! and handlers feed it plain values and persist what it returns.

pub mod clock;
pub mod deck;
pub mod error;
pub mod generation;
pub mod progress;
pub mod stats;
pub mod study;
pub mod types;

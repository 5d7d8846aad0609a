//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod card_progress_repo;
pub mod card_repo;
pub mod deck_repo;
pub mod user_repo;

pub use card_progress_repo::CardProgressRepo;
pub use card_repo::CardRepo;
pub use deck_repo::DeckRepo;
pub use user_repo::UserRepo;

//! Storage layer - entity trait and in-memory repositories

pub mod entities;
pub mod memory;
pub mod traits;

pub use entities::{recommended_specialization, COLLECTIONS};
pub use memory::Repository;
pub use traits::Entity;

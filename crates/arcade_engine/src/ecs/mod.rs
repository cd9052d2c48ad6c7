//! Entity store
//!
//! A single arena owns every entity. Logical collections ("everything that
//! updates", "all projectiles", ...) are tag queries over that arena rather
//! than separate containers, so removing an entity removes it everywhere.

pub mod entity;
pub mod world;

pub use entity::EntityId;
pub use world::World;

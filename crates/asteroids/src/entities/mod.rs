//! Game entities
//!
//! Every entity is a circle at heart ([`CircleShape`]); the [`Body`] trait
//! gives them a common update/draw/collide surface and [`GameObject`] is the
//! closed set of variants the world stores.

mod asteroid;
mod field;
mod object;
mod player;
mod shape;
mod shot;

pub use asteroid::Asteroid;
pub use field::{AsteroidField, Edge};
pub use object::{GameObject, ObjectTags, UpdateContext};
pub use player::Player;
pub use shape::{Body, CircleShape};
pub use shot::Shot;

//! Typed rows and their public JSON projections.

pub mod catalog;
pub mod favourite;
pub mod user;

pub use catalog::{Character, Planet, PublicCharacter, PublicPlanet, PublicVehicle, Vehicle};
pub use favourite::{Favourite, FavouriteTarget, PublicFavourite};
pub use user::{NewUser, PublicUser, User};

//! Catalog entity rows (planets, vehicles, characters) and their public
//! projections. Every descriptive attribute is optional at the storage
//! level; the creator back-reference (`user_id`) is internal and never
//! serialized.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: Option<String>,
    pub orbital_period: Option<f64>,
    pub population: Option<f64>,
    pub climate: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PublicPlanet {
    pub id: i64,
    pub name: Option<String>,
    pub orbital_period: Option<f64>,
    pub population: Option<f64>,
    pub climate: Option<String>,
}

impl Planet {
    pub fn public(&self) -> PublicPlanet {
        PublicPlanet {
            id: self.id,
            name: self.name.clone(),
            orbital_period: self.orbital_period,
            population: self.population,
            climate: self.climate.clone(),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub name: Option<String>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<f64>,
    pub length: Option<f64>,
    pub crew: Option<f64>,
    pub passengers: Option<f64>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PublicVehicle {
    pub id: i64,
    pub name: Option<String>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<f64>,
    pub length: Option<f64>,
    pub crew: Option<f64>,
    pub passengers: Option<f64>,
}

impl Vehicle {
    pub fn public(&self) -> PublicVehicle {
        PublicVehicle {
            id: self.id,
            name: self.name.clone(),
            model: self.model.clone(),
            vehicle_class: self.vehicle_class.clone(),
            manufacturer: self.manufacturer.clone(),
            cost_in_credits: self.cost_in_credits,
            length: self.length,
            crew: self.crew,
            passengers: self.passengers,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Character {
    pub id: i64,
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub films: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<f64>,
    pub homeworld: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PublicCharacter {
    pub id: i64,
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub films: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<f64>,
    pub homeworld: Option<String>,
}

impl Character {
    pub fn public(&self) -> PublicCharacter {
        PublicCharacter {
            id: self.id,
            name: self.name.clone(),
            birth_year: self.birth_year.clone(),
            eye_color: self.eye_color.clone(),
            films: self.films.clone(),
            gender: self.gender.clone(),
            hair_color: self.hair_color.clone(),
            height: self.height,
            homeworld: self.homeworld.clone(),
        }
    }
}

//! Favourite rows: a user's link to exactly one catalog entity.
//!
//! The discriminator and its matching foreign key travel together as one
//! tagged value, so a favourite pointing at two entities (or at none) is
//! unrepresentable in the type system. The storage CHECK constraint holds
//! the same invariant for rows written out of band.

use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavouriteTarget {
    Planet(i64),
    Vehicle(i64),
    Character(i64),
}

impl FavouriteTarget {
    /// Discriminator value stored in the `kind` column.
    pub fn kind(&self) -> &'static str {
        match self {
            FavouriteTarget::Planet(_) => "planets",
            FavouriteTarget::Vehicle(_) => "vehicles",
            FavouriteTarget::Character(_) => "characters",
        }
    }

    /// Name of the foreign-key column this target fills.
    pub fn fk_column(&self) -> &'static str {
        match self {
            FavouriteTarget::Planet(_) => "planet_id",
            FavouriteTarget::Vehicle(_) => "vehicle_id",
            FavouriteTarget::Character(_) => "character_id",
        }
    }

    /// Id of the referenced catalog entity.
    pub fn id(&self) -> i64 {
        match self {
            FavouriteTarget::Planet(id)
            | FavouriteTarget::Vehicle(id)
            | FavouriteTarget::Character(id) => *id,
        }
    }

    fn from_columns(
        kind: &str,
        planet_id: Option<i64>,
        vehicle_id: Option<i64>,
        character_id: Option<i64>,
    ) -> Result<Self, String> {
        match (kind, planet_id, vehicle_id, character_id) {
            ("planets", Some(id), None, None) => Ok(FavouriteTarget::Planet(id)),
            ("vehicles", None, Some(id), None) => Ok(FavouriteTarget::Vehicle(id)),
            ("characters", None, None, Some(id)) => Ok(FavouriteTarget::Character(id)),
            _ => Err(format!(
                "favourite row violates kind/foreign-key exclusivity (kind = {:?})",
                kind
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Favourite {
    pub id: i64,
    pub user_id: Option<i64>,
    pub target: FavouriteTarget,
}

impl FromRow<'_, SqliteRow> for Favourite {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let kind: String = row.try_get("kind")?;
        let planet_id: Option<i64> = row.try_get("planet_id")?;
        let vehicle_id: Option<i64> = row.try_get("vehicle_id")?;
        let character_id: Option<i64> = row.try_get("character_id")?;
        let target = FavouriteTarget::from_columns(&kind, planet_id, vehicle_id, character_id)
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "kind".into(),
                source: e.into(),
            })?;
        Ok(Favourite {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            target,
        })
    }
}

/// Wire shape of a favourite: the discriminator under `type` plus all three
/// foreign-key columns, the two non-matching ones null. `user_id` is not
/// part of the public key set.
#[derive(Debug, Serialize)]
pub struct PublicFavourite {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub planet_id: Option<i64>,
    pub vehicle_id: Option<i64>,
    pub character_id: Option<i64>,
}

impl Favourite {
    pub fn public(&self) -> PublicFavourite {
        let (planet_id, vehicle_id, character_id) = match self.target {
            FavouriteTarget::Planet(id) => (Some(id), None, None),
            FavouriteTarget::Vehicle(id) => (None, Some(id), None),
            FavouriteTarget::Character(id) => (None, None, Some(id)),
        };
        PublicFavourite {
            id: self.id,
            kind: self.target.kind(),
            planet_id,
            vehicle_id,
            character_id,
        }
    }
}

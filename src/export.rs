// src/export.rs
//! Сериализуемый снимок готового мира (JSON).

use std::fs;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub id: usize,
    pub continent: u32,
    /// Исходная клетка сетки, в которой страна была создана
    pub origin: (u32, u32),
    pub neighbors: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinentRecord {
    pub id: u32,
    pub bonus: i32,
    pub countries: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub max_rounds: usize,
    pub continents: Vec<ContinentRecord>,
    pub countries: Vec<CountryRecord>,
    pub wastelands: Vec<usize>,
    pub starting_countries: Vec<usize>,
}

impl WorldSnapshot {
    #[must_use]
    pub fn from_world(world: &World) -> Self {
        let continent_ids = world.continent_ids_by_country();

        let continents = world
            .continents
            .iter()
            .map(|continent| ContinentRecord {
                id: continent.id,
                bonus: continent.bonus,
                countries: continent
                    .countries
                    .iter()
                    .filter_map(|&c| world.country_id(c))
                    .collect(),
            })
            .collect();

        let countries = world
            .countries_by_id
            .iter()
            .map(|(&id, &country)| CountryRecord {
                id,
                continent: continent_ids.get(&country).copied().unwrap_or(0),
                origin: (country.x, country.y),
                neighbors: world.neighbor_ids(country),
            })
            .collect();

        let ids = |set: &std::collections::BTreeSet<crate::world::Country>| {
            let mut ids: Vec<usize> = set.iter().filter_map(|&c| world.country_id(c)).collect();
            ids.sort_unstable();
            ids
        };

        Self {
            max_rounds: world.max_rounds,
            continents,
            countries,
            wastelands: ids(&world.wasteland_countries),
            starting_countries: ids(&world.starting_countries),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_as_json(&self, path: &str) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

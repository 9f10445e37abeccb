// src/world/setup.rs
//! Текст настройки карты для игрового движка.
//!
//! Каждая секция занимает одну строку токенов через пробел и завершается пустой строкой.
//! Номера соседей одной страны перечисляются через запятую без пробелов.

use std::fmt::Write;

use crate::world::World;

impl World {
    /// Формирует полный текст настройки карты.
    #[must_use]
    pub fn setup_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "settings max_rounds {}\n", self.max_rounds);

        out.push_str("setup_map super_regions");
        for continent in &self.continents {
            let _ = write!(out, " {} {}", continent.id, continent.bonus);
        }
        out.push_str("\n\n");

        out.push_str("setup_map regions");
        for continent in &self.continents {
            for &country in &continent.countries {
                if let Some(id) = self.country_id(country) {
                    let _ = write!(out, " {} {}", id, continent.id);
                }
            }
        }
        out.push_str("\n\n");

        out.push_str("setup_map neighbors");
        for continent in &self.continents {
            for &country in &continent.countries {
                let Some(id) = self.country_id(country) else {
                    continue;
                };
                let _ = write!(out, " {id}");
                let neighbors = self
                    .neighbor_ids(country)
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                if !neighbors.is_empty() {
                    let _ = write!(out, " {neighbors}");
                }
            }
        }
        out.push_str("\n\n");

        out.push_str("setup_map wastelands");
        for id in sorted_ids(self, &self.wasteland_countries) {
            let _ = write!(out, " {id}");
        }
        out.push_str("\n\n");

        out.push_str("settings starting_regions");
        for id in sorted_ids(self, &self.starting_countries) {
            let _ = write!(out, " {id}");
        }
        out.push_str("\n\n");

        out
    }
}

fn sorted_ids<'a>(
    world: &World,
    countries: impl IntoIterator<Item = &'a crate::world::Country>,
) -> Vec<usize> {
    let mut ids: Vec<usize> = countries
        .into_iter()
        .filter_map(|&country| world.country_id(country))
        .collect();
    ids.sort_unstable();
    ids
}

// src/analysis.rs
//! Проверка глобальной связности готовых миров.
//!
//! Генератор отбрасывает только континенты без внешних связей. Изолированная пара
//! континентов проходит эту проверку, поэтому изредка мир распадается на части.
//! Здесь это только измеряется, мир не исправляется.

use std::collections::HashMap;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::error::{MapGenError, Result};
use crate::generator::generate_seeded;
use crate::world::World;

/// Граф стран: вес узла — итоговый номер страны.
#[must_use]
pub fn country_graph(world: &World) -> UnGraph<usize, ()> {
    let mut graph = UnGraph::new_undirected();
    let id_to_node: HashMap<usize, NodeIndex> = world
        .countries_by_id
        .keys()
        .map(|&id| (id, graph.add_node(id)))
        .collect();

    for (&id, &country) in &world.countries_by_id {
        for neighbor in world.neighbor_ids(country) {
            // Каждая пара добавляется один раз, со стороны меньшего номера
            if id < neighbor {
                graph.add_edge(id_to_node[&id], id_to_node[&neighbor], ());
            }
        }
    }
    graph
}

/// Мир связен, если все страны лежат в одной компоненте. Пустой мир считается связным.
#[must_use]
pub fn is_connected(world: &World) -> bool {
    world.countries_by_id.is_empty() || connected_components(&country_graph(world)) == 1
}

/// Итоги пакетной генерации.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyReport {
    pub worlds: usize,
    pub disconnected: usize,
    pub empty: usize,
    pub mean_countries: f64,
    pub mean_continents: f64,
}

impl SurveyReport {
    /// Доля миров, распавшихся на несколько компонент.
    #[must_use]
    pub fn disconnected_rate(&self) -> f64 {
        if self.worlds == 0 {
            0.0
        } else {
            self.disconnected as f64 / self.worlds as f64
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct WorldStats {
    countries: usize,
    continents: usize,
    connected: bool,
}

fn measure(goal_country_count: usize, seed: u64) -> Result<WorldStats> {
    let world = generate_seeded(goal_country_count, seed)?.world;
    let connected = is_connected(&world);
    if !connected {
        tracing::warn!(seed, "Мир распался на несколько компонент");
    }
    Ok(WorldStats {
        countries: world.country_count(),
        continents: world.continents.len(),
        connected,
    })
}

/// Генерирует `worlds` миров с сидами `first_seed..first_seed + worlds` и считает статистику.
pub fn survey(goal_country_count: usize, worlds: usize, first_seed: u64) -> Result<SurveyReport> {
    if goal_country_count == 0 {
        return Err(MapGenError::InvalidCountryCount(goal_country_count));
    }
    let end = u64::try_from(worlds)
        .ok()
        .and_then(|count| first_seed.checked_add(count))
        .ok_or(MapGenError::InvalidSeedRange { first_seed, worlds })?;
    let seeds = first_seed..end;

    #[cfg(feature = "parallel")]
    let stats: Vec<WorldStats> = seeds
        .into_par_iter()
        .map(|seed| measure(goal_country_count, seed))
        .collect::<Result<_>>()?;
    #[cfg(not(feature = "parallel"))]
    let stats: Vec<WorldStats> = seeds
        .map(|seed| measure(goal_country_count, seed))
        .collect::<Result<_>>()?;

    let mut report = SurveyReport {
        worlds: stats.len(),
        ..SurveyReport::default()
    };
    for s in &stats {
        if !s.connected {
            report.disconnected += 1;
        }
        if s.countries == 0 {
            report.empty += 1;
        }
        report.mean_countries += s.countries as f64;
        report.mean_continents += s.continents as f64;
    }
    if report.worlds > 0 {
        report.mean_countries /= report.worlds as f64;
        report.mean_continents /= report.worlds as f64;
    }

    tracing::info!(
        worlds = report.worlds,
        disconnected = report.disconnected,
        "Обзор завершён"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Continent, Country, Edge};
    use std::collections::BTreeMap;

    fn world_from(continents: Vec<Vec<Country>>, edges: Vec<Edge>) -> World {
        let mut world = World {
            edges,
            ..World::default()
        };
        for (index, countries) in continents.into_iter().enumerate() {
            world.continents.push(Continent {
                id: index as u32 + 1,
                bonus: 0,
                countries,
            });
        }
        world.countries_by_id = world
            .countries_in_continents()
            .into_iter()
            .enumerate()
            .collect::<BTreeMap<usize, Country>>();
        world
    }

    #[test]
    fn isolated_pairs_make_world_disconnected() {
        let c = Country::new;
        let world = world_from(
            vec![
                vec![c(0, 0), c(1, 0)],
                vec![c(2, 0), c(3, 0)],
                vec![c(7, 7), c(8, 7)],
                vec![c(9, 7), c(10, 7)],
            ],
            vec![
                Edge::new(c(0, 0), c(1, 0)),
                Edge::new(c(1, 0), c(2, 0)),
                Edge::new(c(2, 0), c(3, 0)),
                Edge::new(c(7, 7), c(8, 7)),
                Edge::new(c(8, 7), c(9, 7)),
                Edge::new(c(9, 7), c(10, 7)),
            ],
        );

        assert_eq!(country_graph(&world).edge_count(), 6);
        assert!(!is_connected(&world));
    }

    #[test]
    fn reversed_duplicate_edges_collapse_in_graph() {
        let c = Country::new;
        let world = world_from(
            vec![vec![c(0, 0), c(1, 0)], vec![c(2, 0), c(3, 0)]],
            vec![
                Edge::new(c(0, 0), c(1, 0)),
                Edge::new(c(1, 0), c(0, 0)),
                Edge::new(c(1, 0), c(2, 0)),
                Edge::new(c(2, 0), c(3, 0)),
            ],
        );

        assert_eq!(country_graph(&world).edge_count(), 3);
        assert!(is_connected(&world));
    }

    #[test]
    fn survey_counts_every_world() {
        let report = survey(12, 16, 100).expect("valid goal");
        assert_eq!(report.worlds, 16);
        assert!(report.disconnected <= report.worlds);
        assert!(report.mean_countries > 0.0);
        assert!((0.0..=1.0).contains(&report.disconnected_rate()));
    }

    #[test]
    fn survey_rejects_zero_goal() {
        assert!(survey(0, 4, 0).is_err());
    }

    #[test]
    fn survey_rejects_seed_range_past_u64_max() {
        let err = survey(10, 4, u64::MAX - 1).unwrap_err();
        assert!(matches!(
            err,
            MapGenError::InvalidSeedRange {
                first_seed,
                worlds: 4
            } if first_seed == u64::MAX - 1
        ));
    }

    #[test]
    fn survey_accepts_range_ending_at_u64_max() {
        let report = survey(6, 2, u64::MAX - 2).expect("range fits");
        assert_eq!(report.worlds, 2);
    }
}

// src/generator/merge.rs
//! Слияние клеток сетки в страны случайным стягиванием рёбер.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::generator::GRID_CELL_COMBINES_PER_COUNTRY;
use crate::generator::grid::CellGrid;
use crate::world::{Country, Edge, World};

/// Сколько успешных слияний нужно, чтобы осталась примерно `1 / 2.5` исходных клеток.
#[must_use]
pub fn contraction_target(grid_cells: usize) -> usize {
    let target = grid_cells as f64 * (GRID_CELL_COMBINES_PER_COUNTRY - 1.0)
        / GRID_CELL_COMBINES_PER_COUNTRY;
    target.ceil() as usize
}

/// Стягивает рёбра, пока не будет выполнено нужное число слияний.
/// Возвращает число выполненных слияний: меньше цели оно бывает только
/// на вырожденных сетках, где рёбра закончились раньше.
pub fn combine_country_cells<R: Rng + ?Sized>(
    world: &mut World,
    grid: &mut CellGrid,
    rng: &mut R,
) -> usize {
    let target = contraction_target(grid.len());
    let mut merged = 0;

    while merged < target {
        let Some(into) = world.all_countries().into_iter().choose(rng) else {
            break;
        };
        let Some(neighbor) = world.neighbors_of(into).into_iter().choose(rng) else {
            break;
        };

        // Возможно только при петлях; такая попытка не засчитывается
        if neighbor == into {
            continue;
        }

        merge_into_country(world, grid, neighbor, into);
        remove_duplicate_and_loop_edges(&mut world.edges);
        merged += 1;
    }

    tracing::debug!(
        merged,
        target,
        countries = world.all_countries().len(),
        "Клетки слиты в страны"
    );
    merged
}

/// Перенаправляет все концы рёбер и клетки сетки со страны `country` на `into`.
pub fn merge_into_country(world: &mut World, grid: &mut CellGrid, country: Country, into: Country) {
    for edge in &mut world.edges {
        if edge.left == country {
            edge.left = into;
        }
        if edge.right == country {
            edge.right = into;
        }
    }
    grid.repoint(country, into);
}

/// Убирает точные дубликаты `(left, right)` и петли, сохраняя порядок первых вхождений.
pub fn remove_duplicate_and_loop_edges(edges: &mut Vec<Edge>) {
    let mut seen = HashSet::with_capacity(edges.len());
    edges.retain(|edge| !edge.is_loop() && seen.insert(*edge));
}

/// Временные номера для отладочной печати сетки стран.
#[must_use]
pub fn assign_temporary_ids(world: &World) -> HashMap<Country, usize> {
    world
        .all_countries()
        .into_iter()
        .enumerate()
        .map(|(id, country)| (country, id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeSet;

    fn c(x: u32, y: u32) -> Country {
        Country::new(x, y)
    }

    #[test]
    fn dedup_removes_exact_duplicates_and_loops() {
        let mut edges = vec![
            Edge::new(c(0, 0), c(1, 0)),
            Edge::new(c(0, 0), c(1, 0)),
            Edge::new(c(2, 0), c(2, 0)),
            Edge::new(c(1, 0), c(0, 0)),
        ];
        remove_duplicate_and_loop_edges(&mut edges);

        // Обратная пара остаётся: рёбра сравниваются с учётом порядка
        assert_eq!(
            edges,
            vec![Edge::new(c(0, 0), c(1, 0)), Edge::new(c(1, 0), c(0, 0))]
        );
    }

    #[test]
    fn dedup_is_idempotent() {
        let mut edges = vec![
            Edge::new(c(0, 0), c(1, 0)),
            Edge::new(c(1, 1), c(1, 1)),
            Edge::new(c(0, 0), c(1, 0)),
            Edge::new(c(0, 1), c(1, 1)),
        ];
        remove_duplicate_and_loop_edges(&mut edges);
        let once = edges.clone();
        remove_duplicate_and_loop_edges(&mut edges);
        assert_eq!(edges, once);
    }

    #[test]
    fn merge_repoints_edges_and_grid() {
        let mut grid = CellGrid::new(2, 2);
        let mut world = World {
            edges: grid.initial_edges(),
            ..World::default()
        };

        merge_into_country(&mut world, &mut grid, c(1, 0), c(0, 0));
        remove_duplicate_and_loop_edges(&mut world.edges);

        assert_eq!(grid.get(1, 0), c(0, 0));
        assert!(!world.all_countries().contains(&c(1, 0)));
        assert_eq!(
            world.neighbors_of(c(0, 0)),
            BTreeSet::from([c(0, 1), c(1, 1)])
        );
    }

    #[test]
    fn contraction_keeps_roughly_two_fifths_of_cells() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut grid = CellGrid::new(8, 9);
        let mut world = World {
            edges: grid.initial_edges(),
            ..World::default()
        };

        let merged = combine_country_cells(&mut world, &mut grid, &mut rng);

        assert_eq!(merged, contraction_target(72));
        assert_eq!(world.all_countries().len(), 72 - merged);
        assert!(!world.edges.iter().any(Edge::is_loop));
    }

    #[test]
    fn merged_countries_cover_whole_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut grid = CellGrid::new(6, 7);
        let mut world = World {
            edges: grid.initial_edges(),
            ..World::default()
        };
        combine_country_cells(&mut world, &mut grid, &mut rng);

        let alive = world.all_countries();
        assert!(grid.cells.iter().all(|cell| alive.contains(cell)));
    }

    #[test]
    fn degenerate_grid_stops_when_edges_run_out() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut grid = CellGrid::new(1, 2);
        let mut world = World {
            edges: grid.initial_edges(),
            ..World::default()
        };

        let merged = combine_country_cells(&mut world, &mut grid, &mut rng);
        assert_eq!(merged, 1);
        assert!(world.edges.is_empty());
    }

    #[test]
    fn temporary_ids_are_dense_from_zero() {
        let grid = CellGrid::new(3, 4);
        let world = World {
            edges: grid.initial_edges(),
            ..World::default()
        };
        let ids = assign_temporary_ids(&world);

        let mut values: Vec<usize> = ids.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, (0..12).collect::<Vec<_>>());
    }
}

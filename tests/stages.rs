//! Этапы очистки и финализации на вручную собранных мирах.

use std::collections::BTreeSet;

use conquest_mapgen::generator::continent::continent_bonus;
use conquest_mapgen::generator::{finalize, merge, prune};
use conquest_mapgen::{Continent, Country, Edge, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn c(x: u32, y: u32) -> Country {
    Country::new(x, y)
}

fn finish(world: &mut World, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    finalize::assign_final_ids(world);
    world.max_rounds = finalize::max_rounds(world.country_count());
    finalize::choose_wasteland_countries(world, &mut rng);
    finalize::choose_starting_countries(world, &mut rng);
}

#[test]
fn single_surviving_continent_keeps_one_start() {
    // Континент связан с внешней страной, поэтому проверка связности его не трогает
    let mut world = World {
        edges: vec![
            Edge::new(c(0, 0), c(1, 0)),
            Edge::new(c(1, 0), c(2, 0)),
            Edge::new(c(2, 0), c(3, 0)),
        ],
        continents: vec![Continent {
            id: 1,
            bonus: 1,
            countries: vec![c(0, 0), c(1, 0), c(2, 0)],
        }],
        ..World::default()
    };

    assert_eq!(prune::remove_unconnected_continents(&mut world), 0);
    finish(&mut world, 9);

    assert_eq!(world.continents.len(), 1);
    assert_eq!(world.starting_countries.len(), 1);
    assert!(world.wasteland_countries.is_empty());
    assert_eq!(world.max_rounds, 7);
}

#[test]
fn pruning_then_finalizing_renumbers_survivors() {
    let mut world = World {
        edges: vec![
            Edge::new(c(0, 0), c(1, 0)),
            Edge::new(c(1, 0), c(2, 0)),
            Edge::new(c(2, 0), c(3, 0)),
            Edge::new(c(3, 0), c(4, 0)),
            Edge::new(c(8, 8), c(9, 8)),
        ],
        continents: vec![
            Continent {
                id: 1,
                bonus: 2,
                countries: vec![c(8, 8), c(9, 8)],
            },
            Continent {
                id: 2,
                bonus: 1,
                countries: vec![c(0, 0), c(1, 0)],
            },
            Continent {
                id: 3,
                bonus: 0,
                countries: vec![c(2, 0), c(3, 0)],
            },
        ],
        ..World::default()
    };

    let removed = prune::remove_unused_edges(&mut world, &BTreeSet::from([c(4, 0)]));
    assert_eq!(removed, 1);
    assert_eq!(prune::remove_unconnected_continents(&mut world), 1);
    finish(&mut world, 3);

    assert_eq!(
        world.continents.iter().map(|k| k.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(world.countries_by_id.len(), 4);
    assert_eq!(world.countries_by_id[&0], c(0, 0));
    assert_eq!(world.max_rounds, 10);

    let text = world.setup_text();
    assert!(text.contains("setup_map super_regions 1 1 2 0\n"));
    assert!(text.contains("setup_map regions 0 1 1 1 2 2 3 2\n"));
    assert!(text.contains("setup_map neighbors 0 1 1 0,2 2 1,3 3 2\n"));
}

#[test]
fn bonus_for_three_countries_without_jitter() {
    assert_eq!(continent_bonus(3, 0.0), 2);
}

#[test]
fn dedup_twice_equals_dedup_once() {
    let mut edges = vec![
        Edge::new(c(0, 0), c(1, 0)),
        Edge::new(c(1, 0), c(1, 0)),
        Edge::new(c(1, 0), c(0, 0)),
        Edge::new(c(0, 0), c(1, 0)),
        Edge::new(c(2, 2), c(3, 2)),
    ];
    merge::remove_duplicate_and_loop_edges(&mut edges);
    let once = edges.clone();
    merge::remove_duplicate_and_loop_edges(&mut edges);

    assert_eq!(edges, once);
    assert_eq!(edges.len(), 3);
}

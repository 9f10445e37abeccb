// src/generator/finalize.rs
//! Итоговые номера, число раундов, пустоши и стартовые страны.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::generator::{CONTINENTS_PER_WASTELAND, MAX_ROUNDS_PER_COUNTRY};
use crate::world::{Country, World};

/// Перенумеровывает континенты подряд с 1 и выдаёт странам итоговые номера с 0
/// в порядке «континент, затем порядок вставки».
pub fn assign_final_ids(world: &mut World) {
    for (index, continent) in world.continents.iter_mut().enumerate() {
        continent.id = index as u32 + 1;
    }

    world.countries_by_id = world
        .countries_in_continents()
        .into_iter()
        .enumerate()
        .collect::<BTreeMap<usize, Country>>();
}

#[must_use]
pub fn max_rounds(country_count: usize) -> usize {
    (country_count as f64 * MAX_ROUNDS_PER_COUNTRY) as usize
}

#[must_use]
pub fn wasteland_count(continent_count: usize) -> usize {
    (continent_count as f64 / CONTINENTS_PER_WASTELAND) as usize
}

/// Независимые случайные выборки среди стран континентов. Повторы схлопываются,
/// поэтому пустошей может оказаться меньше расчётного числа.
pub fn choose_wasteland_countries<R: Rng + ?Sized>(world: &mut World, rng: &mut R) {
    let candidates = world.countries_in_continents();
    for _ in 0..wasteland_count(world.continents.len()) {
        if let Some(&country) = candidates.choose(rng) {
            world.wasteland_countries.insert(country);
        }
    }
}

/// По одной случайной стране на континент; стартовая страна не может быть пустошью.
pub fn choose_starting_countries<R: Rng + ?Sized>(world: &mut World, rng: &mut R) {
    let starting: BTreeSet<Country> = world
        .continents
        .iter()
        .filter_map(|continent| continent.countries.choose(rng).copied())
        .collect();

    world
        .wasteland_countries
        .retain(|country| !starting.contains(country));
    world.starting_countries.extend(starting);
}

// src/generator/continent.rs
//! Рост континентов случайным блужданием по графу стран.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::{IteratorRandom, SliceRandom};

use crate::generator::{
    BONUS_JITTER, CONTINUE_GROWTH_PROBABILITY, MAX_CONTINENT_SIZE, MIN_CONTINENT_SIZE,
};
use crate::world::{Continent, Country, World};

/// Бонус континента: `(размер - 1) + jitter` с отбрасыванием дробной части к нулю.
#[must_use]
pub fn continent_bonus(size: usize, jitter: f64) -> i32 {
    ((size as f64 - 1.0) + jitter) as i32
}

pub fn choose_continent_bonus<R: Rng + ?Sized>(size: usize, rng: &mut R) -> i32 {
    continent_bonus(size, rng.gen_range(BONUS_JITTER))
}

/// Разбивает все страны на континенты и добавляет сохранённые в `world.continents`.
///
/// Возвращает страны, не попавшие ни в один континент.
pub fn make_continents<R: Rng + ?Sized>(world: &mut World, rng: &mut R) -> BTreeSet<Country> {
    let all_countries = world.all_countries();
    let mut unused = all_countries.clone();
    let mut discarded = 0;

    while let Some(seed) = unused.iter().copied().choose(rng) {
        let mut continent = grow_continent(world, seed, &mut unused, rng);

        if continent.len() >= MIN_CONTINENT_SIZE {
            continent.id = world.continents.len() as u32 + 1;
            continent.bonus = choose_continent_bonus(continent.len(), rng);
            world.continents.push(continent);
        } else {
            // Затравка без свободных соседей: она остаётся помеченной и больше не выбирается
            discarded += 1;
        }
    }

    let in_continents: BTreeSet<Country> = world.countries_in_continents().into_iter().collect();
    let not_used: BTreeSet<Country> = all_countries
        .difference(&in_continents)
        .copied()
        .collect();

    tracing::debug!(
        kept = world.continents.len(),
        discarded,
        unused = not_used.len(),
        "Континенты построены"
    );
    not_used
}

/// Выращивает один континент из затравки. Каждая добавленная страна убирается из `unused`.
fn grow_continent<R: Rng + ?Sized>(
    world: &World,
    seed: Country,
    unused: &mut BTreeSet<Country>,
    rng: &mut R,
) -> Continent {
    let mut continent = Continent::new(seed);
    unused.remove(&seed);

    loop {
        let candidates: Vec<Country> = world
            .neighbors_of_continent(&continent)
            .into_iter()
            .filter(|country| unused.contains(country))
            .collect();

        let Some(&next) = candidates.choose(rng) else {
            break;
        };
        continent.countries.push(next);
        unused.remove(&next);

        if continent.len() >= MAX_CONTINENT_SIZE {
            break;
        }
        if !rng.gen_bool(CONTINUE_GROWTH_PROBABILITY) {
            break;
        }
    }

    continent
}

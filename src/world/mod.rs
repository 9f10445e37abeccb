//! Модель мира: страны, рёбра смежности, континенты.
//!
//! Страна идентифицируется исходной клеткой сетки, в которой она была создана.
//! Слияние клеток не создаёт новых стран, а только перенаправляет рёбра, поэтому
//! два значения `Country` равны тогда и только тогда, когда совпадают их исходные координаты.

pub mod setup;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Узел графа: одна территория.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Country {
    /// Исходная клетка сетки (x)
    pub x: u32,
    /// Исходная клетка сетки (y)
    pub y: u32,
}

impl Country {
    #[must_use]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Ребро смежности. Сравнение учитывает порядок концов: `(a, b) != (b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub left: Country,
    pub right: Country,
}

impl Edge {
    #[must_use]
    pub fn new(left: Country, right: Country) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn touches(&self, country: Country) -> bool {
        self.left == country || self.right == country
    }

    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.left == self.right
    }

    /// Второй конец ребра, если `country` является одним из концов.
    #[must_use]
    pub fn other(&self, country: Country) -> Option<Country> {
        if self.left == country {
            Some(self.right)
        } else if self.right == country {
            Some(self.left)
        } else {
            None
        }
    }
}

/// Континент (super region): связная группа стран с бонусом за полный контроль.
#[derive(Debug, Clone, PartialEq)]
pub struct Continent {
    /// Номер, начиная с 1
    pub id: u32,
    pub bonus: i32,
    /// Порядок вставки сохраняется: от него зависят итоговые номера стран
    pub countries: Vec<Country>,
}

impl Continent {
    #[must_use]
    pub fn new(seed: Country) -> Self {
        Self {
            id: 0,
            bonus: 0,
            countries: vec![seed],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, country: Country) -> bool {
        self.countries.contains(&country)
    }
}

/// Результат генерации.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub edges: Vec<Edge>,
    pub continents: Vec<Continent>,
    /// Итоговый номер → страна (только страны, попавшие в континенты).
    /// Единственный источник номеров: обратный поиск идёт через [`World::country_id`].
    pub countries_by_id: BTreeMap<usize, Country>,
    pub starting_countries: BTreeSet<Country>,
    pub wasteland_countries: BTreeSet<Country>,
    pub max_rounds: usize,
}

impl World {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Все страны, на которые ссылается хотя бы одно ребро.
    #[must_use]
    pub fn all_countries(&self) -> BTreeSet<Country> {
        self.edges
            .iter()
            .flat_map(|edge| [edge.left, edge.right])
            .collect()
    }

    /// Соседи страны с учётом обеих ориентаций рёбер.
    #[must_use]
    pub fn neighbors_of(&self, country: Country) -> BTreeSet<Country> {
        self.edges
            .iter()
            .filter_map(|edge| edge.other(country))
            .collect()
    }

    /// Объединение соседей всех стран группы. Сами члены группы, соседствующие
    /// друг с другом, тоже входят в результат.
    #[must_use]
    pub fn neighbors_of_group(&self, members: &[Country]) -> BTreeSet<Country> {
        let members: HashSet<Country> = members.iter().copied().collect();
        let mut neighbors = BTreeSet::new();
        for edge in &self.edges {
            if members.contains(&edge.left) {
                neighbors.insert(edge.right);
            }
            if members.contains(&edge.right) {
                neighbors.insert(edge.left);
            }
        }
        neighbors
    }

    #[must_use]
    pub fn neighbors_of_continent(&self, continent: &Continent) -> BTreeSet<Country> {
        self.neighbors_of_group(&continent.countries)
    }

    /// Страны всех континентов в порядке «континент, затем порядок вставки», без повторов.
    #[must_use]
    pub fn countries_in_continents(&self) -> Vec<Country> {
        let mut seen = HashSet::new();
        self.continents
            .iter()
            .flat_map(|continent| continent.countries.iter().copied())
            .filter(|&country| seen.insert(country))
            .collect()
    }

    /// Страна → номер её континента.
    #[must_use]
    pub fn continent_ids_by_country(&self) -> HashMap<Country, u32> {
        self.continents
            .iter()
            .flat_map(|continent| continent.countries.iter().map(|&c| (c, continent.id)))
            .collect()
    }

    #[must_use]
    pub fn country_id(&self, country: Country) -> Option<usize> {
        self.countries_by_id
            .iter()
            .find_map(|(&id, &c)| (c == country).then_some(id))
    }

    /// Номера соседей страны по возрастанию. Соседи без итогового номера пропускаются.
    #[must_use]
    pub fn neighbor_ids(&self, country: Country) -> Vec<usize> {
        let mut ids: Vec<usize> = self
            .neighbors_of(country)
            .into_iter()
            .filter_map(|neighbor| self.country_id(neighbor))
            .collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn country_count(&self) -> usize {
        self.countries_by_id.len()
    }
}

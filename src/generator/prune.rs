// src/generator/prune.rs
use std::collections::{BTreeSet, HashSet};

use crate::world::{Country, World};

/// Убирает рёбра, касающиеся стран вне континентов. Возвращает число удалённых рёбер.
pub fn remove_unused_edges(world: &mut World, unused: &BTreeSet<Country>) -> usize {
    let before = world.edges.len();
    world
        .edges
        .retain(|edge| !unused.contains(&edge.left) && !unused.contains(&edge.right));
    before - world.edges.len()
}

/// Убирает континенты без единой внешней связи вместе с их внутренними рёбрами.
///
/// Проверка локальная: континент отсоединён, если множество его соседей совпадает
/// по размеру с ним самим. Пара континентов, связанных только друг с другом,
/// так не обнаруживается и остаётся в мире (примерно один мир из 10 000).
pub fn remove_unconnected_continents(world: &mut World) -> usize {
    let disconnected: Vec<usize> = world
        .continents
        .iter()
        .enumerate()
        .filter(|(_, continent)| world.neighbors_of_continent(continent).len() == continent.len())
        .map(|(index, _)| index)
        .collect();

    if disconnected.is_empty() {
        return 0;
    }

    let mut orphaned = HashSet::new();
    for &index in disconnected.iter().rev() {
        let continent = world.continents.remove(index);
        tracing::debug!(
            continent = continent.id,
            size = continent.len(),
            "Континент без внешних связей удалён"
        );
        orphaned.extend(continent.countries);
    }
    world
        .edges
        .retain(|edge| !orphaned.contains(&edge.left) && !orphaned.contains(&edge.right));

    disconnected.len()
}

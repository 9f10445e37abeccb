//! Генерация мира для игры на захват территорий.
//!
//! Порядок этапов:
//! 1. Прямоугольная сетка клеток и рёбра 4-связности
//! 2. Случайное слияние клеток в страны
//! 3. Временные номера стран (только для отладочной печати)
//! 4. Рост континентов
//! 5. Удаление неиспользуемых рёбер и отсоединённых континентов
//! 6. Итоговые номера, число раундов, пустоши и стартовые страны

pub mod continent;
pub mod finalize;
pub mod grid;
pub mod merge;
pub mod prune;

use std::collections::HashMap;
use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{MapGenError, Result};
use crate::world::{Country, World};
use grid::CellGrid;

/// Сколько клеток сетки в среднем сливается в одну страну.
pub const GRID_CELL_COMBINES_PER_COUNTRY: f64 = 2.5;
pub const MAX_CONTINENT_SIZE: usize = 6;
pub const MIN_CONTINENT_SIZE: usize = 2;
/// Запас клеток на страны, которые не попадут ни в один континент.
pub const UNUSED_COUNTRY_OVERAGE: f64 = 1.12;
/// Вероятность продолжить рост континента после очередного шага.
pub const CONTINUE_GROWTH_PROBABILITY: f64 = 0.7;
/// Случайная добавка к бонусу континента.
pub const BONUS_JITTER: Range<f64> = -1.5..2.5;
pub const MAX_ROUNDS_PER_COUNTRY: f64 = 2.5;
pub const CONTINENTS_PER_WASTELAND: f64 = 2.4;

/// Готовый мир вместе с промежуточным состоянием, нужным для отладочного отчёта.
#[derive(Debug, Clone)]
pub struct Generation {
    pub world: World,
    /// Сетка после слияния: каждая клетка указывает на свою страну
    pub grid: CellGrid,
    /// Номера стран сразу после слияния клеток
    pub temporary_ids: HashMap<Country, usize>,
}

/// Один прогон генерации. Создаётся на каждый мир.
#[derive(Debug)]
pub struct WorldGenerator {
    goal_country_count: usize,
    grid: CellGrid,
    world: World,
}

impl WorldGenerator {
    pub fn new(goal_country_count: usize) -> Result<Self> {
        if goal_country_count == 0 {
            return Err(MapGenError::InvalidCountryCount(goal_country_count));
        }

        let grid = CellGrid::for_goal(goal_country_count);
        let world = World {
            edges: grid.initial_edges(),
            ..World::default()
        };
        tracing::debug!(
            goal_country_count,
            width = grid.width,
            height = grid.height,
            edges = world.edges.len(),
            "Сетка построена"
        );

        Ok(Self {
            goal_country_count,
            grid,
            world,
        })
    }

    #[must_use]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Выполняет все этапы генерации, потребляя случайные числа строго последовательно.
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Generation {
        merge::combine_country_cells(&mut self.world, &mut self.grid, rng);
        let temporary_ids = merge::assign_temporary_ids(&self.world);

        let unused = continent::make_continents(&mut self.world, rng);
        let dropped_edges = prune::remove_unused_edges(&mut self.world, &unused);
        let dropped_continents = prune::remove_unconnected_continents(&mut self.world);
        tracing::debug!(dropped_edges, dropped_continents, "Мир очищен");

        finalize::assign_final_ids(&mut self.world);
        self.world.max_rounds = finalize::max_rounds(self.world.country_count());
        finalize::choose_wasteland_countries(&mut self.world, rng);
        finalize::choose_starting_countries(&mut self.world, rng);

        tracing::info!(
            goal = self.goal_country_count,
            countries = self.world.country_count(),
            continents = self.world.continents.len(),
            wastelands = self.world.wasteland_countries.len(),
            max_rounds = self.world.max_rounds,
            "Мир сгенерирован"
        );

        Generation {
            world: self.world,
            grid: self.grid,
            temporary_ids,
        }
    }
}

/// Генерирует мир примерно из `goal_country_count` стран.
pub fn generate<R: Rng + ?Sized>(goal_country_count: usize, rng: &mut R) -> Result<World> {
    Ok(WorldGenerator::new(goal_country_count)?.run(rng).world)
}

/// Детерминированная генерация: одинаковый сид даёт одинаковый мир.
pub fn generate_seeded(goal_country_count: usize, seed: u64) -> Result<Generation> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok(WorldGenerator::new(goal_country_count)?.run(&mut rng))
}

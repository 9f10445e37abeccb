// src/generator/grid.rs
use crate::generator::{GRID_CELL_COMBINES_PER_COUNTRY, UNUSED_COUNTRY_OVERAGE};
use crate::world::{Country, Edge};

/// Прямоугольная сетка клеток. Каждая клетка указывает на страну, которой она сейчас принадлежит.
#[derive(Debug, Clone)]
pub struct CellGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<Country>,
}

/// Число клеток сетки для желаемого количества стран, с запасом на клетки,
/// которые позже не попадут ни в один континент.
#[must_use]
pub fn cell_count(goal_country_count: usize) -> usize {
    (goal_country_count as f64 * GRID_CELL_COMBINES_PER_COUNTRY * UNUSED_COUNTRY_OVERAGE) as usize
}

/// Размеры сетки `(ширина, высота)`. Высота на единицу больше ширины,
/// чтобы избежать симметричных артефактов.
#[must_use]
pub fn grid_dimensions(cell_count: usize) -> (u32, u32) {
    let width = (cell_count as f64).sqrt() as u32;
    (width, width + 1)
}

impl CellGrid {
    /// Создаёт сетку, где каждая клетка — отдельная страна.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut cells = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(Country::new(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    #[must_use]
    pub fn for_goal(goal_country_count: usize) -> Self {
        let (width, height) = grid_dimensions(cell_count(goal_country_count));
        Self::new(width, height)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Country {
        self.cells[(y * self.width + x) as usize]
    }

    /// Перенаправляет все клетки страны `from` на страну `into`.
    pub fn repoint(&mut self, from: Country, into: Country) {
        for cell in &mut self.cells {
            if *cell == from {
                *cell = into;
            }
        }
    }

    /// Рёбра только к правому и нижнему соседу: 4-связность без дубликатов.
    #[must_use]
    pub fn initial_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for x in 0..self.width {
            for y in 0..self.height {
                if x + 1 < self.width {
                    edges.push(Edge::new(self.get(x, y), self.get(x + 1, y)));
                }
                if y + 1 < self.height {
                    edges.push(Edge::new(self.get(x, y), self.get(x, y + 1)));
                }
            }
        }
        edges
    }
}

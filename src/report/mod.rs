//! Отладочный отчёт: сетка стран, сетка континентов и сводка по континентам.

pub mod png;

use std::collections::HashMap;
use std::fmt::Write;

use crate::generator::Generation;
use crate::generator::grid::CellGrid;
use crate::world::{Country, World};

/// Ширина ячейки — три символа: номер и выравнивающие пробелы.
fn push_cell(out: &mut String, name: &str) {
    out.push_str(name);
    out.push_str(if name.len() == 1 { "  " } else { " " });
}

/// Сетка временных номеров стран.
#[must_use]
pub fn country_layout(grid: &CellGrid, temporary_ids: &HashMap<Country, usize>) -> String {
    let mut out = String::from(
        "\nCountry view:\n\
         // All of the grid cells that contain the same number are the space filled by that country #.\n",
    );
    for y in 0..grid.height {
        for x in 0..grid.width {
            match temporary_ids.get(&grid.get(x, y)) {
                Some(id) => push_cell(&mut out, &id.to_string()),
                None => push_cell(&mut out, "-"),
            }
        }
        out.push('\n');
    }
    out
}

/// Сетка номеров континентов; клетки удалённых стран остаются пустыми.
#[must_use]
pub fn continent_layout(grid: &CellGrid, world: &World) -> String {
    let continent_ids = world.continent_ids_by_country();
    let mut out = String::from(
        "\nContinent view:\n\
         // All of the grid cells that contain the same number are the space filled by that continent #.\n",
    );
    for y in 0..grid.height {
        for x in 0..grid.width {
            match continent_ids.get(&grid.get(x, y)) {
                Some(id) => push_cell(&mut out, &id.to_string()),
                None => out.push_str("   "),
            }
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

#[must_use]
pub fn continent_summary(world: &World) -> String {
    let mut out = String::new();
    for continent in &world.continents {
        let _ = writeln!(
            out,
            "Continent #{} contains {} countries and has a bonus of {}",
            continent.id,
            continent.len(),
            continent.bonus
        );
    }
    out.push('\n');
    out
}

/// Полный отчёт в том порядке, в каком он печатается после генерации.
#[must_use]
pub fn full_report(generation: &Generation) -> String {
    let mut out = country_layout(&generation.grid, &generation.temporary_ids);
    out.push_str(&continent_layout(&generation.grid, &generation.world));
    out.push_str(&continent_summary(&generation.world));
    out
}

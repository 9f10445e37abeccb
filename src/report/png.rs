use std::collections::HashMap;

use image::{ImageBuffer, Rgba};
use rand::{Rng, SeedableRng};

use crate::error::{MapGenError, Result};
use crate::generator::grid::CellGrid;
use crate::world::{Country, World};

/// Фон для клеток, чьи страны не попали ни в один континент.
const BACKGROUND: [u8; 4] = [20, 20, 60, 255];
/// Цвет границы между разными странами внутри континента.
const BORDER_DARKEN: u8 = 40;

/// Карта континентов по клеткам сетки, каждая клетка — квадрат `cell_pixels`².
pub struct ContinentImage {
    pub width: u32,
    pub height: u32,
    pub cell_pixels: u32,
    /// continent_id по клеткам (0 — нет континента)
    pub data: Vec<u32>,
    /// country_id по клеткам, для границ между странами
    countries: Vec<Option<usize>>,
    grid_width: u32,
}

impl ContinentImage {
    /// Ошибка, если размер картинки в пикселях или байтах RGBA не помещается в `u32`/`usize`.
    pub fn new(grid: &CellGrid, world: &World, cell_pixels: u32) -> Result<Self> {
        let cell_pixels = cell_pixels.max(1);
        let too_large = MapGenError::ImageTooLarge {
            grid_width: grid.width,
            grid_height: grid.height,
            cell_pixels,
        };
        let (Some(width), Some(height)) = (
            grid.width.checked_mul(cell_pixels),
            grid.height.checked_mul(cell_pixels),
        ) else {
            return Err(too_large);
        };
        if rgba_len(width, height).is_none() {
            return Err(too_large);
        }

        let continent_ids = world.continent_ids_by_country();
        let country_ids: HashMap<Country, usize> = world
            .countries_by_id
            .iter()
            .map(|(&id, &country)| (country, id))
            .collect();
        let data = grid
            .cells
            .iter()
            .map(|cell| continent_ids.get(cell).copied().unwrap_or(0))
            .collect();
        let countries = grid
            .cells
            .iter()
            .map(|cell| country_ids.get(cell).copied())
            .collect();

        Ok(Self {
            width,
            height,
            cell_pixels,
            data,
            countries,
            grid_width: grid.width,
        })
    }

    fn cell_index(&self, px: u32, py: u32) -> usize {
        ((py / self.cell_pixels) * self.grid_width + px / self.cell_pixels) as usize
    }

    /// Пиксель лежит на краю клетки, за которым начинается другая страна.
    fn on_country_border(&self, px: u32, py: u32) -> bool {
        let here = self.countries[self.cell_index(px, py)];
        let right = px + 1 < self.width
            && (px + 1) % self.cell_pixels == 0
            && self.countries[self.cell_index(px + 1, py)] != here;
        let below = py + 1 < self.height
            && (py + 1) % self.cell_pixels == 0
            && self.countries[self.cell_index(px, py + 1)] != here;
        right || below
    }

    #[must_use]
    pub fn to_rgba_image(&self) -> Vec<u8> {
        let mut colors: HashMap<u32, [u8; 4]> = HashMap::new();
        for &cid in &self.data {
            if cid == 0 {
                continue;
            }
            colors.entry(cid).or_insert_with(|| {
                // Цвет зависит только от номера континента, поэтому повторный рендер совпадает
                let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(u64::from(cid));
                [
                    rng.gen_range(100..220),
                    rng.gen_range(120..255),
                    rng.gen_range(50..140),
                    255,
                ]
            });
        }

        let mut rgba = Vec::with_capacity(rgba_len(self.width, self.height).unwrap_or(0));
        for py in 0..self.height {
            for px in 0..self.width {
                let cid = self.data[self.cell_index(px, py)];
                let mut color = colors.get(&cid).copied().unwrap_or(BACKGROUND);
                if cid != 0 && self.on_country_border(px, py) {
                    for channel in &mut color[..3] {
                        *channel = channel.saturating_sub(BORDER_DARKEN);
                    }
                }
                rgba.extend_from_slice(&color);
            }
        }
        rgba
    }

    pub fn save_as_png(&self, path: &str) -> Result<()> {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(self.width, self.height, self.to_rgba_image()).ok_or_else(
                || std::io::Error::other("Failed to create image buffer"),
            )?;
        img.save(path)?;
        Ok(())
    }
}

/// Длина буфера RGBA в байтах.
fn rgba_len(width: u32, height: u32) -> Option<usize> {
    usize::try_from(width)
        .ok()?
        .checked_mul(usize::try_from(height).ok()?)?
        .checked_mul(4)
}

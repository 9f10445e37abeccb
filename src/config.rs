// src/config.rs
//! Параметры запуска генерации.
//!
//! Константы самого алгоритма (размеры континентов, коэффициенты слияния) фиксированы
//! в [`crate::generator`] и здесь не настраиваются. Конфигурация задаёт только то,
//! что относится к конкретному прогону: желаемое число стран, сид и отладочный вывод.

use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::Result;

/// Настройки отладочного вывода
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSettings {
    /// Печатать сетку стран, сетку континентов и сводку
    #[serde(default = "default_print_layouts")]
    pub print_layouts: bool,

    /// Печатать текст настройки карты
    #[serde(default = "default_print_setup")]
    pub print_setup: bool,

    /// Куда сохранить PNG-карту континентов (не сохраняется, если не задано)
    #[serde(default)]
    pub png_path: Option<String>,

    /// Размер клетки сетки в пикселях на PNG
    #[serde(default = "default_cell_pixels")]
    pub cell_pixels: u32,

    /// Куда сохранить JSON-снимок мира (не сохраняется, если не задано)
    #[serde(default)]
    pub json_path: Option<String>,
}

fn default_print_layouts() -> bool {
    true
}
fn default_print_setup() -> bool {
    true
}
fn default_cell_pixels() -> u32 {
    16
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            print_layouts: true,
            print_setup: true,
            png_path: None,
            cell_pixels: 16,
            json_path: None,
        }
    }
}

/// Основные параметры генерации мира
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationParams {
    /// Примерное число стран (по умолчанию 42)
    #[serde(default = "default_goal_country_count")]
    pub goal_country_count: usize,

    /// Сид генератора случайных чисел; без сида используется системная энтропия
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub report: ReportSettings,
}

fn default_goal_country_count() -> usize {
    42
}

impl GenerationParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Пример
    /// ```toml
    /// goal_country_count = 60
    /// seed = 42
    ///
    /// [report]
    /// print_layouts = false
    /// png_path = "continents.png"
    /// ```
    pub fn from_toml_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            goal_country_count: 42,
            seed: None,
            report: ReportSettings::default(),
        }
    }
}

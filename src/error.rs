// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapGenError {
    #[error("Invalid goal country count: {0} (must be at least 1)")]
    InvalidCountryCount(usize),

    #[error("Seed range overflows u64: {worlds} worlds from seed {first_seed}")]
    InvalidSeedRange { first_seed: u64, worlds: usize },

    #[error("Image too large: {grid_width}x{grid_height} cells at {cell_pixels} px per cell")]
    ImageTooLarge {
        grid_width: u32,
        grid_height: u32,
        cell_pixels: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, MapGenError>;

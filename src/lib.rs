pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod report;
pub mod world;

pub use config::{GenerationParams, ReportSettings};
pub use error::{MapGenError, Result};
pub use generator::{Generation, WorldGenerator, generate, generate_seeded};
pub use world::{Continent, Country, Edge, World};

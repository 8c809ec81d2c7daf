pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod placer;
pub mod title;
pub mod validate;

pub use catalog::{RoomCatalog, RoomKind};
pub use config::GenerationParams;
pub use error::GenerationError;
pub use generator::{GeneratedMap, MapGenerator, generate_batch, generate_map};
pub use grid::{Cell, Grid, Position};

//! Service layer: the TVMaze HTTP client and the in-process catalog cache.

pub mod catalog;
pub mod tvmaze;

pub use catalog::{Catalog, CatalogSource};
pub use tvmaze::TvMazeClient;

//! Simulation core for Conway's Game of Life on a bounded grid.
//!
//! - [`cell`] — the two cell states and the transition rule.
//! - [`grid`] — the double-buffered grid: neighbour counting, ticking, reseeding.
//! - [`patterns`] — named seed patterns.
//! - [`history`] — repeat-generation detection.
//! - [`config`] — window / cell size / frame rate settings.
//! - [`error`] — configuration errors.
//!
//! Nothing in this crate draws, polls input or sleeps; the embedding
//! application drives [`Grid::tick`] and reads cells back to render them.

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;

pub use cell::Cell;
pub use config::LifeConfig;
pub use error::ConfigError;
pub use grid::Grid;
pub use history::History;
pub use patterns::{PATTERNS, Pattern, apply_pattern};

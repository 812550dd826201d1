//! Season statistics for squad-based matches
//!
//! Architecture:
//! - SeaORM entities over the stats schema, kept by the `migration` crate
//! - `sv::Stats` folds one player's season into per-faction summaries
//! - Tokio for async runtime and query deadlines

pub mod entity;
pub mod error;
pub mod model;
pub mod prelude;
pub mod state;
pub mod sv;
pub mod utils;

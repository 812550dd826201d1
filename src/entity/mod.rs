//! SeaORM entities for the stats schema
//!
//! Tables are created by the `migration` crate; these definitions must stay
//! in step with it.

pub mod aid;
pub mod damage;
pub mod death;
pub mod fob;
pub mod game;
pub mod points;
pub mod reputation;
pub mod session;

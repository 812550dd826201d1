//! One player's participation in one match

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::game;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stats_sessions")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub session_id: i64,
  pub steam64: i64,
  pub season: i32,
  pub game: i64,
  /// Unset while the player has not picked a side
  pub faction: Option<i32>,
  pub started_at: DateTime,
  pub length_seconds: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "game::Entity",
    from = "Column::Game",
    to = "game::Column::GameId"
  )]
  Game,
}

impl Related<game::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Game.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}

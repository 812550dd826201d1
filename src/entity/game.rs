use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::session;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stats_games")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub game_id: i64,
  pub season: i32,
  /// Faction that won, `None` for draws and matches still running
  pub winner: Option<i32>,
  pub start_timestamp: DateTime,
  pub end_timestamp: Option<DateTime>,
}

impl Model {
  /// Match length in seconds, `None` while the match has not ended.
  pub fn duration_secs(&self) -> Option<f64> {
    let end = self.end_timestamp?;
    Some((end - self.start_timestamp).num_milliseconds() as f64 / 1000.0)
  }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "session::Entity")]
  Sessions,
}

impl Related<session::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Sessions.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}

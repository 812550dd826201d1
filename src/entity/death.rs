use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::session;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stats_deaths")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub death_id: i64,
  /// Session of the victim
  pub session: i64,
  /// Session of the killer, `None` for environmental deaths
  pub instigator_session: Option<i64>,
  pub is_teamkill: bool,
  pub is_suicide: bool,
  pub timestamp: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "session::Entity",
    from = "Column::Session",
    to = "session::Column::SessionId"
  )]
  Victim,
  #[sea_orm(
    belongs_to = "session::Entity",
    from = "Column::InstigatorSession",
    to = "session::Column::SessionId"
  )]
  Instigator,
}

impl Related<session::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Victim.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}

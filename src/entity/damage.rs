use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::session;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stats_damage")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub damage_id: i64,
  pub session: i64,
  pub instigator_session: Option<i64>,
  /// The hit left the victim downed
  pub is_injure: bool,
  pub is_teamkill: bool,
  pub is_suicide: bool,
  pub amount: f64,
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

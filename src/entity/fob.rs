use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::session;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stats_fob_records")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub fob_id: i64,
  /// Session of the builder
  pub session: i64,
  /// Session of whoever destroyed it
  pub instigator_session: Option<i64>,
  pub built_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "session::Entity",
    from = "Column::Session",
    to = "session::Column::SessionId"
  )]
  Builder,
  #[sea_orm(
    belongs_to = "session::Entity",
    from = "Column::InstigatorSession",
    to = "session::Column::SessionId"
  )]
  Destroyer,
}

impl Related<session::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Builder.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}

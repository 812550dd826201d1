use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::session;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stats_aid_records")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub aid_id: i64,
  /// Session of the medic
  pub session: i64,
  pub is_revive: bool,
  pub timestamp: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "session::Entity",
    from = "Column::Session",
    to = "session::Column::SessionId"
  )]
  Session,
}

impl Related<session::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Session.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_points")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub steam64: i64,
  #[sea_orm(primary_key, auto_increment = false)]
  pub season: i32,
  #[sea_orm(primary_key, auto_increment = false)]
  pub faction: i32,
  pub xp: i64,
  pub credits: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

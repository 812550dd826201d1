pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_games;
mod m20260901_000002_create_sessions;
mod m20260901_000003_create_deaths;
mod m20260901_000004_create_damage;
mod m20260901_000005_create_aid_records;
mod m20260901_000006_create_fob_records;
mod m20260901_000007_create_user_points;
mod m20260901_000008_create_user_reputation;
mod m20260914_000009_add_fob_instigator;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20260901_000001_create_games::Migration),
      Box::new(m20260901_000002_create_sessions::Migration),
      Box::new(m20260901_000003_create_deaths::Migration),
      Box::new(m20260901_000004_create_damage::Migration),
      Box::new(m20260901_000005_create_aid_records::Migration),
      Box::new(m20260901_000006_create_fob_records::Migration),
      Box::new(m20260901_000007_create_user_points::Migration),
      Box::new(m20260901_000008_create_user_reputation::Migration),
      Box::new(m20260914_000009_add_fob_instigator::Migration),
    ]
  }
}

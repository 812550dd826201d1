use sea_orm_migration::prelude::*;

use super::m20260901_000002_create_sessions::StatsSessions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(StatsDamage::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(StatsDamage::DamageId)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(StatsDamage::Session).big_integer().not_null())
          .col(ColumnDef::new(StatsDamage::InstigatorSession).big_integer().null())
          .col(
            ColumnDef::new(StatsDamage::IsInjure)
              .boolean()
              .not_null()
              .default(false),
          )
          .col(
            ColumnDef::new(StatsDamage::IsTeamkill)
              .boolean()
              .not_null()
              .default(false),
          )
          .col(
            ColumnDef::new(StatsDamage::IsSuicide)
              .boolean()
              .not_null()
              .default(false),
          )
          .col(
            ColumnDef::new(StatsDamage::Amount).double().not_null().default(0.0),
          )
          .col(ColumnDef::new(StatsDamage::Timestamp).date_time().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_stats_damage_session")
              .from(StatsDamage::Table, StatsDamage::Session)
              .to(StatsSessions::Table, StatsSessions::SessionId)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_stats_damage_instigator_session")
              .from(StatsDamage::Table, StatsDamage::InstigatorSession)
              .to(StatsSessions::Table, StatsSessions::SessionId)
              .on_delete(ForeignKeyAction::SetNull),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_stats_damage_instigator_session")
          .table(StatsDamage::Table)
          .col(StatsDamage::InstigatorSession)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(StatsDamage::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum StatsDamage {
  Table,
  DamageId,
  Session,
  InstigatorSession,
  IsInjure,
  IsTeamkill,
  IsSuicide,
  Amount,
  Timestamp,
}

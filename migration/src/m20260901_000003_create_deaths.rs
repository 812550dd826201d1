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
          .table(StatsDeaths::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(StatsDeaths::DeathId)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(StatsDeaths::Session).big_integer().not_null())
          .col(ColumnDef::new(StatsDeaths::InstigatorSession).big_integer().null())
          .col(
            ColumnDef::new(StatsDeaths::IsTeamkill)
              .boolean()
              .not_null()
              .default(false),
          )
          .col(
            ColumnDef::new(StatsDeaths::IsSuicide)
              .boolean()
              .not_null()
              .default(false),
          )
          .col(ColumnDef::new(StatsDeaths::Timestamp).date_time().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_stats_deaths_session")
              .from(StatsDeaths::Table, StatsDeaths::Session)
              .to(StatsSessions::Table, StatsSessions::SessionId)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_stats_deaths_instigator_session")
              .from(StatsDeaths::Table, StatsDeaths::InstigatorSession)
              .to(StatsSessions::Table, StatsSessions::SessionId)
              .on_delete(ForeignKeyAction::SetNull),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_stats_deaths_session")
          .table(StatsDeaths::Table)
          .col(StatsDeaths::Session)
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_stats_deaths_instigator_session")
          .table(StatsDeaths::Table)
          .col(StatsDeaths::InstigatorSession)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(StatsDeaths::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum StatsDeaths {
  Table,
  DeathId,
  Session,
  InstigatorSession,
  IsTeamkill,
  IsSuicide,
  Timestamp,
}

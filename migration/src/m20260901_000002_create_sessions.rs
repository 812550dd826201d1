use sea_orm_migration::prelude::*;

use super::m20260901_000001_create_games::StatsGames;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(StatsSessions::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(StatsSessions::SessionId)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(StatsSessions::Steam64).big_integer().not_null())
          .col(ColumnDef::new(StatsSessions::Season).integer().not_null())
          .col(ColumnDef::new(StatsSessions::Game).big_integer().not_null())
          .col(ColumnDef::new(StatsSessions::Faction).integer().null())
          .col(ColumnDef::new(StatsSessions::StartedAt).date_time().not_null())
          .col(
            ColumnDef::new(StatsSessions::LengthSeconds)
              .double()
              .not_null()
              .default(0.0),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_stats_sessions_game")
              .from(StatsSessions::Table, StatsSessions::Game)
              .to(StatsGames::Table, StatsGames::GameId)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_stats_sessions_player_season")
          .table(StatsSessions::Table)
          .col(StatsSessions::Steam64)
          .col(StatsSessions::Season)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(StatsSessions::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum StatsSessions {
  Table,
  SessionId,
  Steam64,
  Season,
  Game,
  Faction,
  StartedAt,
  LengthSeconds,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(StatsGames::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(StatsGames::GameId)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(StatsGames::Season).integer().not_null())
          .col(ColumnDef::new(StatsGames::Winner).integer().null())
          .col(ColumnDef::new(StatsGames::StartTimestamp).date_time().not_null())
          .col(ColumnDef::new(StatsGames::EndTimestamp).date_time().null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(StatsGames::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum StatsGames {
  Table,
  GameId,
  Season,
  Winner,
  StartTimestamp,
  EndTimestamp,
}

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
          .table(StatsAidRecords::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(StatsAidRecords::AidId)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(StatsAidRecords::Session).big_integer().not_null())
          .col(
            ColumnDef::new(StatsAidRecords::IsRevive)
              .boolean()
              .not_null()
              .default(false),
          )
          .col(ColumnDef::new(StatsAidRecords::Timestamp).date_time().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_stats_aid_records_session")
              .from(StatsAidRecords::Table, StatsAidRecords::Session)
              .to(StatsSessions::Table, StatsSessions::SessionId)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_stats_aid_records_session")
          .table(StatsAidRecords::Table)
          .col(StatsAidRecords::Session)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(StatsAidRecords::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum StatsAidRecords {
  Table,
  AidId,
  Session,
  IsRevive,
  Timestamp,
}

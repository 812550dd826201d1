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
          .table(StatsFobRecords::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(StatsFobRecords::FobId)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(StatsFobRecords::Session).big_integer().not_null())
          .col(ColumnDef::new(StatsFobRecords::BuiltAt).date_time().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_stats_fob_records_session")
              .from(StatsFobRecords::Table, StatsFobRecords::Session)
              .to(StatsSessions::Table, StatsSessions::SessionId)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_stats_fob_records_session")
          .table(StatsFobRecords::Table)
          .col(StatsFobRecords::Session)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(StatsFobRecords::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum StatsFobRecords {
  Table,
  FobId,
  Session,
  InstigatorSession,
  BuiltAt,
}

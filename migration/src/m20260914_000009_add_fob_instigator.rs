use sea_orm_migration::prelude::*;

use super::m20260901_000006_create_fob_records::StatsFobRecords;

const INDEX: &str = "idx_stats_fob_records_instigator_session";

/// Destroyed FOBs are recorded against the destroyer's session.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .alter_table(
        Table::alter()
          .table(StatsFobRecords::Table)
          .add_column(
            ColumnDef::new(StatsFobRecords::InstigatorSession)
              .big_integer()
              .null(),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name(INDEX)
          .table(StatsFobRecords::Table)
          .col(StatsFobRecords::InstigatorSession)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_index(
        Index::drop().name(INDEX).table(StatsFobRecords::Table).to_owned(),
      )
      .await?;

    manager
      .alter_table(
        Table::alter()
          .table(StatsFobRecords::Table)
          .drop_column(StatsFobRecords::InstigatorSession)
          .to_owned(),
      )
      .await
  }
}

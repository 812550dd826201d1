use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(UserReputation::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(UserReputation::Steam64)
              .big_integer()
              .not_null()
              .primary_key(),
          )
          .col(
            ColumnDef::new(UserReputation::Reputation)
              .double()
              .not_null()
              .default(0.0),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(UserReputation::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum UserReputation {
  Table,
  Steam64,
  Reputation,
}

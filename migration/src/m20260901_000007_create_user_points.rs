use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(UserPoints::Table)
          .if_not_exists()
          .col(ColumnDef::new(UserPoints::Steam64).big_integer().not_null())
          .col(ColumnDef::new(UserPoints::Season).integer().not_null())
          .col(ColumnDef::new(UserPoints::Faction).integer().not_null())
          .col(
            ColumnDef::new(UserPoints::Xp).big_integer().not_null().default(0),
          )
          .col(
            ColumnDef::new(UserPoints::Credits)
              .big_integer()
              .not_null()
              .default(0),
          )
          .primary_key(
            Index::create()
              .col(UserPoints::Steam64)
              .col(UserPoints::Season)
              .col(UserPoints::Faction),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(UserPoints::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum UserPoints {
  Table,
  Steam64,
  Season,
  Faction,
  Xp,
  Credits,
}

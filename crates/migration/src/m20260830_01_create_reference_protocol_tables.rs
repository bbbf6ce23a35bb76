use sea_orm_migration::{
  prelude::*,
  schema::{custom, integer, json_binary, text, timestamp_with_time_zone, uuid},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(ReferenceProtocol::Table)
          .if_not_exists()
          .col(uuid(ReferenceProtocol::Id).primary_key())
          .col(text(ReferenceProtocol::Name).not_null())
          .col(json_binary(ReferenceProtocol::Steps).not_null())
          .col(
            timestamp_with_time_zone(ReferenceProtocol::CreatedAt)
              .not_null()
              .default(Expr::current_timestamp()),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_table(
        Table::create()
          .table(ProtocolStep::Table)
          .if_not_exists()
          .col(uuid(ProtocolStep::Id).primary_key())
          .col(uuid(ProtocolStep::ProtocolId).not_null())
          .col(integer(ProtocolStep::StepIndex).not_null())
          .col(custom(ProtocolStep::Embedding, "vector(1024)").not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_protocol_step_protocol_id")
              .from(ProtocolStep::Table, ProtocolStep::ProtocolId)
              .to(ReferenceProtocol::Table, ReferenceProtocol::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    // Steps are always loaded per protocol in step order
    manager
      .create_index(
        Index::create()
          .name("idx_protocol_step_protocol_id_step_index")
          .table(ProtocolStep::Table)
          .col(ProtocolStep::ProtocolId)
          .col(ProtocolStep::StepIndex)
          .unique()
          .to_owned(),
      )
      .await?;

    Ok(())
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(ProtocolStep::Table).to_owned())
      .await?;
    manager
      .drop_table(Table::drop().table(ReferenceProtocol::Table).to_owned())
      .await?;

    Ok(())
  }
}

#[derive(Iden)]
pub enum ReferenceProtocol {
  Table,

  Id,        // uuid v7
  Name,      // display name for ranked results
  Steps,     // structured steps as submitted (JSONB)
  CreatedAt, // creation timestamp
}

#[derive(Iden)]
pub enum ProtocolStep {
  Table,

  Id,         // uuid v7
  ProtocolId, // owning reference_protocol
  StepIndex,  // zero-based step position
  Embedding,  // vector(1024) embedding of the formatted step
}

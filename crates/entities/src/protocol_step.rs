use sea_orm::entity::prelude::*;
use sea_orm::prelude::PgVector;

/// Precomputed embedding for one step of a reference protocol.
///
/// `step_index` is the zero-based position within the protocol; loading the
/// rows ordered by it reconstructs the protocol embedding.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "protocol_step")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub protocol_id: Uuid,
  pub step_index: i32,
  pub embedding: PgVector,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "super::reference_protocol::Entity",
    from = "Column::ProtocolId",
    to = "super::reference_protocol::Column::Id"
  )]
  ReferenceProtocol,
}

impl Related<super::reference_protocol::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::ReferenceProtocol.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}

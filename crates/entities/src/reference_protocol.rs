use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One stored reference protocol: identifier, display name, and the
/// structured steps as submitted. Step embeddings live in `protocol_step`,
/// one row per step.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reference_protocol")]
pub struct Model {
  #[sea_orm(primary_key, auto_increment = false)]
  pub id: Uuid,
  pub name: String,
  pub steps: Json,
  pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "super::protocol_step::Entity")]
  ProtocolStep,
}

impl Related<super::protocol_step::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::ProtocolStep.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}

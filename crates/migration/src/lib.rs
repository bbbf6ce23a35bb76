pub use sea_orm_migration::*;

mod m20260830_01_create_reference_protocol_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![Box::new(
      m20260830_01_create_reference_protocol_tables::Migration,
    )]
  }
}

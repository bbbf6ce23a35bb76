use protocompare_ai::AiClient;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
  pub db: DatabaseConnection,
  pub ai: AiClient,
}

impl AppState {
  #[must_use]
  pub const fn new(db: DatabaseConnection, ai: AiClient) -> Self {
    Self { db, ai }
  }
}

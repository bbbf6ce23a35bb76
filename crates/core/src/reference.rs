use chrono::{DateTime, Utc};
use protocompare_ai::AiClient;
use protocompare_align::{AlignedPair, ProtocolEmbedding, compare};
use protocompare_entities::{protocol_step, reference_protocol};
use protocompare_shared::AppError;
use sea_orm::{
  ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
  TransactionTrait, prelude::PgVector,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{ProtocolStep, embed_protocol};

/// A stored reference protocol with its precomputed step embeddings.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReferenceProtocol {
  pub id: Uuid,
  pub name: String,
  pub steps: Vec<ProtocolStep>,
  pub created_at: DateTime<Utc>,
}

/// One ranked hit from a corpus search.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProtocolSearchHit {
  pub id: Uuid,
  pub name: String,
  /// Aggregate similarity against the query, in `[0, 1]`
  pub score: f32,
  pub alignment: Vec<AlignedPair>,
}

impl ReferenceProtocol {
  /// Store a named protocol in the corpus, embedding its steps once so later
  /// searches only read vectors.
  pub async fn create(
    ai: &AiClient,
    name: String,
    steps: Vec<ProtocolStep>,
    db: &DatabaseConnection,
  ) -> Result<Self, AppError> {
    let embedding = embed_protocol(ai, &steps).await?;

    let id = Uuid::now_v7();
    let now = Utc::now();

    let txn = db.begin().await?;

    reference_protocol::Entity::insert(reference_protocol::ActiveModel {
      id: Set(id),
      name: Set(name.clone()),
      steps: Set(serde_json::to_value(&steps)?),
      created_at: Set(now.into()),
    })
    .exec(&txn)
    .await?;

    let step_models: Vec<protocol_step::ActiveModel> = embedding
      .vectors()
      .iter()
      .enumerate()
      .map(|(index, vector)| protocol_step::ActiveModel {
        id: Set(Uuid::now_v7()),
        protocol_id: Set(id),
        step_index: Set(index as i32),
        embedding: Set(PgVector::from(vector.clone())),
      })
      .collect();

    protocol_step::Entity::insert_many(step_models)
      .exec(&txn)
      .await?;

    txn.commit().await?;

    tracing::info!(protocol_id = %id, steps = steps.len(), "stored reference protocol");

    Ok(Self {
      id,
      name,
      steps,
      created_at: now,
    })
  }

  /// Rank the whole corpus against a query protocol, best score first.
  ///
  /// Failures are isolated per candidate: a stored protocol that cannot be
  /// loaded or compared is logged and skipped, never aborting the scan.
  pub async fn search(
    ai: &AiClient,
    query_steps: &[ProtocolStep],
    limit: usize,
    db: &DatabaseConnection,
  ) -> Result<Vec<ProtocolSearchHit>, AppError> {
    let query = embed_protocol(ai, query_steps).await?;

    let candidates = reference_protocol::Entity::find().all(db).await?;
    let mut hits = Vec::with_capacity(candidates.len());

    for candidate in candidates {
      let embedding = match Self::load_embedding(candidate.id, db).await {
        Ok(embedding) => embedding,
        Err(err) => {
          tracing::warn!(protocol_id = %candidate.id, %err, "skipping candidate: embedding failed to load");
          continue;
        }
      };

      match compare(&query, &embedding) {
        Ok(result) => hits.push(ProtocolSearchHit {
          id: candidate.id,
          name: candidate.name,
          score: result.score,
          alignment: result.alignment,
        }),
        Err(err) => {
          tracing::warn!(protocol_id = %candidate.id, %err, "skipping candidate: comparison failed");
        }
      }
    }

    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(limit);

    Ok(hits)
  }

  /// Reconstruct a stored protocol embedding from its step rows.
  async fn load_embedding(
    protocol_id: Uuid,
    db: &DatabaseConnection,
  ) -> Result<ProtocolEmbedding, AppError> {
    let rows = protocol_step::Entity::find()
      .filter(protocol_step::Column::ProtocolId.eq(protocol_id))
      .order_by_asc(protocol_step::Column::StepIndex)
      .all(db)
      .await?;

    let vectors = rows.into_iter().map(|row| row.embedding.to_vec()).collect();

    Ok(ProtocolEmbedding::new(vectors)?)
  }
}

//! Error types for stats aggregation

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("Database error: {0}")]
  Database(#[from] sea_orm::DbErr),

  #[error("Query timed out after {}", humantime::format_duration(*.0))]
  Timeout(Duration),

  #[error("Invalid arguments: {0}")]
  InvalidArgs(String),
}

impl Error {
  /// Storage failures and deadlines may succeed on a later attempt, malformed
  /// parameters never will.
  pub fn is_retryable(&self) -> bool {
    matches!(self, Error::Database(_) | Error::Timeout(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Error type for `recipes-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A column held a value the domain types cannot represent.
  #[error("unexpected value in column {column}: {found}")]
  UnexpectedValue {
    column: &'static str,
    found:  String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

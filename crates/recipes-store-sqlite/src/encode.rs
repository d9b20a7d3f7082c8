//! Encoding and decoding helpers between the domain types and the values
//! stored in SQLite columns.
//!
//! Timestamps are the text SQLite's `datetime('now')` produces. The cost
//! column is read as a dynamically typed [`Value`] since clients may store
//! either numbers or free text in it.

use chrono::NaiveDateTime;
use recipes_core::recipe::{Cost, Recipe, timestamp};
use rusqlite::{Row, types::Value};

use crate::{Error, Result};

// ─── Cost ─────────────────────────────────────────────────────────────────────

pub fn encode_cost(cost: &Cost) -> Value {
  match cost {
    Cost::Integer(i) => Value::Integer(*i),
    Cost::Real(f) => Value::Real(*f),
    Cost::Text(s) => Value::Text(s.clone()),
  }
}

pub fn decode_cost(value: Value) -> Result<Cost> {
  match value {
    Value::Integer(i) => Ok(Cost::Integer(i)),
    Value::Real(f) => Ok(Cost::Real(f)),
    Value::Text(s) => Ok(Cost::Text(s)),
    Value::Null => Err(Error::UnexpectedValue { column: "cost", found: "NULL".into() }),
    Value::Blob(b) => Err(Error::UnexpectedValue {
      column: "cost",
      found:  format!("blob of {} bytes", b.len()),
    }),
  }
}

// ─── Timestamps ──────────────────────────────────────────────────────────────

pub fn decode_dt(s: &str) -> Result<NaiveDateTime> {
  timestamp::parse(s).map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Raw row ─────────────────────────────────────────────────────────────────

/// A `recipes` row exactly as SQLite hands it back, before decoding.
pub struct RawRecipe {
  pub id:          i64,
  pub title:       String,
  pub making_time: String,
  pub serves:      String,
  pub ingredients: String,
  pub cost:        Value,
  pub created_at:  String,
  pub updated_at:  String,
}

impl RawRecipe {
  /// Read a row selected with [`SELECT_RECIPE`](crate::schema::SELECT_RECIPE).
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawRecipe {
      id:          row.get(0)?,
      title:       row.get(1)?,
      making_time: row.get(2)?,
      serves:      row.get(3)?,
      ingredients: row.get(4)?,
      cost:        row.get(5)?,
      created_at:  row.get(6)?,
      updated_at:  row.get(7)?,
    })
  }

  pub fn into_recipe(self) -> Result<Recipe> {
    Ok(Recipe {
      id:          self.id,
      title:       self.title,
      making_time: self.making_time,
      serves:      self.serves,
      ingredients: self.ingredients,
      cost:        decode_cost(self.cost)?,
      created_at:  decode_dt(&self.created_at)?,
      updated_at:  decode_dt(&self.updated_at)?,
    })
  }
}

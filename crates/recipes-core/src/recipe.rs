//! Recipe — the single resource managed by the service.
//!
//! Requests arrive as loosely typed JSON ([`RecipeForm`]) and are checked for
//! presence of every required field before becoming a [`NewRecipe`]. The store
//! assigns the id and both timestamps.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Store-assigned row id.
pub type RecipeId = i64;

/// Names of the fields a create or update body must carry, in the order they
/// are reported back to clients.
pub const REQUIRED_FIELDS: &str = "title, making_time, serves, ingredients, cost";

// ─── Persisted recipe ────────────────────────────────────────────────────────

/// The cost column is dynamically typed: clients may send a number or free
/// text, and the store keeps whatever survives its integer affinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
  Integer(i64),
  Real(f64),
  Text(String),
}

/// A recipe row as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
  pub id:          RecipeId,
  pub title:       String,
  pub making_time: String,
  pub serves:      String,
  pub ingredients: String,
  pub cost:        Cost,
  #[serde(with = "timestamp")]
  pub created_at:  NaiveDateTime,
  #[serde(with = "timestamp")]
  pub updated_at:  NaiveDateTime,
}

/// The five client-supplied fields, validated and ready to write.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
  pub title:       String,
  pub making_time: String,
  pub serves:      String,
  pub ingredients: String,
  pub cost:        Cost,
}

// ─── Incoming form ───────────────────────────────────────────────────────────

/// Raw create/update body. Every field is optional here; presence is checked
/// by converting into [`NewRecipe`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeForm {
  pub title:       Option<Value>,
  pub making_time: Option<Value>,
  pub serves:      Option<Value>,
  pub ingredients: Option<Value>,
  pub cost:        Option<Value>,
}

impl RecipeForm {
  /// Parse a request body. Anything that is not a JSON object (including an
  /// empty or malformed body) yields a form with every field missing.
  pub fn from_slice(body: &[u8]) -> Self {
    match serde_json::from_slice::<Value>(body) {
      Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
      _ => Self::default(),
    }
  }
}

impl TryFrom<RecipeForm> for NewRecipe {
  type Error = Error;

  fn try_from(form: RecipeForm) -> Result<Self> {
    Ok(NewRecipe {
      title:       text_field("title", form.title)?,
      making_time: text_field("making_time", form.making_time)?,
      serves:      text_field("serves", form.serves)?,
      ingredients: text_field("ingredients", form.ingredients)?,
      cost:        cost_field(form.cost)?,
    })
  }
}

/// Falsy-style presence check: `null`, `false`, zero and the empty string all
/// count as missing. Arrays and objects are rejected too since no column can
/// hold them.
pub fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(_) | Value::Object(_) => false,
  }
}

fn text_field(name: &'static str, value: Option<Value>) -> Result<String> {
  match value {
    Some(v) if !is_truthy(&v) => Err(Error::MissingField(name)),
    Some(Value::String(s)) => Ok(s),
    Some(Value::Number(n)) => Ok(n.to_string()),
    Some(Value::Bool(_)) => Ok("1".to_owned()),
    _ => Err(Error::MissingField(name)),
  }
}

fn cost_field(value: Option<Value>) -> Result<Cost> {
  match value {
    Some(v) if !is_truthy(&v) => Err(Error::MissingField("cost")),
    Some(Value::String(s)) => Ok(Cost::Text(s)),
    Some(Value::Bool(_)) => Ok(Cost::Integer(1)),
    Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
      (Some(i), _) => Ok(Cost::Integer(i)),
      (None, Some(f)) => Ok(Cost::Real(f)),
      (None, None) => Err(Error::MissingField("cost")),
    },
    _ => Err(Error::MissingField("cost")),
  }
}

// ─── Timestamp wire format ───────────────────────────────────────────────────

/// Timestamps use the store's native `datetime('now')` text form.
pub mod timestamp {
  use chrono::NaiveDateTime;
  use serde::{Deserialize, Deserializer, Serializer};

  pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

  pub fn parse(s: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, FORMAT)
  }

  pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&dt.format(FORMAT))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
  }
}

//! Handlers for `/recipes` endpoints.
//!
//! | Method   | Path           | Notes |
//! |----------|----------------|-------|
//! | `POST`   | `/recipes`     | JSON body: the five required fields |
//! | `GET`    | `/recipes`     | All recipes |
//! | `GET`    | `/recipes/:id` | Single recipe |
//! | `PATCH`  | `/recipes/:id` | Body: the five required fields; full rewrite |
//! | `DELETE` | `/recipes/:id` | Hard delete |
//!
//! Every logical outcome (created, rejected, not found, removed) is a
//! `200 OK` with a message body; only store failures surface as `500`.

use std::sync::Arc;

use axum::{
  Json,
  body::Bytes,
  extract::{Path, State, rejection::PathRejection},
  http::{HeaderMap, header},
};
use recipes_core::{
  recipe::{NewRecipe, REQUIRED_FIELDS, Recipe, RecipeForm},
  store::RecipeStore,
};
use serde::Serialize;

use crate::error::ApiError;

const CREATED: &str = "Recipe successfully created!";
const CREATE_FAILED: &str = "Recipe creation failed!";
const DETAILS: &str = "Recipe details by id";
const UPDATED: &str = "Recipe successfully updated!";
const UPDATE_FAILED: &str = "Recipe update failed!";
const REMOVED: &str = "Recipe successfully removed!";
const NO_RECIPE: &str = "No Recipe found";

// ─── Response bodies ──────────────────────────────────────────────────────────

/// JSON body of every recipe endpoint.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Reply {
  /// A single recipe, wrapped in a one-element array.
  Recipe {
    message: &'static str,
    recipe:  [Recipe; 1],
  },
  /// A create or update body was missing a field.
  Rejected {
    message:  &'static str,
    required: &'static str,
  },
  Message {
    message: &'static str,
  },
  List {
    recipes: Vec<Recipe>,
  },
}

impl Reply {
  fn recipe(message: &'static str, recipe: Recipe) -> Json<Self> {
    Json(Reply::Recipe { message, recipe: [recipe] })
  }

  fn rejected(message: &'static str) -> Json<Self> {
    Json(Reply::Rejected { message, required: REQUIRED_FIELDS })
  }

  fn message(message: &'static str) -> Json<Self> { Json(Reply::Message { message }) }
}

// ─── Request helpers ──────────────────────────────────────────────────────────

/// Only `application/json` bodies are parsed; any other content type reads as
/// a form with every field missing.
fn read_form(headers: &HeaderMap, body: &[u8]) -> RecipeForm {
  let is_json = headers
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.split(';').next())
    .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"));

  if is_json {
    RecipeForm::from_slice(body)
  } else {
    RecipeForm::default()
  }
}

/// The captured id, or `None` when it cannot be decoded (e.g. percent-encoded
/// invalid UTF-8). No stored recipe can match such an id.
fn path_id(path: Result<Path<String>, PathRejection>) -> Option<String> {
  match path {
    Ok(Path(id)) => Some(id),
    Err(e) => {
      tracing::debug!(error = %e, "undecodable recipe id");
      None
    }
  }
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /recipes`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Json<Reply>, ApiError>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = match NewRecipe::try_from(read_form(&headers, &body)) {
    Ok(input) => input,
    Err(e) => {
      tracing::debug!(error = %e, "rejected recipe creation");
      return Ok(Reply::rejected(CREATE_FAILED));
    }
  };

  let recipe = store.create(input).await.map_err(ApiError::store)?;
  tracing::debug!(id = recipe.id, "recipe created");
  Ok(Reply::recipe(CREATED, recipe))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /recipes`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Reply>, ApiError>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let recipes = store.list().await.map_err(ApiError::store)?;
  Ok(Json(Reply::List { recipes }))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /recipes/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<String>, PathRejection>,
) -> Result<Json<Reply>, ApiError>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Some(id) = path_id(path) else {
    return Ok(Reply::message(NO_RECIPE));
  };

  let reply = match store.get(&id).await.map_err(ApiError::store)? {
    Some(recipe) => Reply::recipe(DETAILS, recipe),
    None => Reply::message(NO_RECIPE),
  };
  Ok(reply)
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /recipes/:id` — all five fields are rewritten together.
///
/// Whether the recipe exists is decided by the update's row count, not by a
/// prior lookup.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<String>, PathRejection>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Json<Reply>, ApiError>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = match NewRecipe::try_from(read_form(&headers, &body)) {
    Ok(input) => input,
    Err(e) => {
      tracing::debug!(error = %e, "rejected recipe update");
      return Ok(Reply::rejected(UPDATE_FAILED));
    }
  };

  let Some(id) = path_id(path) else {
    return Ok(Reply::message(NO_RECIPE));
  };

  let reply = match store.update(&id, input).await.map_err(ApiError::store)? {
    Some(recipe) => {
      tracing::debug!(id = recipe.id, "recipe updated");
      Reply::recipe(UPDATED, recipe)
    }
    None => Reply::message(NO_RECIPE),
  };
  Ok(reply)
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /recipes/:id`
///
/// Once the recipe is known to exist the client is told it was removed, even
/// if the delete statement itself reports a problem.
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<String>, PathRejection>,
) -> Result<Json<Reply>, ApiError>
where
  S: RecipeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Some(id) = path_id(path) else {
    return Ok(Reply::message(NO_RECIPE));
  };

  if store.get(&id).await.map_err(ApiError::store)?.is_none() {
    return Ok(Reply::message(NO_RECIPE));
  }

  match store.delete(&id).await {
    Ok(removed) => tracing::debug!(%id, removed, "recipe deleted"),
    Err(e) => tracing::warn!(%id, error = %e, "delete failed after existence check"),
  }
  Ok(Reply::message(REMOVED))
}
